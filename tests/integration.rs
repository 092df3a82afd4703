// SPDX-License-Identifier: MPL-2.0
//! End-to-end behaviour of the orchestrator, driven through `App::update_at`
//! with in-memory ports and a simulated clock.

use beforelife::app::config::Config;
use beforelife::app::{App, Message, Narrator, Services};
use beforelife::application::contribution::ContributionReport;
use beforelife::application::port::{
    CameraError, CameraSource, FormSubmitter, ImageHost, NarrationSink, PlaybackError,
    ProgressError, ProgressStore, SubmissionError, SubmissionReceipt, UploadOutcome,
};
use beforelife::domain::assets::AssetLayout;
use beforelife::domain::browsing::PromptIndex;
use beforelife::domain::form::{Answer, FormSnapshot, FormStep, PreparedSubmission};
use beforelife::domain::frame::CameraFrame;
use beforelife::domain::view::ViewId;
use beforelife::i18n::fluent::I18n;
use beforelife::ui::{footer, form};
use futures_util::future::{self, BoxFuture, FutureExt};
use iced::keyboard::{self, key::Named};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// =============================================================================
// Fakes
// =============================================================================

#[derive(Default)]
struct FakeNarration {
    unlocked: AtomicBool,
    plays: Mutex<Vec<PathBuf>>,
    stops: AtomicUsize,
}

impl FakeNarration {
    fn play_count(&self) -> usize {
        self.plays.lock().unwrap().len()
    }

    fn last_played(&self) -> Option<PathBuf> {
        self.plays.lock().unwrap().last().cloned()
    }
}

impl NarrationSink for FakeNarration {
    fn unlock(&self) {
        self.unlocked.store(true, Ordering::SeqCst);
    }

    fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::SeqCst)
    }

    fn play(&self, clip: &Path) -> BoxFuture<'static, Result<(), PlaybackError>> {
        self.plays.lock().unwrap().push(clip.to_path_buf());
        future::ready(Ok(())).boxed()
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct FakeCamera {
    starts: AtomicUsize,
    active: AtomicBool,
}

impl CameraSource for FakeCamera {
    fn start(&self) -> BoxFuture<'static, Result<(), CameraError>> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.active.store(true, Ordering::SeqCst);
        future::ready(Ok(())).boxed()
    }

    fn stop(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn latest_frame(&self) -> Option<CameraFrame> {
        None
    }

    fn take_error(&self) -> Option<CameraError> {
        None
    }
}

struct NeverPolled;

impl FormSubmitter for NeverPolled {
    fn submit(
        &self,
        _submission: PreparedSubmission,
    ) -> BoxFuture<'static, Result<SubmissionReceipt, SubmissionError>> {
        future::ready(Ok(SubmissionReceipt::default())).boxed()
    }
}

impl ImageHost for NeverPolled {
    fn upload(&self, _files: Vec<PathBuf>) -> BoxFuture<'static, Vec<UploadOutcome>> {
        future::ready(Vec::new()).boxed()
    }
}

#[derive(Default)]
struct MemoryStore {
    saved: Mutex<Option<FormSnapshot>>,
}

impl MemoryStore {
    fn has_snapshot(&self) -> bool {
        self.saved.lock().unwrap().is_some()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<FormSnapshot>, ProgressError> {
        Ok(self.saved.lock().unwrap().clone())
    }

    fn save(&self, snapshot: &FormSnapshot) -> Result<(), ProgressError> {
        *self.saved.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ProgressError> {
        *self.saved.lock().unwrap() = None;
        Ok(())
    }
}

// =============================================================================
// Harness
// =============================================================================

struct Harness {
    app: App,
    start: Instant,
    narration: Arc<FakeNarration>,
    camera: Arc<FakeCamera>,
    store: Arc<MemoryStore>,
}

impl Harness {
    fn new(start_view: ViewId) -> Self {
        let mut config = Config::default();
        config.timing.transition_ms = Some(500);
        config.timing.autoplay_interval_ms = Some(3_000);
        config.timing.loader_char_ms = Some(1);
        config.timing.typewriter_char_ms = Some(1);
        config.text.camera_enabled = Some(false);
        config.text.sound_enabled = Some(true);

        let narration = Arc::new(FakeNarration::default());
        let camera = Arc::new(FakeCamera::default());
        let store = Arc::new(MemoryStore::default());
        let services = Services {
            narration: narration.clone(),
            camera: camera.clone(),
            submitter: Arc::new(NeverPolled),
            host: Arc::new(NeverPolled),
            progress: store.clone(),
        };

        let start = Instant::now();
        let (app, _task) = App::with_services(
            config,
            I18n::default(),
            AssetLayout::new("assets", "jpg", "png"),
            services,
            start_view,
            start,
        );

        Self {
            app,
            start,
            narration,
            camera,
            store,
        }
    }

    fn at(&self, millis: u64) -> Instant {
        self.start + Duration::from_millis(millis)
    }

    fn send(&mut self, message: Message, millis: u64) {
        let now = self.at(millis);
        let _ = self.app.update_at(message, now);
    }

    fn tick(&mut self, millis: u64) {
        let now = self.at(millis);
        let _ = self.app.update_at(Message::Tick(now), now);
    }

    /// Drives a freshly mounted form to the details step with one image and
    /// both consents given.
    fn fill_form(&mut self) {
        self.tick(60_000);
        self.tick(120_000);
        assert_eq!(self.app.form_step(), FormStep::Intro);

        self.send(Message::Form(form::Message::Next), 120_100);
        assert_eq!(self.app.form_step(), FormStep::Upload);

        let session = self.app.session();
        self.send(
            Message::ImagePicked {
                session,
                slot: 0,
                path: Some(PathBuf::from("/tmp/portrait.jpg")),
            },
            120_200,
        );
        self.send(Message::Form(form::Message::Upload), 120_300);
        assert_eq!(self.app.form_step(), FormStep::Details);

        self.send(Message::Form(form::Message::NameChanged("Ada".into())), 120_400);
        self.send(Message::Form(form::Message::TrainAiSelected(Answer::Yes)), 120_500);
        self.send(Message::Form(form::Message::PubliclySelected(Answer::No)), 120_600);
    }
}

fn report(result: Result<SubmissionReceipt, SubmissionError>) -> ContributionReport {
    ContributionReport {
        images: 1,
        failed_uploads: 0,
        result,
    }
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn switching_view_shows_loading_until_the_transition_ends() {
    let mut h = Harness::new(ViewId::default());
    assert_eq!(h.app.active_view(), ViewId::Gallery);

    h.send(Message::SwitchViewNamed("byPrompt".into()), 1_000);
    assert_eq!(h.app.active_view(), ViewId::ByPrompt);
    assert!(h.app.is_loading_transition());

    h.tick(1_400);
    assert!(h.app.is_loading_transition());

    h.tick(1_500);
    assert!(!h.app.is_loading_transition());
}

#[test]
fn unknown_view_name_falls_back_to_the_gallery() {
    let mut h = Harness::new(ViewId::About);
    h.send(Message::SwitchViewNamed("nowhere".into()), 10);
    assert_eq!(h.app.active_view(), ViewId::Gallery);
}

#[test]
fn each_switch_starts_a_new_session() {
    let mut h = Harness::new(ViewId::About);
    let first = h.app.session();

    h.send(Message::SwitchView(ViewId::Card), 10);
    let second = h.app.session();
    assert_ne!(first, second);

    // Re-selecting the active view only re-arms the indicator.
    h.send(Message::SwitchView(ViewId::Card), 20);
    assert_eq!(h.app.session(), second);
    assert!(h.app.is_loading_transition());
}

// =============================================================================
// Prompt browsing
// =============================================================================

#[test]
fn next_after_the_last_prompt_wraps_to_the_first() {
    let mut h = Harness::new(ViewId::ByPrompt);

    for step in 0..44 {
        h.send(Message::Footer(footer::Message::NextPrompt), 10 + step);
    }
    assert_eq!(h.app.prompt_index().value(), 44);

    h.send(Message::Footer(footer::Message::NextPrompt), 100);
    assert_eq!(h.app.prompt_index().value(), 0);
}

#[test]
fn arrow_keys_browse_prompts() {
    let mut h = Harness::new(ViewId::ByPrompt);

    h.send(Message::KeyPressed(keyboard::Key::Named(Named::ArrowRight)), 10);
    h.send(Message::KeyPressed(keyboard::Key::Named(Named::ArrowRight)), 20);
    h.send(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)), 30);
    assert_eq!(h.app.prompt_index().value(), 1);
}

#[test]
fn autoplay_advances_while_browsing_prompts() {
    let mut h = Harness::new(ViewId::ByPrompt);

    h.tick(2_900);
    assert_eq!(h.app.prompt_index().value(), 0);
    h.tick(3_000);
    assert_eq!(h.app.prompt_index().value(), 1);

    h.send(Message::Footer(footer::Message::TogglePause), 3_100);
    h.tick(20_000);
    assert_eq!(h.app.prompt_index().value(), 1);
}

#[test]
fn narration_waits_for_the_first_gesture() {
    let mut h = Harness::new(ViewId::ByPrompt);
    h.tick(3_000);
    assert_eq!(h.narration.play_count(), 0);

    h.send(Message::Gesture, 3_100);
    assert!(h.narration.is_unlocked());
    assert_eq!(h.narration.play_count(), 1);
    let expected = AssetLayout::new("assets", "jpg", "png").clip(PromptIndex::new(1).clip());
    assert_eq!(h.narration.last_played(), Some(expected));
}

#[test]
fn muted_prompts_stay_silent_after_a_gesture() {
    let mut h = Harness::new(ViewId::ByPrompt);
    h.send(Message::Footer(footer::Message::TogglePromptSound), 10);
    h.send(Message::Gesture, 20);
    h.send(Message::Footer(footer::Message::NextPrompt), 30);
    assert_eq!(h.narration.play_count(), 0);
}

#[test]
fn leaving_prompt_browsing_stops_narration() {
    let mut h = Harness::new(ViewId::ByPrompt);
    let before = h.narration.stops.load(Ordering::SeqCst);
    h.send(Message::SwitchView(ViewId::About), 10);
    assert!(h.narration.stops.load(Ordering::SeqCst) > before);
}

#[test]
fn out_of_range_contributor_is_ignored() {
    let mut h = Harness::new(ViewId::ByContributor);
    h.send(Message::Footer(footer::Message::SelectContributor(3)), 10);
    assert_eq!(h.app.contributor().value(), 3);

    h.send(Message::Footer(footer::Message::SelectContributor(9)), 20);
    assert_eq!(h.app.contributor().value(), 3);
}

// =============================================================================
// Form
// =============================================================================

#[test]
fn successful_submission_completes_the_form_and_clears_progress() {
    let mut h = Harness::new(ViewId::Form);
    h.fill_form();

    h.send(Message::Form(form::Message::Complete), 121_000);
    assert!(h.app.form().unwrap().is_submitting());
    assert!(h.store.has_snapshot());

    let session = h.app.session();
    h.send(
        Message::FormSubmitted {
            session,
            report: report(Ok(SubmissionReceipt::default())),
        },
        122_000,
    );

    assert_eq!(h.app.form_step(), FormStep::Completed);
    assert!(!h.store.has_snapshot());
}

#[test]
fn rejected_submission_keeps_the_details_and_shows_the_message() {
    let mut h = Harness::new(ViewId::Form);
    h.fill_form();

    h.send(Message::Form(form::Message::Complete), 121_000);
    let session = h.app.session();
    h.send(
        Message::FormSubmitted {
            session,
            report: report(Err(SubmissionError::Rejected("x".into()))),
        },
        122_000,
    );

    let form = h.app.form().unwrap();
    assert_eq!(h.app.form_step(), FormStep::Details);
    assert_eq!(form.error(), Some("x"));
    assert_eq!(form.fields().name, "Ada");
    assert!(!form.is_submitting());
    assert!(h.store.has_snapshot());
}

#[test]
fn partial_upload_raises_a_warning() {
    let mut h = Harness::new(ViewId::Form);
    h.fill_form();
    h.send(Message::Form(form::Message::Complete), 121_000);

    let session = h.app.session();
    h.send(
        Message::FormSubmitted {
            session,
            report: ContributionReport {
                images: 2,
                failed_uploads: 1,
                result: Ok(SubmissionReceipt::default()),
            },
        },
        122_000,
    );
    assert!(h.app.notifications().has_notifications());
}

#[test]
fn late_submission_result_does_not_touch_a_remounted_form() {
    let mut h = Harness::new(ViewId::Form);
    h.fill_form();
    h.send(Message::Form(form::Message::Complete), 121_000);
    let stale = h.app.session();

    h.send(Message::SwitchView(ViewId::About), 121_100);
    h.send(Message::SwitchView(ViewId::Form), 121_200);
    assert_eq!(h.app.form_step(), FormStep::Loading);

    h.send(
        Message::FormSubmitted {
            session: stale,
            report: report(Ok(SubmissionReceipt::default())),
        },
        122_000,
    );

    assert_eq!(h.app.form_step(), FormStep::Loading);
    assert!(!h.store.has_snapshot());
}

#[test]
fn saved_progress_is_offered_on_the_next_visit() {
    let mut h = Harness::new(ViewId::Form);
    h.fill_form();
    h.send(Message::Form(form::Message::Complete), 121_000);

    h.send(Message::SwitchView(ViewId::Gallery), 121_100);
    h.send(Message::SwitchView(ViewId::Form), 121_200);
    assert!(h.app.form().unwrap().has_resume_offer());

    h.send(Message::Form(form::Message::ResumeDiscarded), 121_300);
    assert!(!h.store.has_snapshot());
}

#[test]
fn learn_more_opens_the_about_view() {
    let mut h = Harness::new(ViewId::Form);
    h.fill_form();
    h.send(Message::Form(form::Message::Complete), 121_000);
    let session = h.app.session();
    h.send(
        Message::FormSubmitted {
            session,
            report: report(Ok(SubmissionReceipt::default())),
        },
        122_000,
    );

    h.send(Message::Form(form::Message::LearnMore), 130_000);
    assert_eq!(h.app.active_view(), ViewId::About);
}

// =============================================================================
// Text
// =============================================================================

/// Ticks every 250 ms from `from` to `to` (exclusive).
fn run_text(h: &mut Harness, from: u64, to: u64) {
    let mut at = from;
    while at < to {
        h.tick(at);
        at += 250;
    }
}

#[test]
fn repeated_audio_failures_disable_phrase_narration() {
    let mut h = Harness::new(ViewId::Text);
    run_text(&mut h, 0, 25_000);
    let plays = h.narration.play_count();
    assert!(plays >= 1, "a phrase should have reached the centre");

    let session = h.app.session();
    for offset in 0..3 {
        h.send(
            Message::PlaybackFinished {
                session,
                narrator: Narrator::Text,
                result: Err(PlaybackError::Decode("bad clip".into())),
            },
            25_000 + offset,
        );
    }
    assert!(h.app.text().unwrap().is_audio_disabled());

    run_text(&mut h, 25_000, 60_000);
    assert_eq!(h.narration.play_count(), plays);
}

#[test]
fn narration_stays_off_after_the_text_view_is_reopened() {
    let mut h = Harness::new(ViewId::Text);
    run_text(&mut h, 0, 25_000);
    let plays = h.narration.play_count();
    assert!(plays >= 1, "a phrase should have reached the centre");

    let session = h.app.session();
    for offset in 0..3 {
        h.send(
            Message::PlaybackFinished {
                session,
                narrator: Narrator::Text,
                result: Err(PlaybackError::NoDevice),
            },
            25_000 + offset,
        );
    }

    h.send(Message::SwitchView(ViewId::Gallery), 26_000);
    h.send(Message::SwitchView(ViewId::Text), 27_000);
    assert!(h.app.text().unwrap().is_audio_disabled());

    run_text(&mut h, 27_000, 90_000);
    assert!(h.app.text().unwrap().centered().is_some());
    assert_eq!(h.narration.play_count(), plays);
}

#[test]
fn blocked_phrase_plays_on_the_first_gesture() {
    let mut h = Harness::new(ViewId::Text);
    run_text(&mut h, 0, 25_000);
    let plays = h.narration.play_count();
    assert!(plays >= 1, "a phrase should have reached the centre");

    let session = h.app.session();
    h.send(
        Message::PlaybackFinished {
            session,
            narrator: Narrator::Text,
            result: Err(PlaybackError::Blocked),
        },
        25_000,
    );

    h.send(Message::Gesture, 25_100);
    assert_eq!(h.narration.play_count(), plays + 1);

    h.send(Message::Gesture, 25_200);
    assert_eq!(h.narration.play_count(), plays + 1);
}

#[test]
fn blocked_playback_does_not_count_as_failure() {
    let mut h = Harness::new(ViewId::Text);
    let session = h.app.session();
    for at in 0..5 {
        h.send(
            Message::PlaybackFinished {
                session,
                narrator: Narrator::Text,
                result: Err(PlaybackError::Blocked),
            },
            at,
        );
    }
    assert!(!h.app.text().unwrap().is_audio_disabled());
}

#[test]
fn camera_toggle_acquires_and_releases_the_device() {
    let mut h = Harness::new(ViewId::Text);
    assert_eq!(h.camera.starts.load(Ordering::SeqCst), 0);

    h.send(Message::Footer(footer::Message::ToggleTextCamera), 10);
    assert_eq!(h.camera.starts.load(Ordering::SeqCst), 1);

    let session = h.app.session();
    h.send(
        Message::CameraStarted {
            session,
            result: Ok(()),
        },
        20,
    );
    assert!(h.app.text().unwrap().is_camera_live());

    h.send(Message::SwitchView(ViewId::Gallery), 30);
    assert!(!h.camera.is_active());
}
