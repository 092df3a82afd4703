// SPDX-License-Identifier: MPL-2.0
//! Contribution form view.
//!
//! The flow is `Loading → Intro → Upload → Details → Completed`. Every
//! forward move needs an explicit click and its precondition:
//!
//! - Intro → Upload once the scripted paragraphs have been typed
//! - Upload → Details once at least one image slot is filled
//! - Details → Completed once the required answers are given and the
//!   submission succeeded
//!
//! The view performs no I/O. Picking a file and submitting are requested
//! through [`Event`]s; the orchestrator runs them and reports back with
//! [`State::image_picked`] and [`State::submission_finished`].

use crate::app::config::TimingConfig;
use crate::domain::form::{Answer, FormFields, FormSnapshot, FormStep, IMAGE_SLOT_COUNT};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::loader::Loader;
use crate::ui::styles;
use crate::ui::typewriter::Sequence;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, radio, scrollable, text, text_input, Column, Container, Row};
use iced::{ContentFit, Element, Length};
use std::path::PathBuf;
use std::time::Instant;

const INTRO_KEYS: [&str; 4] = ["form-intro-1", "form-intro-2", "form-intro-3", "form-intro-4"];
const DONE_KEYS: [&str; 5] = [
    "form-done-1",
    "form-done-2",
    "form-done-3",
    "form-done-4",
    "form-done-5",
];

/// Chosen image and its preview handle. Replacing a slot drops the old
/// handle with it.
#[derive(Debug, Clone)]
struct SlotImage {
    path: PathBuf,
    handle: Handle,
}

impl SlotImage {
    fn new(path: PathBuf) -> Self {
        Self {
            handle: Handle::from_path(&path),
            path,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Next,
    SlotPressed(usize),
    Upload,
    NameChanged(String),
    EmailChanged(String),
    OriginChanged(String),
    PromptChanged(String),
    PaymentSelected(Answer),
    PaypalChanged(String),
    TrainAiSelected(Answer),
    PubliclySelected(Answer),
    Complete,
    ResumeAccepted,
    ResumeDiscarded,
    LearnMore,
}

/// Everything the orchestrator needs to deliver a contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub snapshot: FormSnapshot,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The step changed; the chrome mirrors it.
    StepChanged(FormStep),
    /// Open a file picker for this slot.
    PickImage(usize),
    /// Save progress, then deliver.
    Submit(SubmitRequest),
    /// The saved snapshot was declined and can be deleted.
    DiscardSaved,
    LearnMore,
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug)]
pub struct State {
    step: FormStep,
    loader: Loader,
    intro: Sequence,
    outro: Sequence,
    slots: Vec<Option<SlotImage>>,
    fields: FormFields,
    submitting: bool,
    error: Option<String>,
    resume_offer: Option<FormSnapshot>,
}

impl State {
    /// Mounts the form at `now`. A saved snapshot is only offered, never
    /// applied until the visitor accepts it.
    #[must_use]
    pub fn new(i18n: &I18n, timing: &TimingConfig, now: Instant, saved: Option<FormSnapshot>) -> Self {
        let mut loader = Loader::new(i18n.tr("form-loader-title"), timing.loader_char());
        loader.start(now);

        Self {
            step: FormStep::Loading,
            loader,
            intro: Sequence::new(INTRO_KEYS.iter().map(|key| i18n.tr(key)), timing.typewriter_char()),
            outro: Sequence::new(DONE_KEYS.iter().map(|key| i18n.tr(key)), timing.typewriter_char()),
            slots: vec![None; IMAGE_SLOT_COUNT],
            fields: FormFields::default(),
            submitting: false,
            error: None,
            resume_offer: saved.filter(|snapshot| snapshot.filled_slots() > 0 || snapshot.fields != FormFields::default()),
        }
    }

    #[must_use]
    pub fn step(&self) -> FormStep {
        self.step
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[must_use]
    pub fn filled_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn has_resume_offer(&self) -> bool {
        self.resume_offer.is_some()
    }

    /// Whether `[Next]` is offered.
    #[must_use]
    pub fn can_leave_intro(&self) -> bool {
        self.step == FormStep::Intro && self.intro.is_done()
    }

    /// Whether `[Upload]` is enabled.
    #[must_use]
    pub fn can_leave_upload(&self) -> bool {
        self.step == FormStep::Upload && self.filled_slots() > 0
    }

    /// Whether `[Complete]` is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step == FormStep::Details && !self.submitting && self.fields.required_present()
    }

    /// Whether the form still needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self.step {
            FormStep::Loading => true,
            FormStep::Intro => !self.intro.is_done(),
            FormStep::Completed => !self.outro.is_done(),
            FormStep::Upload | FormStep::Details => false,
        }
    }

    pub fn tick(&mut self, now: Instant) -> Event {
        match self.step {
            FormStep::Loading => {
                if self.loader.tick(now) {
                    self.intro.start(now);
                    return self.enter(FormStep::Intro);
                }
            }
            FormStep::Intro => {
                self.intro.tick(now);
            }
            FormStep::Completed => {
                self.outro.tick(now);
            }
            FormStep::Upload | FormStep::Details => {}
        }
        Event::None
    }

    fn enter(&mut self, step: FormStep) -> Event {
        tracing::debug!(from = ?self.step, to = ?step, "form step");
        self.step = step;
        Event::StepChanged(step)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Next => {
                if self.can_leave_intro() {
                    return self.enter(FormStep::Upload);
                }
                Event::None
            }
            Message::SlotPressed(slot) => {
                if self.step == FormStep::Upload && slot < self.slots.len() {
                    Event::PickImage(slot)
                } else {
                    Event::None
                }
            }
            Message::Upload => {
                if self.can_leave_upload() {
                    return self.enter(FormStep::Details);
                }
                Event::None
            }
            Message::NameChanged(value) => self.edit(|fields| fields.name = value),
            Message::EmailChanged(value) => self.edit(|fields| fields.email = value),
            Message::OriginChanged(value) => self.edit(|fields| fields.origin = value),
            Message::PromptChanged(value) => self.edit(|fields| fields.custom_prompt = value),
            Message::PaymentSelected(answer) => self.edit(|fields| fields.payment = Some(answer)),
            Message::PaypalChanged(value) => self.edit(|fields| fields.paypal = value),
            Message::TrainAiSelected(answer) => self.edit(|fields| fields.train_ai = Some(answer)),
            Message::PubliclySelected(answer) => self.edit(|fields| fields.publicly = Some(answer)),
            Message::Complete => {
                if !self.can_submit() {
                    return Event::None;
                }
                self.submitting = true;
                self.error = None;
                Event::Submit(SubmitRequest {
                    snapshot: self.snapshot(chrono::Utc::now().timestamp_millis()),
                    files: self.chosen_files(),
                })
            }
            Message::ResumeAccepted => {
                if let Some(snapshot) = self.resume_offer.take() {
                    self.restore(snapshot);
                }
                Event::None
            }
            Message::ResumeDiscarded => {
                if self.resume_offer.take().is_some() {
                    Event::DiscardSaved
                } else {
                    Event::None
                }
            }
            Message::LearnMore => {
                if self.step == FormStep::Completed {
                    Event::LearnMore
                } else {
                    Event::None
                }
            }
        }
    }

    fn edit(&mut self, apply: impl FnOnce(&mut FormFields)) -> Event {
        if self.step == FormStep::Details && !self.submitting {
            apply(&mut self.fields);
        }
        Event::None
    }

    /// Fills `slot` with the picked file. A cancelled pick leaves it as is.
    pub fn image_picked(&mut self, slot: usize, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };
        if self.step != FormStep::Upload {
            return;
        }
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = Some(SlotImage::new(path));
        }
    }

    /// Applies the delivery result. Success completes the form; failure
    /// keeps every input and shows `message` inline.
    pub fn submission_finished(&mut self, result: Result<(), String>, now: Instant) -> Event {
        if !self.submitting {
            return Event::None;
        }
        self.submitting = false;
        match result {
            Ok(()) => {
                self.error = None;
                self.outro.start(now);
                self.enter(FormStep::Completed)
            }
            Err(message) => {
                self.error = Some(message);
                Event::None
            }
        }
    }

    /// Current progress, stamped with `saved_at_millis`.
    #[must_use]
    pub fn snapshot(&self, saved_at_millis: i64) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            images: self
                .slots
                .iter()
                .map(|slot| slot.as_ref().map(|image| image.path.clone()))
                .collect(),
            saved_at_millis,
        }
    }

    fn chosen_files(&self) -> Vec<PathBuf> {
        self.slots
            .iter()
            .flatten()
            .map(|image| image.path.clone())
            .collect()
    }

    fn restore(&mut self, snapshot: FormSnapshot) {
        self.fields = snapshot.fields;
        let mut missing = 0;
        for (slot, saved) in self.slots.iter_mut().zip(snapshot.images) {
            *slot = match saved {
                Some(path) if path.is_file() => Some(SlotImage::new(path)),
                Some(_) => {
                    missing += 1;
                    None
                }
                None => None,
            };
        }
        if missing > 0 {
            tracing::warn!(missing, "restored form refers to missing images");
        }
        tracing::info!(filled = self.filled_slots(), "form progress restored");
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        match self.step {
            FormStep::Loading => return self.loader.view(),
            FormStep::Completed => return self.view_completed(i18n),
            FormStep::Intro | FormStep::Upload | FormStep::Details => {}
        }

        let mut columns = Row::new()
            .spacing(spacing::XL)
            .padding(spacing::LG)
            .height(Length::Fill)
            .push(fade(self.view_intro(i18n), self.step > FormStep::Intro));

        if self.step >= FormStep::Upload {
            columns = columns.push(fade(self.view_upload(i18n), self.step > FormStep::Upload));
        }
        if self.step == FormStep::Details {
            columns = columns.push(self.view_details(i18n));
        }

        columns.into()
    }

    fn view_intro<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::LG)
            .width(Length::FillPortion(1));

        if let Some(offer) = &self.resume_offer {
            column = column.push(view_resume_offer(i18n, offer));
        }

        column = column.push(self.intro.view_body());

        if self.can_leave_intro() {
            column = column.push(
                button(text(i18n.tr("form-next")).size(typography::BODY))
                    .on_press(Message::Next)
                    .style(styles::button::link),
            );
        }

        scrollable(column).height(Length::Fill).into()
    }

    fn view_upload<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let uploading = self.step == FormStep::Upload;

        let slots: Vec<Element<'a, Message>> = self
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let content: Element<'a, Message> = match slot {
                    Some(image) => Image::new(image.handle.clone())
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .content_fit(ContentFit::Cover)
                        .into(),
                    None => text(i18n.tr("form-slot-empty"))
                        .size(typography::TITLE)
                        .into(),
                };
                button(
                    Container::new(content)
                        .center_x(Length::Fixed(sizing::SLOT))
                        .center_y(Length::Fixed(sizing::SLOT)),
                )
                .padding(0)
                .style(styles::button::slot(slot.is_some()))
                .on_press_maybe(uploading.then_some(Message::SlotPressed(index)))
                .into()
            })
            .collect();

        let count = i18n.tr_with_args(
            "form-slot-count",
            &[
                ("filled", FluentValue::from(to_i64(self.filled_slots()))),
                ("total", FluentValue::from(to_i64(IMAGE_SLOT_COUNT))),
            ],
        );

        let mut column = Column::new()
            .spacing(spacing::MD)
            .width(Length::FillPortion(2))
            .push(Row::with_children(slots).spacing(spacing::XS).wrap())
            .push(text(count).size(typography::CAPTION).style(styles::text::muted));

        if uploading {
            column = column.push(
                button(text(i18n.tr("form-upload")).size(typography::BODY))
                    .on_press_maybe(self.can_leave_upload().then_some(Message::Upload))
                    .style(styles::button::link),
            );
        }

        scrollable(column).height(Length::Fill).into()
    }

    fn view_details<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let fields = &self.fields;
        let enabled = !self.submitting;

        let input = |placeholder: &str, value: &'a str, on_input: fn(String) -> Message| {
            text_input(&i18n.tr(placeholder), value)
                .on_input_maybe(enabled.then_some(on_input))
                .size(typography::BODY)
                .padding(spacing::XS)
        };

        let answers = |selected: Option<Answer>, on_pick: fn(Answer) -> Message| {
            Row::new()
                .spacing(spacing::MD)
                .push(radio(i18n.tr("form-answer-yes"), Answer::Yes, selected, on_pick).size(typography::BODY))
                .push(radio(i18n.tr("form-answer-no"), Answer::No, selected, on_pick).size(typography::BODY))
        };

        let mut payment = Column::new()
            .spacing(spacing::XS)
            .push(radio(
                i18n.tr("form-payment-yes"),
                Answer::Yes,
                fields.payment,
                Message::PaymentSelected,
            ))
            .push(radio(
                i18n.tr("form-payment-no"),
                Answer::No,
                fields.payment,
                Message::PaymentSelected,
            ));
        if fields.payment == Some(Answer::Yes) {
            payment = payment.push(input("form-paypal-placeholder", &fields.paypal, Message::PaypalChanged));
        }

        let mut column = Column::new()
            .spacing(spacing::MD)
            .width(Length::FillPortion(1))
            .push(numbered("[2]", text(i18n.tr("form-details-intro")).size(typography::BODY)))
            .push(text(i18n.tr("form-details-hint")).size(typography::CAPTION).style(styles::text::muted))
            .push(numbered("[2.1]", labelled(i18n, "form-name-label", None, input("form-name-placeholder", &fields.name, Message::NameChanged))))
            .push(numbered("[2.2]", labelled(i18n, "form-email-label", Some("form-email-hint"), input("form-email-placeholder", &fields.email, Message::EmailChanged))))
            .push(numbered("[2.3]", labelled(i18n, "form-origin-label", None, input("form-origin-placeholder", &fields.origin, Message::OriginChanged))))
            .push(numbered("[2.4]", labelled(i18n, "form-prompt-label", Some("form-prompt-hint"), input("form-prompt-placeholder", &fields.custom_prompt, Message::PromptChanged))))
            .push(numbered("[2.5]", labelled(i18n, "form-payment-label", Some("form-payment-hint"), payment)))
            .push(numbered("[2.6*]", labelled(i18n, "form-train-label", None, answers(fields.train_ai, Message::TrainAiSelected))))
            .push(numbered("[2.7*]", labelled(i18n, "form-public-label", None, answers(fields.publicly, Message::PubliclySelected))));

        if let Some(error) = &self.error {
            column = column.push(text(error.as_str()).size(typography::BODY).style(styles::text::error));
        }

        let submit_label = if self.submitting {
            i18n.tr("form-sending")
        } else {
            i18n.tr("form-complete")
        };
        column = column.push(
            button(text(submit_label).size(typography::BODY))
                .on_press_maybe(self.can_submit().then_some(Message::Complete))
                .style(styles::button::link),
        );

        scrollable(column).height(Length::Fill).into()
    }

    fn view_completed<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::LG)
            .max_width(sizing::TEXT_COLUMN)
            .push(self.outro.view_body());

        if self.outro.is_done() {
            column = column.push(
                button(text(i18n.tr("form-learn-more")).size(typography::BODY))
                    .on_press(Message::LearnMore)
                    .style(styles::button::link),
            );
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}

fn view_resume_offer<'a>(i18n: &'a I18n, offer: &FormSnapshot) -> Element<'a, Message> {
    let prompt = i18n.tr_with_args(
        "form-resume-prompt",
        &[("count", FluentValue::from(to_i64(offer.filled_slots())))],
    );
    Column::new()
        .spacing(spacing::XS)
        .push(text(prompt).size(typography::BODY).style(styles::text::highlight))
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(
                    button(text(i18n.tr("form-resume-restore")).size(typography::BODY))
                        .on_press(Message::ResumeAccepted)
                        .style(styles::button::link),
                )
                .push(
                    button(text(i18n.tr("form-resume-discard")).size(typography::BODY))
                        .on_press(Message::ResumeDiscarded)
                        .style(styles::button::link),
                ),
        )
        .into()
}

fn fade<'a>(content: Element<'a, Message>, dimmed: bool) -> Element<'a, Message> {
    if dimmed {
        Container::new(content).style(styles::container::dimmed).into()
    } else {
        content
    }
}

fn numbered<'a>(number: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(text(number).size(typography::BODY))
        .push(content)
        .into()
}

fn labelled<'a>(
    i18n: &I18n,
    label_key: &str,
    hint_key: Option<&str>,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(text(i18n.tr(label_key)).size(typography::BODY));
    if let Some(hint) = hint_key {
        column = column.push(
            text(i18n.tr(hint))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );
    }
    column.push(control).into()
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn mounted(saved: Option<FormSnapshot>) -> (State, Instant) {
        let now = Instant::now();
        let state = State::new(&I18n::default(), &TimingConfig::default(), now, saved);
        (state, now)
    }

    /// Ticks far enough for the loader and the intro to finish.
    fn through_intro(state: &mut State, start: Instant) {
        let later = start + Duration::from_secs(60);
        assert_eq!(state.tick(later), Event::StepChanged(FormStep::Intro));
        state.tick(later + Duration::from_secs(600));
    }

    fn at_details() -> State {
        let (mut state, start) = mounted(None);
        through_intro(&mut state, start);
        state.update(Message::Next);
        state.image_picked(0, Some(PathBuf::from("a.jpg")));
        state.update(Message::Upload);
        assert_eq!(state.step(), FormStep::Details);
        state
    }

    #[test]
    fn starts_with_the_loader() {
        let (state, _) = mounted(None);
        assert_eq!(state.step(), FormStep::Loading);
        assert!(state.is_animating());
    }

    #[test]
    fn next_is_ignored_until_the_intro_has_been_typed() {
        let (mut state, start) = mounted(None);
        let typing = start + Duration::from_secs(60);
        state.tick(typing);
        assert_eq!(state.step(), FormStep::Intro);

        state.tick(typing + Duration::from_millis(100));
        assert!(!state.can_leave_intro());
        assert_eq!(state.update(Message::Next), Event::None);
        assert_eq!(state.step(), FormStep::Intro);

        state.tick(typing + Duration::from_secs(600));
        assert_eq!(
            state.update(Message::Next),
            Event::StepChanged(FormStep::Upload)
        );
    }

    #[test]
    fn upload_requires_one_filled_slot() {
        let (mut state, start) = mounted(None);
        through_intro(&mut state, start);
        state.update(Message::Next);

        assert_eq!(state.update(Message::Upload), Event::None);
        assert_eq!(state.step(), FormStep::Upload);

        assert_eq!(state.update(Message::SlotPressed(3)), Event::PickImage(3));
        state.image_picked(3, None);
        assert_eq!(state.filled_slots(), 0);

        state.image_picked(3, Some(PathBuf::from("x.jpg")));
        assert_eq!(
            state.update(Message::Upload),
            Event::StepChanged(FormStep::Details)
        );
    }

    #[test]
    fn replacing_a_slot_keeps_one_image() {
        let (mut state, start) = mounted(None);
        through_intro(&mut state, start);
        state.update(Message::Next);
        state.image_picked(0, Some(PathBuf::from("first.jpg")));
        state.image_picked(0, Some(PathBuf::from("second.jpg")));

        assert_eq!(state.filled_slots(), 1);
        assert_eq!(
            state.snapshot(0).images[0],
            Some(PathBuf::from("second.jpg"))
        );
    }

    #[test]
    fn complete_requires_both_consents() {
        let mut state = at_details();
        assert_eq!(state.update(Message::Complete), Event::None);

        state.update(Message::TrainAiSelected(Answer::Yes));
        state.update(Message::PubliclySelected(Answer::No));
        let Event::Submit(request) = state.update(Message::Complete) else {
            panic!("expected submit");
        };
        assert_eq!(request.files, vec![PathBuf::from("a.jpg")]);
        assert_eq!(request.snapshot.fields.train_ai, Some(Answer::Yes));
        assert!(state.is_submitting());

        // A second click while sending does nothing.
        assert_eq!(state.update(Message::Complete), Event::None);
    }

    #[test]
    fn failed_submission_keeps_input_and_shows_message() {
        let mut state = at_details();
        state.update(Message::NameChanged("Ana".into()));
        state.update(Message::TrainAiSelected(Answer::Yes));
        state.update(Message::PubliclySelected(Answer::Yes));
        state.update(Message::Complete);

        let event = state.submission_finished(Err("x".into()), Instant::now());

        assert_eq!(event, Event::None);
        assert_eq!(state.step(), FormStep::Details);
        assert_eq!(state.error(), Some("x"));
        assert_eq!(state.fields().name, "Ana");
        assert!(!state.is_submitting());
    }

    #[test]
    fn successful_submission_completes_the_form() {
        let mut state = at_details();
        state.update(Message::TrainAiSelected(Answer::No));
        state.update(Message::PubliclySelected(Answer::No));
        state.update(Message::Complete);

        let event = state.submission_finished(Ok(()), Instant::now());
        assert_eq!(event, Event::StepChanged(FormStep::Completed));
        assert_eq!(state.update(Message::LearnMore), Event::LearnMore);
    }

    #[test]
    fn saved_progress_is_offered_not_applied() {
        let saved = FormSnapshot {
            fields: FormFields {
                name: "Saved".into(),
                ..FormFields::default()
            },
            images: vec![None; IMAGE_SLOT_COUNT],
            saved_at_millis: 1,
        };
        let (mut state, _) = mounted(Some(saved));

        assert!(state.has_resume_offer());
        assert!(state.fields().name.is_empty());

        state.update(Message::ResumeAccepted);
        assert!(!state.has_resume_offer());
        assert_eq!(state.fields().name, "Saved");
    }

    #[test]
    fn discarding_saved_progress_asks_to_delete_it() {
        let saved = FormSnapshot {
            fields: FormFields {
                origin: "Lausanne".into(),
                ..FormFields::default()
            },
            images: vec![None; IMAGE_SLOT_COUNT],
            saved_at_millis: 1,
        };
        let (mut state, _) = mounted(Some(saved));

        assert_eq!(state.update(Message::ResumeDiscarded), Event::DiscardSaved);
        assert!(state.fields().origin.is_empty());
        assert_eq!(state.update(Message::ResumeDiscarded), Event::None);
    }

    #[test]
    fn empty_snapshot_is_not_offered() {
        let empty = FormSnapshot {
            images: vec![None; IMAGE_SLOT_COUNT],
            ..FormSnapshot::default()
        };
        let (state, _) = mounted(Some(empty));
        assert!(!state.has_resume_offer());
    }
}
