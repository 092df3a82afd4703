// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the views.
//!
//! The `App` owns the navigation state, the state shared across views
//! (prompt browsing, contributor filter, form step) and the ports to the
//! outside world. Exactly one view is mounted at a time; its state lives in
//! [`screen::Screen`] and is rebuilt on every switch.

pub mod config;
mod message;
pub mod navigation;
pub mod paths;
pub mod screen;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message, Narrator};
pub use screen::{Mounted, SessionId};

use crate::application::port::{
    CameraSource, FormSubmitter, ImageHost, NarrationSink, ProgressStore,
};
use crate::domain::assets::AssetLayout;
use crate::domain::browsing::{ContributorIndex, PromptIndex};
use crate::domain::form::FormStep;
use crate::domain::view::ViewId;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{
    CameraDevice, CborProgressStore, CloudinaryHost, CpalNarration, EmailJsSubmitter,
    FfmpegCamera,
};
use crate::ui::notifications::{self, Notification};
use crate::ui::{footer, form, text};
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use navigation::{NavigationState, PromptBrowsing};
use screen::Screen;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// The collaborators the orchestrator talks to.
#[derive(Clone)]
pub struct Services {
    pub narration: Arc<dyn NarrationSink>,
    pub camera: Arc<dyn CameraSource>,
    pub submitter: Arc<dyn FormSubmitter>,
    pub host: Arc<dyn ImageHost>,
    pub progress: Arc<dyn ProgressStore>,
}

impl Services {
    /// Production adapters built from the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            narration: Arc::new(CpalNarration::spawn(1.0)),
            camera: Arc::new(FfmpegCamera::new(CameraDevice::default())),
            submitter: Arc::new(EmailJsSubmitter::new(&config.submission)),
            host: Arc::new(CloudinaryHost::new(&config.hosting)),
            progress: Arc::new(CborProgressStore::new()),
        }
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    layout: AssetLayout,
    services: Services,
    navigation: NavigationState,
    prompt: PromptBrowsing,
    contributor: ContributorIndex,
    /// Mirror of the form's step, kept while the form is unmounted so the
    /// footer progress stays meaningful.
    form_step: FormStep,
    /// Set once the text view's failure breaker trips; later mounts start
    /// with narration off.
    text_audio_disabled: bool,
    screen: Screen,
    footer: footer::State,
    notifications: notifications::Manager,
    window_size: Size,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.navigation.active())
            .field("session", &self.screen.session)
            .field("prompt", &self.prompt.index())
            .field("contributor", &self.contributor)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 boots through an `Fn`; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, localization and assets, then mounts the
    /// start view.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        config.apply_env_overrides();

        let i18n = I18n::new(flags.lang.clone(), &config);
        let services = Services::from_config(&config);
        let layout = asset_layout(&config);

        let start_view = flags
            .start_view
            .as_deref()
            .or(config.general.start_view.as_deref())
            .map_or(ViewId::default(), ViewId::resolve);

        tracing::info!(
            view = start_view.as_str(),
            assets = %layout.root().display(),
            "starting"
        );

        let (mut app, task) =
            Self::with_services(config, i18n, layout, services, start_view, Instant::now());
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        (app, task)
    }

    /// Builds the application around the given collaborators.
    pub fn with_services(
        config: Config,
        i18n: I18n,
        layout: AssetLayout,
        services: Services,
        start_view: ViewId,
        now: Instant,
    ) -> (Self, Task<Message>) {
        let theme = config.general.theme_mode.theme();
        let window_size = Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);

        let mut app = Self {
            i18n,
            config,
            layout,
            services,
            navigation: NavigationState::new(start_view),
            prompt: PromptBrowsing::new(now),
            contributor: ContributorIndex::default(),
            form_step: FormStep::default(),
            text_audio_disabled: false,
            screen: Screen {
                session: SessionId::first(),
                mounted: Mounted::About,
            },
            footer: footer::State::new(start_view),
            notifications: notifications::Manager::new(),
            window_size,
            theme,
        };

        let task = {
            let mut ctx = app.context(now);
            let (mounted, task) = update::mount(&mut ctx, start_view);
            ctx.screen.mounted = mounted;
            task
        };
        (app, task)
    }

    fn context(&mut self, now: Instant) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            layout: &self.layout,
            services: &self.services,
            navigation: &mut self.navigation,
            prompt: &mut self.prompt,
            contributor: &mut self.contributor,
            form_step: &mut self.form_step,
            text_audio_disabled: &mut self.text_audio_disabled,
            screen: &mut self.screen,
            footer: &mut self.footer,
            notifications: &mut self.notifications,
            window_size: &mut self.window_size,
            now,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating =
            self.navigation.is_loading_transition() || self.screen.mounted.is_animating();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(at) => *at,
            _ => Instant::now(),
        };
        self.update_at(message, now)
    }

    /// Processes `message` as if it arrived at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        if let Message::Notification(notification_message) = &message {
            self.notifications.handle_message(notification_message);
            return Task::none();
        }

        let mut ctx = self.context(now);
        match message {
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::SwitchView(target) => update::switch_view(&mut ctx, target),
            Message::SwitchViewNamed(raw) => update::switch_view_named(&mut ctx, &raw),
            Message::Header(msg) => update::handle_header_message(&mut ctx, &msg),
            Message::Footer(msg) => update::handle_footer_message(&mut ctx, msg),
            Message::Gallery(msg) => update::handle_gallery_message(&mut ctx, msg),
            Message::ByContributor(msg) => update::handle_by_contributor_message(&mut ctx, msg),
            Message::Form(msg) => update::handle_form_message(&mut ctx, msg),
            Message::About(msg) => update::handle_about_message(&mut ctx, &msg),
            Message::Card(msg) => update::handle_card_message(&mut ctx, &msg),
            Message::Notification(_) => Task::none(),
            Message::KeyPressed(key) => update::handle_key(&mut ctx, &key),
            Message::Gesture => update::handle_gesture(&mut ctx),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::WindowFocused => update::handle_window_focused(&mut ctx),
            Message::PlaybackFinished {
                session,
                narrator,
                result,
            } => update::handle_playback_finished(&mut ctx, session, narrator, &result),
            Message::CameraStarted { session, result } => {
                update::handle_camera_started(&mut ctx, session, result)
            }
            Message::ImagePicked {
                session,
                slot,
                path,
            } => update::handle_image_picked(&mut ctx, session, slot, path),
            Message::FormSubmitted { session, report } => {
                update::handle_form_submitted(&mut ctx, session, report)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            layout: &self.layout,
            navigation: &self.navigation,
            prompt: &self.prompt,
            contributor: self.contributor,
            form_step: self.form_step,
            screen: &self.screen,
            footer: &self.footer,
            notifications: &self.notifications,
        })
    }

    // -------------------------------------------------------------------------
    // Read access, used by the integration tests
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn active_view(&self) -> ViewId {
        self.navigation.active()
    }

    #[must_use]
    pub fn is_loading_transition(&self) -> bool {
        self.navigation.is_loading_transition()
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.screen.session
    }

    #[must_use]
    pub fn mounted(&self) -> &Mounted {
        &self.screen.mounted
    }

    #[must_use]
    pub fn prompt(&self) -> &PromptBrowsing {
        &self.prompt
    }

    #[must_use]
    pub fn prompt_index(&self) -> PromptIndex {
        self.prompt.index()
    }

    #[must_use]
    pub fn contributor(&self) -> ContributorIndex {
        self.contributor
    }

    #[must_use]
    pub fn form_step(&self) -> FormStep {
        self.form_step
    }

    #[must_use]
    pub fn form(&self) -> Option<&form::State> {
        match &self.screen.mounted {
            Mounted::Form(state) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&text::State> {
        match &self.screen.mounted {
            Mounted::Text(state) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

/// Asset root from CLI, environment or configuration, falling back to
/// `./assets`.
fn asset_layout(config: &Config) -> AssetLayout {
    let root = paths::get_assets_dir(config.assets.base_path.clone())
        .unwrap_or_else(|| PathBuf::from("assets"));
    AssetLayout::new(
        root,
        config.assets.image_extension(),
        config.assets.archive_extension(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_settings_enforce_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size");
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
