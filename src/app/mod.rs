// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the presentation session, localization and
//! theming, and translates messages into side effects like programmatic
//! scrolling or closing the window. Startup policy (which variant, which
//! slide, which locale) is resolved once in [`App::new`].

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::presentation::{Session, SessionSettings};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    theme_mode: ThemeMode,
    /// Height of one slide in the scroll layout; tracks the scroll viewport.
    slide_height: f32,
    /// Translation keys of startup problems shown in a dismissible banner.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("variant", &self.session.variant())
            .field("slide", &self.session.navigator().current())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
///
/// Close requests are routed through `update` so timers are torn down first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
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
    /// Loads the configuration and opens the presentation described by `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(flags, &config);
        if let Some(key) = config_warning {
            app.warnings.push(key);
        }
        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let variant = flags
            .variant
            .unwrap_or_else(|| config.presentation.variant());
        let mut session = Session::new(SessionSettings::from_config(config, variant));

        if let Some(slide) = flags.start_slide {
            // One-based on the command line.
            let moved = slide
                .checked_sub(1)
                .and_then(|index| i64::try_from(index).ok())
                .is_some_and(|index| session.navigator_mut().jump_to(index));
            if !moved && slide != 1 {
                tracing::warn!(slide, "starting slide out of range, opening the first slide");
            }
        }

        let mut warnings = flags.warnings;
        if !i18n.load_errors().is_empty() {
            warnings.push("warning-i18n-load".to_string());
        }

        tracing::info!(
            ?variant,
            locale = %i18n.current_locale(),
            slides = session.deck().len(),
            "presentation ready"
        );

        Self {
            i18n,
            session,
            theme_mode: config.general.theme_mode,
            slide_height: WINDOW_DEFAULT_HEIGHT as f32,
            warnings,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn title(&self) -> String {
        let position = navbar_counter(&self.i18n, &self.session);
        self.i18n
            .tr_with_args("window-title-with-slide", &[("position", position.into())])
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_timer_subscription(&self.session),
            subscription::create_scroll_settle_subscription(&self.session),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            slide_height: &mut self.slide_height,
            warnings: &mut self.warnings,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Timer(timer_message) => update::handle_timer_message(&mut ctx, timer_message),
            Message::Picker(picker_message) => {
                update::handle_picker_message(&mut ctx, picker_message)
            }
            Message::Scrolled {
                offset_y,
                viewport_height,
            } => update::handle_scrolled(&mut ctx, offset_y, viewport_height),
            Message::ScrollSettleTick(now) => update::handle_scroll_settle(&mut ctx, now),
            Message::WindowResized(size) => update::handle_resized(&mut ctx, size),
            Message::DismissWarnings => update::handle_dismiss_warnings(&mut ctx),
            Message::WindowCloseRequested(window_id) => {
                update::handle_close_requested(&mut ctx, window_id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            slide_height: self.slide_height,
            warnings: &self.warnings,
        })
    }
}

fn navbar_counter(i18n: &I18n, session: &Session) -> String {
    crate::ui::navbar::counter_label(i18n, session.navigator())
}
