// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::presentation::Variant;
use crate::ui::{navbar, picker, slide_view, timer_panel};
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Arrow keys, previous/next buttons and navigation dots.
    Navbar(navbar::Message),
    Timer(timer_panel::Message),
    Picker(picker::Message),
    /// The scroll surface moved (scroll layout only).
    Scrolled { offset_y: f32, viewport_height: f32 },
    /// Periodic check while a scroll position is waiting to settle.
    ScrollSettleTick(Instant),
    WindowResized(Size),
    DismissWarnings,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

impl From<slide_view::Message> for Message {
    fn from(message: slide_view::Message) -> Self {
        match message {
            slide_view::Message::Timer(m) => Message::Timer(m),
            slide_view::Message::Picker(m) => Message::Picker(m),
        }
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Deck layout override; falls back to `[presentation] variant`.
    pub variant: Option<Variant>,
    /// One-based slide to open on. Out-of-range values are ignored.
    pub start_slide: Option<usize>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TEAMDECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Translation keys of problems met before the window opened (bad CLI input).
    pub warnings: Vec<String>,
}
