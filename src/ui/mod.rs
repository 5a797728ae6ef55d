// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message` enum and an `update` function that
//! mutates presentation state and reports an `Event` to the application.
//!
//! # Components
//!
//! - [`navbar`] - Previous/next bar, slide counter, dot rail and progress bar
//! - [`timer_panel`] - Countdown display, presets and start/pause/reset controls
//! - [`picker`] - Concept and barrier selection cards
//! - [`slide_view`] - Renders one slide from its content blocks
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, progress bars)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes

pub mod design_tokens;
pub mod navbar;
pub mod picker;
pub mod slide_view;
pub mod styles;
pub mod theming;
pub mod timer_panel;
