// SPDX-License-Identifier: MPL-2.0
//! Presentation domain: deck content and the state machines driven by user input.
//!
//! Nothing in this module knows about Iced. Each type is a plain state holder
//! with total operations, so the whole presentation logic can be exercised
//! from unit tests without a window.
//!
//! - [`SlideNavigator`] - current slide index, bounds-clamped moves, progress
//! - [`ScrollSync`] - reconciles scroll position with the navigator
//! - [`CountdownTimer`] - `Idle / Running / Expired` countdown with one schedule handle
//! - [`ConceptPicker`] / [`BarrierPicker`] - single and multi select pickers
//! - [`Deck`] - the immutable slide list of each [`Variant`]
//! - [`Session`] - owner of all of the above for one open presentation

pub mod deck;
mod duration;
pub mod navigator;
pub mod scroll_sync;
pub mod selection;
pub mod session;
pub mod timer;

pub use deck::{Block, Card, Deck, Slide, Stat, Widget};
pub use duration::CountdownDuration;
pub use navigator::{Direction, SlideNavigator};
pub use scroll_sync::ScrollSync;
pub use selection::{Barrier, BarrierPicker, Concept, ConceptPicker};
pub use session::{Session, SessionSettings};
pub use timer::{
    format_time, CountdownTimer, FireOutcome, Schedule, ScheduleId, ScheduleKind, TimeFormat,
    TimerId, TimerPhase, TICK_INTERVAL,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deck layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// One slide at a time with previous/next controls and two fixed round timers.
    #[default]
    Classic,
    /// Continuous vertical scroll with navigation dots, one countdown and pickers.
    Scroll,
}

impl Variant {
    /// How countdowns are rendered in this layout.
    #[must_use]
    pub fn time_format(self) -> TimeFormat {
        match self {
            Variant::Classic => TimeFormat::Short,
            Variant::Scroll => TimeFormat::Padded,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classic => f.write_str("classic"),
            Variant::Scroll => f.write_str("scroll"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "scroll" => Ok(Variant::Scroll),
            other => Err(format!("unknown variant: {other} (expected classic or scroll)")),
        }
    }
}
