// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Countdown**: Duration bounds, presets and the "ending" threshold
//! - **Auto-reset**: Delay before an expired countdown returns to idle
//! - **Scroll**: Settle window used to reconcile scroll position with navigation

// ==========================================================================
// Countdown Defaults
// ==========================================================================

/// Default countdown length in seconds.
pub const DEFAULT_COUNTDOWN_SECS: u32 = 60;

/// Shortest countdown that can be configured.
pub const MIN_COUNTDOWN_SECS: u32 = 5;

/// Longest countdown that can be configured (one hour).
pub const MAX_COUNTDOWN_SECS: u32 = 3600;

/// Duration presets offered by the countdown picker.
pub const DEFAULT_COUNTDOWN_PRESETS: [u32; 2] = [30, 60];

/// Duration of the "Quick Round" timer of the classic deck.
pub const QUICK_ROUND_SECS: u32 = 30;

/// Duration of the "Extended Round" timer of the classic deck.
pub const EXTENDED_ROUND_SECS: u32 = 60;

/// Remaining seconds at or below which the classic deck flags a countdown as ending.
pub const CLASSIC_ENDING_THRESHOLD_SECS: u32 = 5;

/// Remaining seconds at or below which the scroll deck flags a countdown as ending.
pub const SCROLL_ENDING_THRESHOLD_SECS: u32 = 10;

// ==========================================================================
// Auto-reset Defaults
// ==========================================================================

/// Delay between expiry and automatic return to idle.
pub const DEFAULT_AUTO_RESET_DELAY_MS: u64 = 1500;

/// Shortest accepted auto-reset delay.
pub const MIN_AUTO_RESET_DELAY_MS: u64 = 100;

/// Longest accepted auto-reset delay.
pub const MAX_AUTO_RESET_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Time a scroll-derived slide index must stay stable before it is committed.
pub const DEFAULT_SCROLL_SETTLE_MS: u64 = 150;

/// Shortest accepted settle window.
pub const MIN_SCROLL_SETTLE_MS: u64 = 0;

/// Longest accepted settle window.
pub const MAX_SCROLL_SETTLE_MS: u64 = 2000;

/// How long scroll reports are ignored after a programmatic scroll-to-slide.
pub const PROGRAMMATIC_SCROLL_GRACE_MS: u64 = 500;
