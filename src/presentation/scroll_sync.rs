// SPDX-License-Identifier: MPL-2.0
//! Reconciliation between the scroll position and the slide navigator.
//!
//! In the scroll layout the user can move through the deck by scrolling, so
//! the scroll offset is a second, eventually consistent signal for the
//! current slide. It never owns the index: a settled scroll position is fed
//! back into [`SlideNavigator::jump_to`](super::SlideNavigator::jump_to).
//!
//! Two rules keep the signals from fighting:
//! - a derived index must stay unchanged for the settle window before it is
//!   committed, so intermediate positions of a fling are not committed;
//! - while a programmatic scroll (issued after an explicit navigation) is in
//!   flight, scroll reports are ignored until they reach the target or the
//!   grace period runs out, so the echo of our own scroll cannot move the
//!   navigator back.

use crate::app::config::PROGRAMMATIC_SCROLL_GRACE_MS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    index: usize,
    since: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flight {
    target: usize,
    started: Instant,
}

/// Scroll-derived slide tracking with settle and echo suppression.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    total: usize,
    settle: Duration,
    grace: Duration,
    candidate: Option<Candidate>,
    flight: Option<Flight>,
}

impl ScrollSync {
    #[must_use]
    pub fn new(total: usize, settle: Duration) -> Self {
        Self {
            total: total.max(1),
            settle,
            grace: Duration::from_millis(PROGRAMMATIC_SCROLL_GRACE_MS),
            candidate: None,
            flight: None,
        }
    }

    /// Maps a vertical offset to the nearest slide, given the height of one slide.
    ///
    /// Returns `None` for a non-positive or non-finite height.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn derive_index(&self, offset_y: f32, slide_height: f32) -> Option<usize> {
        if !slide_height.is_finite() || slide_height <= 0.0 || !offset_y.is_finite() {
            return None;
        }
        let raw = (offset_y / slide_height).round().max(0.0);
        let last = (self.total - 1) as f32;
        Some(raw.min(last) as usize)
    }

    /// Records that the application is scrolling to `target` on its own.
    pub fn begin_programmatic(&mut self, target: usize, now: Instant) {
        self.flight = Some(Flight {
            target,
            started: now,
        });
        self.candidate = None;
    }

    /// Feeds a scroll report into the tracker.
    pub fn observe(&mut self, offset_y: f32, slide_height: f32, now: Instant) {
        let Some(derived) = self.derive_index(offset_y, slide_height) else {
            return;
        };

        if let Some(flight) = self.flight {
            if derived == flight.target {
                self.flight = None;
                return;
            }
            if now.saturating_duration_since(flight.started) < self.grace {
                return;
            }
            tracing::debug!(target = flight.target, derived, "programmatic scroll grace expired");
            self.flight = None;
        }

        match self.candidate {
            Some(candidate) if candidate.index == derived => {}
            _ => {
                self.candidate = Some(Candidate {
                    index: derived,
                    since: now,
                });
            }
        }
    }

    /// Returns the scroll-derived index once it has been stable for the settle
    /// window and differs from `current`.
    ///
    /// A settled candidate is consumed whether or not it differs.
    pub fn settle(&mut self, now: Instant, current: usize) -> Option<usize> {
        let candidate = self.candidate?;
        if now.saturating_duration_since(candidate.since) < self.settle {
            return None;
        }
        self.candidate = None;
        (candidate.index != current).then_some(candidate.index)
    }

    /// Whether the tracker is waiting on something (drives the settle subscription).
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.candidate.is_some() || self.flight.is_some()
    }

    #[must_use]
    pub fn is_programmatic_in_flight(&self) -> bool {
        self.flight.is_some()
    }

    /// Drops expired flights that never got a matching report.
    pub fn expire(&mut self, now: Instant) {
        if let Some(flight) = self.flight {
            if now.saturating_duration_since(flight.started) >= self.grace {
                self.flight = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f32 = 600.0;

    fn sync() -> ScrollSync {
        ScrollSync::new(12, Duration::from_millis(150))
    }

    #[test]
    fn derive_index_rounds_to_nearest_slide() {
        let sync = sync();
        assert_eq!(sync.derive_index(0.0, HEIGHT), Some(0));
        assert_eq!(sync.derive_index(299.0, HEIGHT), Some(0));
        assert_eq!(sync.derive_index(301.0, HEIGHT), Some(1));
        assert_eq!(sync.derive_index(HEIGHT * 3.0, HEIGHT), Some(3));
    }

    #[test]
    fn derive_index_clamps_to_deck() {
        let sync = sync();
        assert_eq!(sync.derive_index(-50.0, HEIGHT), Some(0));
        assert_eq!(sync.derive_index(HEIGHT * 40.0, HEIGHT), Some(11));
    }

    #[test]
    fn derive_index_rejects_degenerate_heights() {
        let sync = sync();
        assert_eq!(sync.derive_index(100.0, 0.0), None);
        assert_eq!(sync.derive_index(100.0, -1.0), None);
        assert_eq!(sync.derive_index(f32::NAN, HEIGHT), None);
    }

    #[test]
    fn candidate_commits_only_after_settle_window() {
        let mut sync = sync();
        let t0 = Instant::now();

        sync.observe(HEIGHT * 2.0, HEIGHT, t0);
        assert_eq!(sync.settle(t0 + Duration::from_millis(100), 0), None);
        assert_eq!(sync.settle(t0 + Duration::from_millis(150), 0), Some(2));
        assert!(!sync.is_pending());
    }

    #[test]
    fn moving_candidate_restarts_settle_window() {
        let mut sync = sync();
        let t0 = Instant::now();

        sync.observe(HEIGHT, HEIGHT, t0);
        sync.observe(HEIGHT * 2.0, HEIGHT, t0 + Duration::from_millis(100));
        assert_eq!(sync.settle(t0 + Duration::from_millis(200), 0), None);
        assert_eq!(sync.settle(t0 + Duration::from_millis(250), 0), Some(2));
    }

    #[test]
    fn repeated_reports_on_same_slide_keep_original_timestamp() {
        let mut sync = sync();
        let t0 = Instant::now();

        sync.observe(HEIGHT, HEIGHT, t0);
        sync.observe(HEIGHT + 10.0, HEIGHT, t0 + Duration::from_millis(100));
        assert_eq!(sync.settle(t0 + Duration::from_millis(150), 0), Some(1));
    }

    #[test]
    fn settled_candidate_equal_to_current_is_consumed_silently() {
        let mut sync = sync();
        let t0 = Instant::now();

        sync.observe(HEIGHT * 3.0, HEIGHT, t0);
        assert_eq!(sync.settle(t0 + Duration::from_secs(1), 3), None);
        assert!(!sync.is_pending());
    }

    #[test]
    fn programmatic_scroll_suppresses_intermediate_reports() {
        let mut sync = sync();
        let t0 = Instant::now();

        sync.begin_programmatic(5, t0);
        sync.observe(HEIGHT * 2.0, HEIGHT, t0 + Duration::from_millis(10));
        assert!(sync.is_programmatic_in_flight());
        assert_eq!(sync.settle(t0 + Duration::from_secs(1), 5), None);

        sync.observe(HEIGHT * 5.0, HEIGHT, t0 + Duration::from_millis(20));
        assert!(!sync.is_programmatic_in_flight());
        assert!(!sync.is_pending());
    }

    #[test]
    fn programmatic_flight_expires_after_grace() {
        let mut sync = sync();
        let t0 = Instant::now();
        let late = t0 + Duration::from_millis(PROGRAMMATIC_SCROLL_GRACE_MS);

        sync.begin_programmatic(5, t0);
        sync.observe(HEIGHT * 2.0, HEIGHT, late);
        assert!(!sync.is_programmatic_in_flight());
        assert_eq!(sync.settle(late + Duration::from_millis(150), 5), Some(2));
    }

    #[test]
    fn begin_programmatic_drops_pending_candidate() {
        let mut sync = sync();
        let t0 = Instant::now();

        sync.observe(HEIGHT * 7.0, HEIGHT, t0);
        sync.begin_programmatic(1, t0);
        assert_eq!(sync.settle(t0 + Duration::from_secs(1), 1), None);
    }

    #[test]
    fn expire_clears_stale_flight() {
        let mut sync = sync();
        let t0 = Instant::now();

        sync.begin_programmatic(3, t0);
        sync.expire(t0 + Duration::from_millis(10));
        assert!(sync.is_programmatic_in_flight());
        sync.expire(t0 + Duration::from_millis(PROGRAMMATIC_SCROLL_GRACE_MS));
        assert!(!sync.is_programmatic_in_flight());
    }
}
