// SPDX-License-Identifier: MPL-2.0
//! Slide navigation state.
//!
//! The navigator is the single source of truth for which slide is current.
//! Every input source (arrow keys, previous/next buttons, navigation dots and
//! the settled scroll position) funnels through [`SlideNavigator::advance`],
//! [`SlideNavigator::retreat`] or [`SlideNavigator::jump_to`]. Out-of-range
//! requests are no-ops, never errors.

/// Direction of the last committed move, used to pick a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Current slide index over a fixed-length deck.
///
/// Invariant: `current < total` and `total >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideNavigator {
    current: usize,
    total: usize,
    last_direction: Direction,
}

impl SlideNavigator {
    /// Creates a navigator positioned on the first slide.
    ///
    /// A zero-length deck is treated as a single slide so the invariant holds.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            last_direction: Direction::Forward,
        }
    }

    /// Moves to the next slide. Returns `true` if the index changed.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.total {
            self.current += 1;
            self.last_direction = Direction::Forward;
            true
        } else {
            false
        }
    }

    /// Moves to the previous slide. Returns `true` if the index changed.
    pub fn retreat(&mut self) -> bool {
        if self.current >= 1 {
            self.current -= 1;
            self.last_direction = Direction::Backward;
            true
        } else {
            false
        }
    }

    /// Jumps to `index`. Indices outside `[0, total)` are ignored.
    ///
    /// Takes a signed index so callers can forward raw, possibly negative,
    /// positions without pre-validating them. Returns `true` if the index changed.
    pub fn jump_to(&mut self, index: i64) -> bool {
        let Ok(target) = usize::try_from(index) else {
            return false;
        };
        if target >= self.total || target == self.current {
            return false;
        }
        self.last_direction = if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = target;
        true
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Fraction of the deck reached, counting the current slide: `(current + 1) / total`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.total as f32
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// One-based "n / total" counter shown in the corner of the deck.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }
}
