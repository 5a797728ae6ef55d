// SPDX-License-Identifier: MPL-2.0
//! Countdown duration domain type.

use crate::app::config::{DEFAULT_COUNTDOWN_SECS, MAX_COUNTDOWN_SECS, MIN_COUNTDOWN_SECS};

/// Countdown length in whole seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (5 seconds to one hour).
///
/// # Example
///
/// ```
/// use teamdeck::presentation::CountdownDuration;
///
/// let duration = CountdownDuration::new(30);
/// assert_eq!(duration.secs(), 30);
///
/// // Values outside range are clamped
/// let too_short = CountdownDuration::new(0);
/// assert_eq!(too_short.secs(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountdownDuration(u32);

impl CountdownDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_COUNTDOWN_SECS, MAX_COUNTDOWN_SECS))
    }

    #[must_use]
    pub fn secs(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }
}

impl Default for CountdownDuration {
    fn default() -> Self {
        Self(DEFAULT_COUNTDOWN_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(CountdownDuration::new(0).secs(), MIN_COUNTDOWN_SECS);
        assert_eq!(CountdownDuration::new(u32::MAX).secs(), MAX_COUNTDOWN_SECS);
    }

    #[test]
    fn new_accepts_presets() {
        assert_eq!(CountdownDuration::new(30).secs(), 30);
        assert_eq!(CountdownDuration::new(60).secs(), 60);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(CountdownDuration::default().secs(), DEFAULT_COUNTDOWN_SECS);
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            CountdownDuration::new(45).as_duration(),
            std::time::Duration::from_secs(45)
        );
    }
}
