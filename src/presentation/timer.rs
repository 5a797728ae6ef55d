// SPDX-License-Identifier: MPL-2.0
//! Countdown timer state machine.
//!
//! ```text
//!            start                 tick (remaining hits 0)
//!   Idle ───────────────► Running ─────────────────────────► Expired
//!    ▲   ◄─────────────── │                                     │
//!    │       pause        │ tick: remaining -= 1                │ start
//!    │                    ▼                                     ▼
//!    └──── reset / select_duration / auto-reset ◄──────── Running
//! ```
//!
//! The timer never talks to a clock. Periodic work is described by at most
//! one [`Schedule`] owned by the timer; the application turns it into a
//! runtime subscription and feeds each firing back through
//! [`CountdownTimer::fire`] together with the schedule id it was issued for.
//! Every transition that ends a schedule replaces or drops the handle, and a
//! fresh id is allocated for every new schedule, so a firing that was already
//! queued for a cancelled schedule is recognized as stale and ignored.

use super::CountdownDuration;
use std::time::Duration;

/// Interval between two ticks of a running countdown.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Identifies a countdown widget within the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerId {
    /// "Quick Round" timer of the classic deck.
    Quick,
    /// "Extended Round" timer of the classic deck.
    Extended,
    /// Single timer with selectable duration of the scroll deck.
    Main,
}

/// Identity of one schedule. Never reused within a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId(u64);

impl ScheduleId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What a schedule does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    /// Fires every [`TICK_INTERVAL`] while running.
    Tick,
    /// Fires once, `delay` after expiry, to return to idle.
    AutoReset(Duration),
}

/// The single pending schedule of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub id: ScheduleId,
    pub kind: ScheduleKind,
}

impl Schedule {
    /// Period with which the runtime should deliver this schedule.
    #[must_use]
    pub fn interval(&self) -> Duration {
        match self.kind {
            ScheduleKind::Tick => TICK_INTERVAL,
            ScheduleKind::AutoReset(delay) => delay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Expired,
}

/// How the remaining time is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// `m:ss`, e.g. `1:05`.
    #[default]
    Short,
    /// `mm:ss`, e.g. `01:05`.
    Padded,
}

/// Result of delivering a schedule firing to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// The id did not match the pending schedule.
    Stale,
    /// One second elapsed; the countdown keeps running.
    Ticked,
    /// The countdown reached zero.
    Expired,
    /// The expired countdown returned to idle on its own.
    AutoReset,
}

/// One countdown with its single optional schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    id: TimerId,
    duration: CountdownDuration,
    remaining: u32,
    phase: TimerPhase,
    schedule: Option<Schedule>,
    next_schedule: u64,
    auto_reset: Option<Duration>,
}

impl CountdownTimer {
    /// Creates an idle timer showing its full duration.
    #[must_use]
    pub fn new(id: TimerId, duration: CountdownDuration) -> Self {
        Self {
            id,
            duration,
            remaining: duration.secs(),
            phase: TimerPhase::Idle,
            schedule: None,
            next_schedule: 0,
            auto_reset: None,
        }
    }

    /// Enables returning to idle `delay` after expiry.
    #[must_use]
    pub fn with_auto_reset(mut self, delay: Option<Duration>) -> Self {
        self.auto_reset = delay;
        self
    }

    fn install(&mut self, kind: ScheduleKind) {
        self.next_schedule += 1;
        self.schedule = Some(Schedule {
            id: ScheduleId(self.next_schedule),
            kind,
        });
    }

    fn cancel(&mut self) {
        if let Some(schedule) = self.schedule.take() {
            tracing::trace!(timer = ?self.id, schedule = schedule.id.value(), "schedule cancelled");
        }
    }

    /// `Idle | Expired -> Running`. Returns `false` if already running.
    ///
    /// A paused countdown resumes from where it stopped; an expired one
    /// starts over from the full duration.
    pub fn start(&mut self) -> bool {
        if self.phase == TimerPhase::Running {
            return false;
        }
        if self.phase == TimerPhase::Expired || self.remaining == 0 {
            self.remaining = self.duration.secs();
        }
        self.cancel();
        self.phase = TimerPhase::Running;
        self.install(ScheduleKind::Tick);
        tracing::debug!(timer = ?self.id, remaining = self.remaining, "countdown started");
        true
    }

    /// `Running -> Idle`, keeping the remaining time. Returns `false` if not running.
    pub fn pause(&mut self) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }
        self.cancel();
        self.phase = TimerPhase::Idle;
        tracing::debug!(timer = ?self.id, remaining = self.remaining, "countdown paused");
        true
    }

    /// Starts when not running, pauses when running.
    pub fn toggle(&mut self) {
        if self.phase == TimerPhase::Running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Delivers a firing of the schedule `id`.
    pub fn fire(&mut self, id: ScheduleId) -> FireOutcome {
        let Some(schedule) = self.schedule.filter(|s| s.id == id) else {
            return FireOutcome::Stale;
        };
        match schedule.kind {
            ScheduleKind::Tick => self.tick(),
            ScheduleKind::AutoReset(_) => {
                self.cancel();
                self.remaining = self.duration.secs();
                self.phase = TimerPhase::Idle;
                tracing::debug!(timer = ?self.id, "countdown auto-reset");
                FireOutcome::AutoReset
            }
        }
    }

    fn tick(&mut self) -> FireOutcome {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return FireOutcome::Ticked;
        }
        self.cancel();
        self.phase = TimerPhase::Expired;
        if let Some(delay) = self.auto_reset {
            self.install(ScheduleKind::AutoReset(delay));
        }
        tracing::info!(timer = ?self.id, "countdown expired");
        FireOutcome::Expired
    }

    /// From any state: cancel the schedule, refill and go idle.
    pub fn reset(&mut self) {
        self.cancel();
        self.remaining = self.duration.secs();
        self.phase = TimerPhase::Idle;
    }

    /// Changes the countdown length. Ignored (returns `false`) while running.
    pub fn select_duration(&mut self, duration: CountdownDuration) -> bool {
        if self.phase == TimerPhase::Running {
            return false;
        }
        self.duration = duration;
        self.reset();
        true
    }

    /// Drops any pending schedule when the timer goes away.
    pub fn teardown(&mut self) {
        self.cancel();
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Idle;
        }
    }

    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn duration(&self) -> CountdownDuration {
        self.duration
    }

    #[must_use]
    pub fn schedule(&self) -> Option<Schedule> {
        self.schedule
    }

    /// Presentation-only flag: the display should warn that time is nearly up.
    #[must_use]
    pub fn is_ending(&self, threshold_secs: u32) -> bool {
        self.remaining <= threshold_secs
    }

    #[must_use]
    pub fn display(&self, format: TimeFormat) -> String {
        format_time(self.remaining, format)
    }
}

/// Formats whole seconds as `m:ss` or `mm:ss`.
#[must_use]
pub fn format_time(seconds: u32, format: TimeFormat) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    match format {
        TimeFormat::Short => format!("{mins}:{secs:02}"),
        TimeFormat::Padded => format!("{mins:02}:{secs:02}"),
    }
}
