// SPDX-License-Identifier: MPL-2.0
//! One running presentation: the deck plus every piece of state the audience
//! can change while it is shown.
//!
//! The session is created once per window and dropped on close. It is the
//! single owner of the navigator, the timers and the pickers; UI components
//! receive borrowed parts of it.

use super::{
    BarrierPicker, ConceptPicker, CountdownDuration, CountdownTimer, Deck, Schedule, ScrollSync,
    SlideNavigator, TimeFormat, TimerId, Variant, Widget,
};
use crate::app::config::{Config, EXTENDED_ROUND_SECS, QUICK_ROUND_SECS};
use std::time::Duration;

/// Values read from the configuration that shape a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub variant: Variant,
    pub default_duration: CountdownDuration,
    pub presets: Vec<CountdownDuration>,
    pub auto_reset: Option<Duration>,
    pub ending_threshold_secs: u32,
    pub scroll_settle: Duration,
}

impl SessionSettings {
    /// Resolves the settings for `variant` from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config, variant: Variant) -> Self {
        let timer = &config.timer;
        Self {
            variant,
            default_duration: timer.default_duration(),
            presets: timer.presets(),
            auto_reset: timer
                .auto_reset(variant)
                .then(|| timer.auto_reset_delay()),
            ending_threshold_secs: timer.ending_threshold(variant),
            scroll_settle: config.presentation.scroll_settle(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default(), Variant::default())
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    deck: Deck,
    navigator: SlideNavigator,
    timers: Vec<CountdownTimer>,
    concepts: ConceptPicker,
    barriers: BarrierPicker,
    scroll: ScrollSync,
    settings: SessionSettings,
}

impl Session {
    #[must_use]
    pub fn new(settings: SessionSettings) -> Self {
        let deck = Deck::for_variant(settings.variant);
        let timers = build_timers(&deck, &settings);
        Self {
            navigator: SlideNavigator::new(deck.len()),
            scroll: ScrollSync::new(deck.len(), settings.scroll_settle),
            deck,
            timers,
            concepts: ConceptPicker::new(),
            barriers: BarrierPicker::new(),
            settings,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.settings.variant
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn time_format(&self) -> TimeFormat {
        self.settings.variant.time_format()
    }

    #[must_use]
    pub fn navigator(&self) -> &SlideNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut SlideNavigator {
        &mut self.navigator
    }

    #[must_use]
    pub fn timers(&self) -> &[CountdownTimer] {
        &self.timers
    }

    #[must_use]
    pub fn timer(&self, id: TimerId) -> Option<&CountdownTimer> {
        self.timers.iter().find(|t| t.id() == id)
    }

    pub fn timer_mut(&mut self, id: TimerId) -> Option<&mut CountdownTimer> {
        self.timers.iter_mut().find(|t| t.id() == id)
    }

    /// Every pending schedule, for the subscription layer.
    pub fn schedules(&self) -> impl Iterator<Item = (TimerId, Schedule)> + '_ {
        self.timers
            .iter()
            .filter_map(|t| t.schedule().map(|s| (t.id(), s)))
    }

    #[must_use]
    pub fn concepts(&self) -> &ConceptPicker {
        &self.concepts
    }

    #[must_use]
    pub fn barriers(&self) -> &BarrierPicker {
        &self.barriers
    }

    /// Both pickers at once, for the picker component.
    pub fn pickers_mut(&mut self) -> (&mut ConceptPicker, &mut BarrierPicker) {
        (&mut self.concepts, &mut self.barriers)
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollSync {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollSync {
        &mut self.scroll
    }

    /// Cancels every schedule. Called when the window goes away.
    pub fn teardown(&mut self) {
        for timer in &mut self.timers {
            timer.teardown();
        }
        tracing::debug!("session torn down");
    }
}

fn build_timers(deck: &Deck, settings: &SessionSettings) -> Vec<CountdownTimer> {
    let mut timers = Vec::new();
    if deck.hosts(Widget::RoundTimers) {
        timers.push(
            CountdownTimer::new(TimerId::Quick, CountdownDuration::new(QUICK_ROUND_SECS))
                .with_auto_reset(settings.auto_reset),
        );
        timers.push(
            CountdownTimer::new(TimerId::Extended, CountdownDuration::new(EXTENDED_ROUND_SECS))
                .with_auto_reset(settings.auto_reset),
        );
    }
    if deck.hosts(Widget::Countdown) {
        timers.push(
            CountdownTimer::new(TimerId::Main, settings.default_duration)
                .with_auto_reset(settings.auto_reset),
        );
    }
    timers
}
