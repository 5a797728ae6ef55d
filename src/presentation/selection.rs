// SPDX-License-Identifier: MPL-2.0
//! Concept and barrier pickers.
//!
//! Both option sets are closed enums, so an unknown id cannot be represented.
//! The "selected" marker on a card is derived from these states at render
//! time; nothing else records which card is highlighted.

use std::collections::BTreeSet;
use std::fmt;

/// Drawing prompts offered by the concept picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Concept {
    Aquarium,
    Safari,
    SpaceStation,
    Treehouse,
    PirateShip,
    HauntedHouse,
}

impl Concept {
    pub const ALL: [Concept; 6] = [
        Concept::Aquarium,
        Concept::Safari,
        Concept::SpaceStation,
        Concept::Treehouse,
        Concept::PirateShip,
        Concept::HauntedHouse,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Concept::Aquarium => "Aquarium",
            Concept::Safari => "Safari",
            Concept::SpaceStation => "Space Station",
            Concept::Treehouse => "Treehouse",
            Concept::PirateShip => "Pirate Ship",
            Concept::HauntedHouse => "Haunted House",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Concept::Aquarium => "🐠",
            Concept::Safari => "🦁",
            Concept::SpaceStation => "🚀",
            Concept::Treehouse => "🌳",
            Concept::PirateShip => "🏴‍☠️",
            Concept::HauntedHouse => "👻",
        }
    }

    /// Looks a concept up by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collaboration barriers the audience can vote on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Barrier {
    EgoAndCompetition,
    PoorCommunication,
    UnclearRoles,
    LackOfTrust,
    TimePressure,
    RemoteDistance,
}

impl Barrier {
    pub const ALL: [Barrier; 6] = [
        Barrier::EgoAndCompetition,
        Barrier::PoorCommunication,
        Barrier::UnclearRoles,
        Barrier::LackOfTrust,
        Barrier::TimePressure,
        Barrier::RemoteDistance,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Barrier::EgoAndCompetition => "Ego & Competition",
            Barrier::PoorCommunication => "Poor Communication",
            Barrier::UnclearRoles => "Unclear Roles",
            Barrier::LackOfTrust => "Lack of Trust",
            Barrier::TimePressure => "Time Pressure",
            Barrier::RemoteDistance => "Remote Distance",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Barrier::EgoAndCompetition => "🏆",
            Barrier::PoorCommunication => "📵",
            Barrier::UnclearRoles => "❓",
            Barrier::LackOfTrust => "🔒",
            Barrier::TimePressure => "⏰",
            Barrier::RemoteDistance => "🌍",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

impl fmt::Display for Barrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-select picker: choosing replaces the previous choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptPicker {
    selected: Option<Concept>,
}

impl ConceptPicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, concept: Concept) {
        self.selected = Some(concept);
    }

    #[must_use]
    pub fn selected(&self) -> Option<Concept> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, concept: Concept) -> bool {
        self.selected == Some(concept)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Multi-select picker: each barrier toggles independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarrierPicker {
    excluded: BTreeSet<Barrier>,
}

impl BarrierPicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `barrier`. Returns whether it is now excluded.
    pub fn toggle(&mut self, barrier: Barrier) -> bool {
        if self.excluded.remove(&barrier) {
            false
        } else {
            self.excluded.insert(barrier);
            true
        }
    }

    #[must_use]
    pub fn is_excluded(&self, barrier: Barrier) -> bool {
        self.excluded.contains(&barrier)
    }

    #[must_use]
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Excluded barriers in declaration order.
    pub fn excluded(&self) -> impl Iterator<Item = Barrier> + '_ {
        self.excluded.iter().copied()
    }

    pub fn clear(&mut self) {
        self.excluded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_concept_overwrites_previous_choice() {
        let mut picker = ConceptPicker::new();
        picker.select(Concept::from_name("Aquarium").unwrap());
        picker.select(Concept::from_name("Safari").unwrap());

        assert_eq!(picker.selected(), Some(Concept::Safari));
        assert!(picker.is_selected(Concept::Safari));
        assert!(!picker.is_selected(Concept::Aquarium));
    }

    #[test]
    fn concept_picker_starts_and_clears_to_none() {
        let mut picker = ConceptPicker::new();
        assert_eq!(picker.selected(), None);
        picker.select(Concept::Treehouse);
        picker.clear();
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn toggling_a_barrier_twice_restores_original_state() {
        let mut picker = BarrierPicker::new();
        let ego = Barrier::from_name("Ego & Competition").unwrap();

        assert!(picker.toggle(ego));
        assert!(picker.is_excluded(ego));
        assert!(!picker.toggle(ego));
        assert!(!picker.is_excluded(ego));
        assert_eq!(picker, BarrierPicker::new());
    }

    #[test]
    fn barriers_toggle_independently() {
        let mut picker = BarrierPicker::new();
        picker.toggle(Barrier::LackOfTrust);
        picker.toggle(Barrier::EgoAndCompetition);
        picker.toggle(Barrier::TimePressure);
        picker.toggle(Barrier::LackOfTrust);

        assert_eq!(picker.excluded_count(), 2);
        let excluded: Vec<Barrier> = picker.excluded().collect();
        assert_eq!(
            excluded,
            vec![Barrier::EgoAndCompetition, Barrier::TimePressure]
        );
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for concept in Concept::ALL {
            assert_eq!(Concept::from_name(concept.name()), Some(concept));
        }
        for barrier in Barrier::ALL {
            assert_eq!(Barrier::from_name(barrier.name()), Some(barrier));
        }
        assert_eq!(Concept::from_name("Moon Base"), None);
    }
}
