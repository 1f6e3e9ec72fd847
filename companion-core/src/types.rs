//! Closed enumerations and small newtypes shared across the crate.
//!
//! Settings that the record stores as numeric indicators are modelled as
//! closed enums so an out-of-range indicator is a decode error instead of a
//! value that flows silently through the system.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Timer mode
// ---------------------------------------------------------------------------

/// How the focus timer is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusMode {
    /// Preset countdowns in five-minute steps (indicator 0).
    #[default]
    FiveInterval,
    /// Free minute/second countdown (indicator 1).
    Custom,
}

impl FocusMode {
    /// Numeric indicator stored in the record.
    #[must_use]
    pub fn indicator(self) -> u8 {
        match self {
            Self::FiveInterval => 0,
            Self::Custom => 1,
        }
    }

    /// Inverse of [`FocusMode::indicator`].
    #[must_use]
    pub fn from_indicator(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::FiveInterval),
            1 => Some(Self::Custom),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Display language
// ---------------------------------------------------------------------------

/// UI display language, stored as a numeric indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (indicator 0).
    #[default]
    English,
    /// Español (indicator 1).
    Spanish,
    /// Português (indicator 2).
    Portuguese,
    /// Deutsch (indicator 3).
    German,
    /// 日本語 (indicator 4).
    Japanese,
    /// Nederlands (indicator 5).
    Dutch,
    /// Français (indicator 6).
    French,
    /// 汉语/漢語 (indicator 7).
    Chinese,
}

impl Language {
    /// Numeric indicator stored in the record.
    #[must_use]
    pub fn indicator(self) -> u8 {
        match self {
            Self::English => 0,
            Self::Spanish => 1,
            Self::Portuguese => 2,
            Self::German => 3,
            Self::Japanese => 4,
            Self::Dutch => 5,
            Self::French => 6,
            Self::Chinese => 7,
        }
    }

    /// Inverse of [`Language::indicator`].
    #[must_use]
    pub fn from_indicator(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::English),
            1 => Some(Self::Spanish),
            2 => Some(Self::Portuguese),
            3 => Some(Self::German),
            4 => Some(Self::Japanese),
            5 => Some(Self::Dutch),
            6 => Some(Self::French),
            7 => Some(Self::Chinese),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Which species artwork set a companion uses, an integer starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u8);

impl SpeciesId {
    /// Draw a uniformly random species in `1..=species_count`.
    #[must_use]
    pub fn random(rng: &mut impl Rng, species_count: u8) -> Self {
        Self(rng.gen_range(1..=species_count.max(1)))
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_mode_indicator_round_trip() {
        for mode in [FocusMode::FiveInterval, FocusMode::Custom] {
            assert_eq!(FocusMode::from_indicator(mode.indicator()), Some(mode));
        }
        assert_eq!(FocusMode::from_indicator(2), None);
    }

    #[test]
    fn language_indicator_round_trip() {
        for value in 0..8 {
            let lang = Language::from_indicator(value).expect("known indicator");
            assert_eq!(lang.indicator(), value);
        }
        assert_eq!(Language::from_indicator(8), None);
    }

    #[test]
    fn random_species_stays_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let species = SpeciesId::random(&mut rng, 3);
            assert!((1..=3).contains(&species.0));
        }
    }

    #[test]
    fn random_species_tolerates_zero_count() {
        let mut rng = rand::thread_rng();
        assert_eq!(SpeciesId::random(&mut rng, 0), SpeciesId(1));
    }
}
