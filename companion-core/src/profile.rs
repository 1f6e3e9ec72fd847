//! The profile model: one user's saved state.
//!
//! A [`Profile`] is owned by the running session — loaded once, mutated in
//! memory, and flushed through the store after every mutation that must
//! survive a crash. Nothing here touches the filesystem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::CareConfig;
use crate::error::ProfileError;
use crate::types::{FocusMode, Language, SpeciesId};

/// Upper bound for happiness and hunger.
pub const STAT_MAX: u8 = 10;

/// Lower bound for happiness while the companion lives. Happiness never
/// reads 0 on a living companion.
pub const HAPPINESS_MIN: u8 = 1;

/// Number of achievement slots in the current schema.
pub const ACHIEVEMENT_COUNT: usize = 8;

/// GUI accent color token assigned to fresh and migrated profiles.
pub const DEFAULT_GUI_COLOR: &str = "default";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Per-profile user preferences persisted alongside the care stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Timer mode.
    pub focus_mode: FocusMode,
    /// UI display language.
    pub language: Language,
    /// Play a chime when a session completes.
    pub session_sound: bool,
    /// Loop ambient sound while a session runs.
    pub background_sound: bool,
}

// ---------------------------------------------------------------------------
// Companion
// ---------------------------------------------------------------------------

/// The virtual pet cared for by studying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    /// Display name chosen by the user.
    pub name: String,
    /// Species artwork selector.
    pub species: SpeciesId,
    /// Display level. Derived from total study time; the on-disk value is
    /// advisory and overwritten on every load.
    pub level: u32,
    /// Contentment, 1–10.
    pub happiness: u8,
    /// Satiety, 0–10.
    pub hunger: u8,
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// Fixed-size one-way achievement flags.
///
/// Each position is bound to one achievement. Once a flag is set it stays
/// set for the life of the profile — the death reset does not clear it.
/// On disk the flags are a single fixed-length digit substring, one `0`/`1`
/// digit per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Achievements([bool; ACHIEVEMENT_COUNT]);

impl Achievements {
    /// All flags cleared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the flag at `index` has been earned.
    ///
    /// # Panics
    /// Panics if `index` is outside the fixed slot range.
    #[must_use]
    pub fn is_set(&self, index: usize) -> bool {
        assert!(index < ACHIEVEMENT_COUNT, "achievement index out of range");
        self.0[index]
    }

    /// Set the flag at `index`. One-way: already-set flags stay set.
    ///
    /// # Panics
    /// Panics if `index` is outside the fixed slot range.
    pub fn set(&mut self, index: usize) {
        assert!(index < ACHIEVEMENT_COUNT, "achievement index out of range");
        self.0[index] = true;
    }

    /// Number of earned achievements.
    #[must_use]
    pub fn earned(&self) -> usize {
        self.0.iter().filter(|&&flag| flag).count()
    }
}

impl FromStr for Achievements {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProfileError::InvalidField {
            field: "achievements",
            value: s.to_string(),
        };
        if s.len() != ACHIEVEMENT_COUNT {
            return Err(invalid());
        }
        let mut flags = [false; ACHIEVEMENT_COUNT];
        for (slot, digit) in flags.iter_mut().zip(s.chars()) {
            *slot = match digit {
                '0' => false,
                '1' => true,
                _ => return Err(invalid()),
            };
        }
        Ok(Self(flags))
    }
}

impl fmt::Display for Achievements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.0 {
            write!(f, "{}", u8::from(flag))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The root persisted entity: one user's saved state.
///
/// Exactly one profile is active per session. It is constructed fresh on
/// first run or decoded from the stored record, mutated in place by the
/// decay and progression engines and by user actions, and serialized back
/// through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Account name shown in the UI.
    pub username: String,
    /// Date the profile was created. Survives the death reset.
    pub join_date: NaiveDate,
    /// Date of the previous login; `None` until the first load completes.
    pub last_login: Option<NaiveDate>,
    /// Lifetime focused seconds. Only an explicit death reset lowers it.
    pub total_time: u64,
    /// Spendable token balance.
    pub money: u64,
    /// Selected background asset index (consumed only by the UI).
    pub background: u32,
    /// GUI accent color token (consumed only by the UI).
    pub gui_color: String,
    /// User preferences.
    pub settings: Settings,
    /// The companion and its care stats.
    pub companion: Companion,
    /// One-way achievement flags.
    pub achievements: Achievements,
}

impl Profile {
    /// Build a first-run profile: no login baseline, empty balances, care
    /// stats at the configured starting values.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        companion_name: impl Into<String>,
        species: SpeciesId,
        join_date: NaiveDate,
        care: &CareConfig,
    ) -> Self {
        Self {
            username: username.into(),
            join_date,
            last_login: None,
            total_time: 0,
            money: 0,
            background: 0,
            gui_color: DEFAULT_GUI_COLOR.to_string(),
            settings: Settings::default(),
            companion: Companion {
                name: companion_name.into(),
                species,
                level: 0,
                happiness: care.start_happiness,
                hunger: care.start_hunger,
            },
            achievements: Achievements::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achievement_string_round_trip() {
        let parsed: Achievements = "10100001".parse().expect("valid digit string");
        assert!(parsed.is_set(0));
        assert!(!parsed.is_set(1));
        assert!(parsed.is_set(2));
        assert!(parsed.is_set(7));
        assert_eq!(parsed.earned(), 3);
        assert_eq!(parsed.to_string(), "10100001");
    }

    #[test]
    fn achievement_string_rejects_wrong_length() {
        assert!("1010".parse::<Achievements>().is_err());
        assert!("101000011".parse::<Achievements>().is_err());
    }

    #[test]
    fn achievement_string_rejects_non_binary_digits() {
        assert!("10100002".parse::<Achievements>().is_err());
        assert!("1010000x".parse::<Achievements>().is_err());
    }

    #[test]
    fn setting_a_flag_twice_is_a_no_op() {
        let mut achievements = Achievements::new();
        achievements.set(3);
        achievements.set(3);
        assert!(achievements.is_set(3));
        assert_eq!(achievements.earned(), 1);
    }

    #[test]
    fn fresh_profile_has_no_login_baseline() {
        let join = "2024-06-01".parse().expect("date");
        let profile = Profile::new("astrid", "Miso", SpeciesId(2), join, &CareConfig::default());
        assert_eq!(profile.last_login, None);
        assert_eq!(profile.total_time, 0);
        assert_eq!(profile.money, 0);
        assert_eq!(profile.companion.happiness, 5);
        assert_eq!(profile.companion.hunger, 5);
        assert_eq!(profile.gui_color, DEFAULT_GUI_COLOR);
    }
}
