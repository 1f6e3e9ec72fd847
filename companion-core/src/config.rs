//! Configuration, loadable from TOML.
//!
//! Everything has a default, so an absent or empty file yields a working
//! setup. The decay table and reward rates are invariants of the system and
//! deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ProfileError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanionConfig {
    /// Where the profile record lives.
    #[serde(default)]
    pub store: StoreConfig,
    /// Starting stats for fresh and reborn companions.
    #[serde(default)]
    pub care: CareConfig,
}

impl CompanionConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns [`ProfileError::Config`] if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| ProfileError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Profile store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the encrypted profile record.
    #[serde(default = "default_profile_path")]
    pub profile_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            profile_path: default_profile_path(),
        }
    }
}

/// Starting care stats for a fresh or reborn companion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareConfig {
    /// Happiness a new companion starts with.
    #[serde(default = "default_start_stat")]
    pub start_happiness: u8,
    /// Hunger a new companion starts with.
    #[serde(default = "default_start_stat")]
    pub start_hunger: u8,
    /// How many species the random assignment draws from.
    #[serde(default = "default_species_count")]
    pub species_count: u8,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            start_happiness: 5,
            start_hunger: 5,
            species_count: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_profile_path() -> PathBuf {
    PathBuf::from("profile.txt")
}
fn default_start_stat() -> u8 {
    5
}
fn default_species_count() -> u8 {
    3
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = CompanionConfig::from_toml("").expect("empty is fine");
        assert_eq!(config.store.profile_path, PathBuf::from("profile.txt"));
        assert_eq!(config.care.start_happiness, 5);
        assert_eq!(config.care.species_count, 3);
    }

    #[test]
    fn partial_sections_fill_in() {
        let config = CompanionConfig::from_toml(
            r#"
            [store]
            profile_path = "saves/astrid.txt"

            [care]
            start_hunger = 7
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.store.profile_path, PathBuf::from("saves/astrid.txt"));
        assert_eq!(config.care.start_hunger, 7);
        assert_eq!(config.care.start_happiness, 5, "untouched default");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = CompanionConfig::from_toml("store = 3").expect_err("bad type");
        assert!(matches!(err, ProfileError::Config(_)));
    }
}
