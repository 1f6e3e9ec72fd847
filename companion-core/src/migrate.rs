//! Schema migration: rewriting legacy field layouts into the current one.
//!
//! The layout a record was written under is declared by the caller (the UI's
//! version chooser) — nothing here sniffs the text. Both legacy layouts
//! carry a retired credential slot at index 1 that migration drops; what
//! distinguishes them is how many of the current schema's trailing fields
//! they predate:
//!
//! - [`SchemaVersion::LegacyA`] (oldest, 15 fields) lacks gui color and both
//!   sound flags → defaults `"default"`, `"0"`, `"0"` are appended.
//! - [`SchemaVersion::LegacyB`] (intermediate, 17 fields) lacks only the
//!   background-sound flag → a single `"0"` is appended.
//!
//! Migration is a pure, order-preserving rewrite of the field sequence. The
//! cipher round-trip that rewrites the file on disk belongs to the store.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::FIELD_COUNT;
use crate::error::{ProfileError, Result};
use crate::profile::DEFAULT_GUI_COLOR;

/// Arity of the oldest supported layout.
pub const LEGACY_A_FIELD_COUNT: usize = 15;

/// Arity of the intermediate layout.
pub const LEGACY_B_FIELD_COUNT: usize = 17;

// ---------------------------------------------------------------------------
// Version selector
// ---------------------------------------------------------------------------

/// The positional field layout a stored record was written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// Oldest layout: credential slot at index 1, no gui color, no sound flags.
    LegacyA,
    /// Intermediate layout: credential slot at index 1, no background-sound flag.
    LegacyB,
    /// The layout the codec reads and writes.
    Current,
}

impl SchemaVersion {
    /// Map a UI version selector string onto a schema version.
    ///
    /// # Errors
    ///
    /// [`ProfileError::UnsupportedVersion`] for anything but the known
    /// legacy release names; the caller should re-prompt.
    pub fn from_selector(selector: &str) -> Result<Self> {
        match selector {
            "alpha 0.4.1" => Ok(Self::LegacyA),
            "alpha 0.5.0" | "alpha 0.6.2" => Ok(Self::LegacyB),
            other => Err(ProfileError::UnsupportedVersion(other.to_string())),
        }
    }

    /// Field count a record of this layout must have before migration.
    #[must_use]
    pub fn field_count(self) -> usize {
        match self {
            Self::LegacyA => LEGACY_A_FIELD_COUNT,
            Self::LegacyB => LEGACY_B_FIELD_COUNT,
            Self::Current => FIELD_COUNT,
        }
    }
}

// ---------------------------------------------------------------------------
// Migration
// ---------------------------------------------------------------------------

/// Rewrite `fields` from `version`'s layout into the current layout.
///
/// Every field that is not explicitly dropped or defaulted keeps its
/// relative order. [`SchemaVersion::Current`] is the identity (after the
/// arity check), so the function is total over the version union.
///
/// # Errors
///
/// [`ProfileError::MalformedRecord`] when the input arity does not match
/// `version`'s layout — checked before any rewrite is attempted.
pub fn migrate(fields: Vec<String>, version: SchemaVersion) -> Result<Vec<String>> {
    let expected = version.field_count();
    if fields.len() != expected {
        return Err(ProfileError::MalformedRecord {
            expected,
            found: fields.len(),
        });
    }

    let migrated = match version {
        SchemaVersion::Current => fields,
        SchemaVersion::LegacyA => {
            let mut out = drop_credential_slot(fields);
            out.push(DEFAULT_GUI_COLOR.to_string());
            out.push("0".to_string());
            out.push("0".to_string());
            out
        }
        SchemaVersion::LegacyB => {
            let mut out = drop_credential_slot(fields);
            out.push("0".to_string());
            out
        }
    };

    debug_assert_eq!(migrated.len(), FIELD_COUNT);
    debug!(?version, fields = migrated.len(), "record migrated");
    Ok(migrated)
}

/// Remove the retired credential field at index 1, shifting the rest left.
fn drop_credential_slot(mut fields: Vec<String>) -> Vec<String> {
    fields.remove(1);
    fields
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    fn legacy_a_record() -> Vec<String> {
        [
            "astrid", "1234", "2023-05-01", "2023-06-01", "3600", "50", "0", "0", "0", "Miso",
            "1", "0", "8", "6", "00000000",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    fn legacy_b_record() -> Vec<String> {
        [
            "astrid", "1234", "2023-05-01", "2023-06-01", "3600", "50", "0", "0", "0", "Miso",
            "1", "0", "8", "6", "00000000", "pink", "1",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    #[test]
    fn legacy_a_gains_three_trailing_defaults() {
        let migrated = migrate(legacy_a_record(), SchemaVersion::LegacyA).expect("migrate");
        assert_eq!(migrated.len(), FIELD_COUNT);
        assert_eq!(migrated[0], "astrid");
        assert_eq!(migrated[1], "2023-05-01", "credential slot dropped");
        assert_eq!(&migrated[14..], ["default", "0", "0"]);
    }

    #[test]
    fn legacy_b_gains_one_trailing_default() {
        let migrated = migrate(legacy_b_record(), SchemaVersion::LegacyB).expect("migrate");
        assert_eq!(migrated.len(), FIELD_COUNT);
        assert_eq!(migrated[1], "2023-05-01", "credential slot dropped");
        assert_eq!(migrated[14], "pink", "existing gui color kept");
        assert_eq!(migrated[15], "1", "existing session-sound flag kept");
        assert_eq!(migrated[16], "0", "missing background-sound defaulted");
    }

    #[test]
    fn migrated_legacy_a_record_decodes() {
        let migrated = migrate(legacy_a_record(), SchemaVersion::LegacyA).expect("migrate");
        let profile = codec::decode(&migrated.join(",")).expect("decodable after migration");
        assert_eq!(profile.username, "astrid");
        assert_eq!(profile.companion.happiness, 8);
        assert_eq!(profile.gui_color, "default");
        assert!(!profile.settings.background_sound);
    }

    #[test]
    fn wrong_legacy_arity_fails_before_rewrite() {
        let err = migrate(legacy_b_record(), SchemaVersion::LegacyA).expect_err("17 != 15");
        assert!(matches!(
            err,
            ProfileError::MalformedRecord {
                expected: LEGACY_A_FIELD_COUNT,
                found: 17
            }
        ));
    }

    #[test]
    fn remigrating_a_migrated_record_fails() {
        let migrated = migrate(legacy_a_record(), SchemaVersion::LegacyA).expect("migrate");
        let err = migrate(migrated, SchemaVersion::LegacyA).expect_err("already current");
        assert!(matches!(err, ProfileError::MalformedRecord { .. }));
    }

    #[test]
    fn current_version_is_identity() {
        let migrated = migrate(legacy_a_record(), SchemaVersion::LegacyA).expect("migrate");
        let again = migrate(migrated.clone(), SchemaVersion::Current).expect("identity");
        assert_eq!(again, migrated);
    }

    #[test]
    fn selectors_map_to_versions() {
        assert_eq!(
            SchemaVersion::from_selector("alpha 0.4.1").expect("known"),
            SchemaVersion::LegacyA
        );
        assert_eq!(
            SchemaVersion::from_selector("alpha 0.5.0").expect("known"),
            SchemaVersion::LegacyB
        );
        assert_eq!(
            SchemaVersion::from_selector("alpha 0.6.2").expect("known"),
            SchemaVersion::LegacyB
        );
        assert!(matches!(
            SchemaVersion::from_selector("beta 1.0"),
            Err(ProfileError::UnsupportedVersion(_))
        ));
    }
}
