//! Profile store: the only module that performs I/O.
//!
//! Load pipeline: read file → decrypt → (migrate, when a legacy version is
//! declared) → decode → decay → persist the new login baseline. Save is the
//! reverse: encode → encrypt → whole-file overwrite. Writes replace the file
//! completely; there is no temp-file-and-rename step, so two processes
//! holding the same profile are a last-writer-wins race by design.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::cipher::Cipher;
use crate::codec::{self, DELIMITER};
use crate::decay;
use crate::error::Result;
use crate::migrate::{self, SchemaVersion};
use crate::profile::Profile;
use crate::progression;

/// Result of loading a profile.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// The decoded profile, decayed, with the login baseline advanced to
    /// the load date. On a live outcome the baseline is already persisted;
    /// on death it reaches disk with the caller's reset-then-save.
    pub profile: Profile,
    /// Terminal state: the companion did not survive the absence. The
    /// caller must prompt for a new companion name, run the death reset and
    /// save; the stored record is left untouched until then.
    pub death: bool,
}

/// Reads and writes one user's encrypted profile record.
///
/// The store holds a path and a cipher, nothing else — the profile itself
/// is owned by the session, mutated in memory and flushed back through
/// [`ProfileStore::save`].
pub struct ProfileStore<C> {
    path: PathBuf,
    cipher: C,
}

impl<C> fmt::Debug for ProfileStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl<C: Cipher> ProfileStore<C> {
    /// Create a store over `path`. The file is not touched until the first
    /// load or save.
    pub fn new(path: impl Into<PathBuf>, cipher: C) -> Self {
        let path = path.into();
        info!(path = %path.display(), "profile store ready");
        Self { path, cipher }
    }

    /// Path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile, apply absence decay against `today`, and — when the
    /// companion survives — persist `today` as the new login baseline with
    /// the level recomputed from total study time.
    ///
    /// # Errors
    ///
    /// [`crate::ProfileError::Io`] when the file is missing or unreadable;
    /// [`crate::ProfileError::MalformedRecord`] /
    /// [`crate::ProfileError::InvalidField`] when the decrypted text does
    /// not decode. Never a silent default profile.
    pub fn load(&self, today: NaiveDate) -> Result<LoadOutcome> {
        self.load_inner(today, None)
    }

    /// Load a record written under a legacy layout: the field sequence is
    /// migrated and the file rewritten in place (decrypt legacy text,
    /// re-encrypt migrated text) before the normal load pipeline runs.
    ///
    /// # Errors
    ///
    /// Everything [`ProfileStore::load`] reports, plus
    /// [`crate::ProfileError::MalformedRecord`] when the record does not
    /// match `version`'s arity. Callers mapping a UI selector string should
    /// go through [`SchemaVersion::from_selector`] first, which reports
    /// [`crate::ProfileError::UnsupportedVersion`] for unknown selectors.
    pub fn load_from_version(&self, today: NaiveDate, version: SchemaVersion) -> Result<LoadOutcome> {
        self.load_inner(today, Some(version))
    }

    fn load_inner(&self, today: NaiveDate, declared: Option<SchemaVersion>) -> Result<LoadOutcome> {
        let raw = fs::read_to_string(&self.path)?;
        let decrypted = self.cipher.decrypt(&raw);
        let record = decrypted.trim_end();

        let record = if let Some(version) = declared {
            let fields: Vec<String> = record.split(DELIMITER).map(str::to_string).collect();
            let found = fields.len();
            let migrated = migrate::migrate(fields, version)?;
            let joined = migrated.join(",");
            fs::write(&self.path, self.cipher.encrypt(&joined))?;
            debug!(
                ?version,
                from_fields = found,
                to_fields = migrated.len(),
                "legacy record migrated in place"
            );
            joined
        } else {
            record.to_string()
        };

        let mut profile = codec::decode(&record)?;
        let outcome = decay::decay(
            profile.last_login,
            today,
            profile.companion.happiness,
            profile.companion.hunger,
        );
        profile.companion.happiness = outcome.happiness;
        profile.companion.hunger = outcome.hunger;

        // The in-memory model always carries today as the next baseline; on
        // the death path it reaches disk only through the caller's
        // reset-then-save, so a reborn companion starts from a fresh date.
        profile.last_login = Some(today);

        if outcome.death {
            warn!(username = %profile.username, "companion did not survive the absence");
            return Ok(LoadOutcome {
                profile,
                death: true,
            });
        }

        profile.companion.level = progression::level_for(profile.total_time);
        self.save(&profile)?;
        debug!(
            username = %profile.username,
            happiness = profile.companion.happiness,
            hunger = profile.companion.hunger,
            level = profile.companion.level,
            "profile loaded"
        );

        Ok(LoadOutcome {
            profile,
            death: false,
        })
    }

    /// Encode, encrypt and overwrite the file at the store's path.
    ///
    /// # Errors
    ///
    /// [`crate::ProfileError::Io`] when the file cannot be written.
    pub fn save(&self, profile: &Profile) -> Result<()> {
        let record = codec::encode(profile);
        fs::write(&self.path, self.cipher.encrypt(&record))?;
        debug!(path = %self.path.display(), bytes = record.len(), "profile saved");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
