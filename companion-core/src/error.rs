//! Error types for the companion-core library.

use thiserror::Error;

/// Top-level error type for all profile operations.
///
/// Every failure is surfaced to the caller for user-facing messaging; the
/// crate never falls back to a silent default profile and never retries.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Underlying file I/O failure (profile file missing or unwritable).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record's field count does not match the schema's arity.
    #[error("malformed record: expected {expected} fields, found {found}")]
    MalformedRecord {
        /// Arity the schema calls for.
        expected: usize,
        /// Arity actually present after splitting.
        found: usize,
    },

    /// A single field failed to parse as its declared type.
    #[error("invalid field `{field}`: {value:?}")]
    InvalidField {
        /// Schema name of the offending field.
        field: &'static str,
        /// Raw text that failed to parse.
        value: String,
    },

    /// Migration was requested under a version selector this crate does not
    /// know. The caller should re-prompt for the version.
    #[error("unsupported profile version: {0:?}")]
    UnsupportedVersion(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, ProfileError>;
