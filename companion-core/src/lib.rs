//! # companion-core
//!
//! Persistence core for a desktop study companion. One user's profile —
//! care stats, currency, settings, achievement flags — lives in a local
//! file as a single encrypted comma-delimited record. This crate owns the
//! only subsystem with real invariants: the record codec, schema migration
//! for records written by older releases, the absence decay model applied
//! on every load (including the terminal death state), and study
//! progression.
//!
//! Subsystems, leaves first:
//!
//! - [`cipher`] — reversible whole-record text transform (port + adapter)
//! - [`codec`] — positional record ↔ [`Profile`] conversion, pure
//! - [`migrate`] — legacy layout rewrites under caller-declared versions
//! - [`decay`] — day-gap decay table with floors, ceiling and death
//! - [`progression`] — levels, session rewards, achievements, death reset
//! - [`store`] — load/save orchestration, the only module doing I/O
//!
//! The windowed UI owns everything else — widgets, rendering, file pickers,
//! the release check — and drives this crate through [`store::ProfileStore`]:
//! load once per session, mutate the in-memory [`Profile`], save after every
//! mutation that must survive a crash.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cipher;
pub mod codec;
pub mod config;
pub mod decay;
pub mod error;
pub mod migrate;
pub mod profile;
pub mod progression;
pub mod store;
pub mod types;

pub use cipher::{Cipher, RotationCipher};
pub use config::CompanionConfig;
pub use decay::DecayOutcome;
pub use error::{ProfileError, Result};
pub use migrate::SchemaVersion;
pub use profile::{Achievements, Companion, Profile, Settings};
pub use store::{LoadOutcome, ProfileStore};
pub use types::{FocusMode, Language, SpeciesId};
