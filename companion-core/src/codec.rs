//! Record codec: converts between [`Profile`] and the flat delimited text
//! representation. Pure, no I/O.
//!
//! The stored form is a single line of comma-separated fields in fixed
//! positional order:
//!
//! ```text
//!  0 username          9 companion species
//!  1 join date        10 companion level (advisory)
//!  2 last login       11 happiness
//!  3 total time (s)   12 hunger
//!  4 money            13 achievement digits
//!  5 background       14 gui color
//!  6 focus mode       15 session sound
//!  7 language         16 background sound
//!  8 companion name
//! ```
//!
//! Dates are ISO calendar dates; an empty last-login field means the profile
//! has never completed a load. Decoding checks arity and per-field parses,
//! nothing more — range enforcement belongs to the engines that mutate the
//! model.

use chrono::NaiveDate;

use crate::error::{ProfileError, Result};
use crate::profile::{Companion, Profile, Settings};
use crate::types::{FocusMode, Language, SpeciesId};

/// Field delimiter of the flat record.
pub const DELIMITER: char = ',';

/// Arity of the current schema.
pub const FIELD_COUNT: usize = 17;

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

fn invalid(field: &'static str, value: &str) -> ProfileError {
    ProfileError::InvalidField {
        field,
        value: value.to_string(),
    }
}

fn parse_int<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| invalid(field, value))
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    value.parse().map_err(|_| invalid(field, value))
}

fn parse_optional_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_date(field, value).map(Some)
    }
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(invalid(field, value)),
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

// ---------------------------------------------------------------------------
// Decode / encode
// ---------------------------------------------------------------------------

/// Decode a current-schema record into a [`Profile`].
///
/// # Errors
///
/// [`ProfileError::MalformedRecord`] when the split field count is not
/// [`FIELD_COUNT`]; [`ProfileError::InvalidField`] when an integer, date,
/// flag, indicator or the achievement substring does not parse.
pub fn decode(record: &str) -> Result<Profile> {
    let fields: Vec<&str> = record.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ProfileError::MalformedRecord {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let focus_raw = fields[6];
    let focus_mode = FocusMode::from_indicator(parse_int("focus_mode", focus_raw)?)
        .ok_or_else(|| invalid("focus_mode", focus_raw))?;
    let language_raw = fields[7];
    let language = Language::from_indicator(parse_int("language", language_raw)?)
        .ok_or_else(|| invalid("language", language_raw))?;

    Ok(Profile {
        username: fields[0].to_string(),
        join_date: parse_date("join_date", fields[1])?,
        last_login: parse_optional_date("last_login", fields[2])?,
        total_time: parse_int("total_time", fields[3])?,
        money: parse_int("money", fields[4])?,
        background: parse_int("background", fields[5])?,
        settings: Settings {
            focus_mode,
            language,
            session_sound: parse_flag("session_sound", fields[15])?,
            background_sound: parse_flag("background_sound", fields[16])?,
        },
        companion: Companion {
            name: fields[8].to_string(),
            species: SpeciesId(parse_int("species", fields[9])?),
            level: parse_int("level", fields[10])?,
            happiness: parse_int("happiness", fields[11])?,
            hunger: parse_int("hunger", fields[12])?,
        },
        achievements: fields[13].parse()?,
        gui_color: fields[14].to_string(),
    })
}

/// Encode a [`Profile`] into the current-schema record.
///
/// Total for well-formed profiles and the exact inverse of [`decode`] on
/// anything `decode` produces. Fields are written verbatim; a name that
/// contains the delimiter is the caller's corruption to keep out.
#[must_use]
pub fn encode(profile: &Profile) -> String {
    let last_login = profile
        .last_login
        .map(|date| date.to_string())
        .unwrap_or_default();

    [
        profile.username.clone(),
        profile.join_date.to_string(),
        last_login,
        profile.total_time.to_string(),
        profile.money.to_string(),
        profile.background.to_string(),
        profile.settings.focus_mode.indicator().to_string(),
        profile.settings.language.indicator().to_string(),
        profile.companion.name.clone(),
        profile.companion.species.to_string(),
        profile.companion.level.to_string(),
        profile.companion.happiness.to_string(),
        profile.companion.hunger.to_string(),
        profile.achievements.to_string(),
        profile.gui_color.clone(),
        flag(profile.settings.session_sound).to_string(),
        flag(profile.settings.background_sound).to_string(),
    ]
    .join(",")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str =
        "astrid,2024-01-15,2024-03-01,7200,120,2,1,4,Miso,2,0,7,4,10000000,default,1,0";

    #[test]
    fn decode_reads_every_field() {
        let profile = decode(RECORD).expect("well-formed record");
        assert_eq!(profile.username, "astrid");
        assert_eq!(profile.join_date.to_string(), "2024-01-15");
        assert_eq!(
            profile.last_login.map(|d| d.to_string()),
            Some("2024-03-01".to_string())
        );
        assert_eq!(profile.total_time, 7200);
        assert_eq!(profile.money, 120);
        assert_eq!(profile.background, 2);
        assert_eq!(profile.settings.focus_mode, FocusMode::Custom);
        assert_eq!(profile.settings.language, Language::Japanese);
        assert_eq!(profile.companion.name, "Miso");
        assert_eq!(profile.companion.species, SpeciesId(2));
        assert_eq!(profile.companion.level, 0);
        assert_eq!(profile.companion.happiness, 7);
        assert_eq!(profile.companion.hunger, 4);
        assert!(profile.achievements.is_set(0));
        assert_eq!(profile.achievements.earned(), 1);
        assert_eq!(profile.gui_color, "default");
        assert!(profile.settings.session_sound);
        assert!(!profile.settings.background_sound);
    }

    #[test]
    fn encode_inverts_decode() {
        let profile = decode(RECORD).expect("well-formed record");
        assert_eq!(encode(&profile), RECORD);
    }

    #[test]
    fn missing_last_login_decodes_as_none_and_encodes_empty() {
        let record = RECORD.replace("2024-03-01", "");
        let profile = decode(&record).expect("first-run record");
        assert_eq!(profile.last_login, None);
        assert_eq!(encode(&profile), record);
    }

    #[test]
    fn wrong_arity_is_malformed() {
        let err = decode("just,a,few,fields").expect_err("short record");
        assert!(matches!(
            err,
            ProfileError::MalformedRecord {
                expected: FIELD_COUNT,
                found: 4
            }
        ));
    }

    #[test]
    fn non_numeric_total_time_is_invalid_field() {
        let record = RECORD.replace(",7200,", ",soon,");
        let err = decode(&record).expect_err("bad integer");
        assert!(matches!(
            err,
            ProfileError::InvalidField {
                field: "total_time",
                ..
            }
        ));
    }

    #[test]
    fn bad_calendar_date_is_invalid_field() {
        let record = RECORD.replace("2024-01-15", "2024-13-40");
        let err = decode(&record).expect_err("bad date");
        assert!(matches!(
            err,
            ProfileError::InvalidField {
                field: "join_date",
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_language_indicator_is_invalid_field() {
        let record = RECORD.replace(",1,4,Miso,", ",1,9,Miso,");
        let err = decode(&record).expect_err("unknown language");
        assert!(matches!(
            err,
            ProfileError::InvalidField { field: "language", .. }
        ));
    }

    #[test]
    fn non_binary_sound_flag_is_invalid_field() {
        let record = RECORD.replace(",default,1,0", ",default,2,0");
        let err = decode(&record).expect_err("bad flag");
        assert!(matches!(
            err,
            ProfileError::InvalidField {
                field: "session_sound",
                ..
            }
        ));
    }

    #[test]
    fn negative_happiness_does_not_parse() {
        let record = RECORD.replace(",7,4,", ",-1,4,");
        assert!(decode(&record).is_err());
    }
}
