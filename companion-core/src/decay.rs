//! Absence decay: the longer the user stays away, the worse the companion
//! fares. Pure function of the day gap between logins; runs on every load.
//!
//! ```text
//! gap (days) | hunger        | happiness
//! -----------+---------------+---------------
//!     0      | unchanged     | unchanged
//!     1      | −2 (floor 0)  | −2 (floor 1)
//!    2–3     | −4 (floor 0)  | −3 (floor 1)
//!    4–7     | −5 (floor 0)  | −4 (floor 1)
//!    8–29    | forced to 0   | forced to 1
//!    ≥30     | untouched — terminal, death
//! ```
//!
//! On a live outcome happiness is also capped at 10, guarding against
//! over-accumulated values arriving from upstream. Persisting the new
//! login date as the next baseline is the store's responsibility.

use chrono::NaiveDate;
use tracing::warn;

use crate::profile::{HAPPINESS_MIN, STAT_MAX};

/// Day gap at which the companion does not survive the absence.
pub const DEATH_THRESHOLD_DAYS: i64 = 30;

/// Result of a decay pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayOutcome {
    /// Happiness after decay; within `[1, 10]` on any live outcome.
    pub happiness: u8,
    /// Hunger after decay; within `[0, 10]` on any live outcome.
    pub hunger: u8,
    /// Terminal state. Stats come back untouched; the caller must prompt
    /// for a new companion name and run the death reset instead of
    /// mutating further.
    pub death: bool,
}

/// Apply the absence decay table to a pair of care stats.
///
/// `last_login == None` means a first run: no decay applies and the
/// companion lives. A negative gap (clock rollback) is treated as a
/// same-day login.
#[must_use]
pub fn decay(
    last_login: Option<NaiveDate>,
    new_login: NaiveDate,
    happiness: u8,
    hunger: u8,
) -> DecayOutcome {
    let Some(last) = last_login else {
        return DecayOutcome {
            happiness,
            hunger,
            death: false,
        };
    };

    let mut gap = (new_login - last).num_days();
    if gap < 0 {
        warn!(%last, %new_login, "login date precedes stored baseline; treating as same day");
        gap = 0;
    }

    let (happiness, hunger) = match gap {
        0 => (happiness, hunger),
        1 => (drop_happiness(happiness, 2), drop_hunger(hunger, 2)),
        2..=3 => (drop_happiness(happiness, 3), drop_hunger(hunger, 4)),
        4..=7 => (drop_happiness(happiness, 4), drop_hunger(hunger, 5)),
        8..=29 => (HAPPINESS_MIN, 0),
        _ => {
            return DecayOutcome {
                happiness,
                hunger,
                death: true,
            };
        }
    };

    DecayOutcome {
        happiness: happiness.min(STAT_MAX),
        hunger,
        death: false,
    }
}

/// Subtract `delta` from happiness; anything at or below zero floors at 1.
fn drop_happiness(value: u8, delta: u8) -> u8 {
    if value <= delta {
        HAPPINESS_MIN
    } else {
        value - delta
    }
}

/// Subtract `delta` from hunger; anything at or below zero floors at 0.
fn drop_hunger(value: u8, delta: u8) -> u8 {
    value.saturating_sub(delta)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
