//! Study progression: level derivation, session rewards, achievements,
//! care purchases, and the post-death reset.
//!
//! Level is never authoritative on disk — it is recomputed from total study
//! time on every load. Rewards use integer division throughout, so the
//! remainder below one token or one heart earns nothing.

use rand::Rng;
use tracing::debug;

use crate::config::CareConfig;
use crate::profile::{Companion, Profile, HAPPINESS_MIN, STAT_MAX};
use crate::types::SpeciesId;

/// Seconds of cumulative study per companion level.
pub const SECONDS_PER_LEVEL: u64 = 86_400;

/// Tokens earned per full hour of focus (one token per 72 seconds).
pub const TOKENS_PER_HOUR: u64 = 50;

/// Seconds of focus per happiness heart.
pub const SECONDS_PER_HEART: u64 = 1_800;

// ---------------------------------------------------------------------------
// Achievement slots
// ---------------------------------------------------------------------------

/// Reached 3 hours of cumulative focus time.
pub const ACH_FOCUS_3_HOURS: usize = 0;
/// Reached 1 day of cumulative focus time.
pub const ACH_FOCUS_1_DAY: usize = 1;
/// Reached 7 days of cumulative focus time.
pub const ACH_FOCUS_7_DAYS: usize = 2;
/// Tried to feed a companion that was already full.
pub const ACH_FULL_FEED: usize = 6;
/// Raised happiness past 9.
pub const ACH_FULL_HAPPINESS: usize = 7;

const FOCUS_3_HOURS_SECS: u64 = 10_800;
const FOCUS_1_DAY_SECS: u64 = 86_400;
const FOCUS_7_DAYS_SECS: u64 = 604_800;

// ---------------------------------------------------------------------------
// Level and rewards
// ---------------------------------------------------------------------------

/// Level derived from cumulative study time: one level per full day focused.
#[must_use]
pub fn level_for(total_time: u64) -> u32 {
    u32::try_from(total_time / SECONDS_PER_LEVEL).unwrap_or(u32::MAX)
}

/// What a completed focus session earns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReward {
    /// Tokens: 50 per hour, pro-rated by integer division.
    pub money: u64,
    /// Hearts: one per half hour.
    pub happiness: u8,
}

/// Compute the raw reward for `seconds` of focus.
#[must_use]
pub fn session_reward(seconds: u64) -> SessionReward {
    SessionReward {
        money: TOKENS_PER_HOUR * seconds / 3_600,
        happiness: u8::try_from(seconds / SECONDS_PER_HEART).unwrap_or(u8::MAX),
    }
}

/// Bank a completed session: accumulate time, grant the reward, recompute
/// the level and run the achievement check.
pub fn record_session(profile: &mut Profile, seconds: u64) {
    profile.total_time += seconds;
    let reward = session_reward(seconds);
    profile.money += reward.money;
    grant_happiness(&mut profile.companion, reward.happiness);
    profile.companion.level = level_for(profile.total_time);
    check_achievements(profile);
    debug!(
        seconds,
        money = reward.money,
        hearts = reward.happiness,
        total_time = profile.total_time,
        level = profile.companion.level,
        "session banked"
    );
}

/// Bank a session the user broke off early. The elapsed time still counts
/// and still earns, but the companion loses one happiness first (floor 1).
pub fn break_session(profile: &mut Profile, seconds: u64) {
    if profile.companion.happiness > HAPPINESS_MIN {
        profile.companion.happiness -= 1;
    }
    record_session(profile, seconds);
}

/// Grant hearts, capped at 10. A companion already at 10 receives nothing.
fn grant_happiness(companion: &mut Companion, hearts: u8) {
    if companion.happiness >= STAT_MAX {
        return;
    }
    companion.happiness = companion.happiness.saturating_add(hearts).min(STAT_MAX);
}

// ---------------------------------------------------------------------------
// Care purchases
// ---------------------------------------------------------------------------

/// Spend tokens on food, raising hunger by `hunger_gain` (capped at 10).
///
/// Returns whether the purchase applied. A companion that is already full
/// cannot be fed — that attempt earns [`ACH_FULL_FEED`] instead — and an
/// unaffordable purchase is refused untouched.
pub fn feed(profile: &mut Profile, cost: u64, hunger_gain: u8) -> bool {
    if profile.companion.hunger >= STAT_MAX {
        profile.achievements.set(ACH_FULL_FEED);
        return false;
    }
    if profile.money < cost {
        return false;
    }
    profile.money -= cost;
    profile.companion.hunger = profile.companion.hunger.saturating_add(hunger_gain).min(STAT_MAX);
    true
}

/// Spend tokens on a background and switch to it.
///
/// Returns whether the purchase applied.
pub fn buy_background(profile: &mut Profile, index: u32, cost: u64) -> bool {
    if profile.money < cost {
        return false;
    }
    profile.money -= cost;
    profile.background = index;
    true
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// Run the monotonic threshold checks. One-way: a flag that is already set
/// stays set, so re-running with the same totals is a no-op.
pub fn check_achievements(profile: &mut Profile) {
    if profile.total_time >= FOCUS_3_HOURS_SECS {
        profile.achievements.set(ACH_FOCUS_3_HOURS);
    }
    if profile.total_time >= FOCUS_1_DAY_SECS {
        profile.achievements.set(ACH_FOCUS_1_DAY);
    }
    if profile.total_time >= FOCUS_7_DAYS_SECS {
        profile.achievements.set(ACH_FOCUS_7_DAYS);
    }
    if profile.companion.happiness > 9 {
        profile.achievements.set(ACH_FULL_HAPPINESS);
    }
}

// ---------------------------------------------------------------------------
// Death reset
// ---------------------------------------------------------------------------

/// Full reset after a death: study time, money and background start over
/// and a fresh companion is assigned under the caller-supplied name, with a
/// uniformly random species.
///
/// Username, join date, gui color, settings and achievement flags survive.
pub fn reset_after_death(
    profile: &mut Profile,
    new_name: impl Into<String>,
    care: &CareConfig,
    rng: &mut impl Rng,
) {
    profile.total_time = 0;
    profile.money = 0;
    profile.background = 0;
    profile.companion = Companion {
        name: new_name.into(),
        species: SpeciesId::random(rng, care.species_count),
        level: level_for(0),
        happiness: care.start_happiness,
        hunger: care.start_hunger,
    };
    debug!(
        username = %profile.username,
        companion = %profile.companion.name,
        species = %profile.companion.species,
        "profile reset after death"
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
