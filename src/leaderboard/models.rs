use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::profile::Profile;

/// Which branch of the fallback chain produced a solved count
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SolvedSource {
    /// Fetched from the practice site during this load
    Live,
    /// Locally cached count (or zero when nothing is cached)
    Cached,
}

/// A profile with its solved count and points resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProfile {
    pub profile: Profile,
    pub solved_count: u32,
    pub points: u32,
    pub solved_source: SolvedSource,
}

/// One row of the leaderboard, recomputed on every load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub id: String,
    pub display_name: String,
    pub organization: String,
    pub solved_count: u32,
    pub points: u32,
    pub streak_count: u32,
    pub solved_source: SolvedSource,
}

impl RankedEntry {
    pub fn from_scored(rank: u32, scored: &ScoredProfile) -> Self {
        Self {
            rank,
            id: scored.profile.id.clone(),
            display_name: scored.profile.display_name().to_string(),
            organization: scored.profile.organization().to_string(),
            solved_count: scored.solved_count,
            points: scored.points,
            streak_count: scored.profile.streak_count,
            solved_source: scored.solved_source,
        }
    }
}
