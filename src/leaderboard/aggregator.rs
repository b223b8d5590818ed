use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::{scoring_weights, ScoredProfile, SolvedSource};
use crate::{practice::StatsFetcher, profile::Profile};

/// Resolves solved counts and points for a batch of profiles.
///
/// Live fetches for all profiles are issued together and every one of them
/// settles before `aggregate` returns. A failed fetch only affects its own
/// profile, which falls back to its cached solved count.
pub struct ScoreAggregator {
    fetcher: Arc<dyn StatsFetcher>,
}

impl ScoreAggregator {
    pub fn new(fetcher: Arc<dyn StatsFetcher>) -> Self {
        Self { fetcher }
    }

    /// Scores every profile, preserving input order
    #[instrument(skip_all, fields(profile_count = profiles.len()))]
    pub async fn aggregate(&self, profiles: &[Profile]) -> Vec<ScoredProfile> {
        let scored = join_all(profiles.iter().map(|profile| self.score(profile))).await;

        let live = scored
            .iter()
            .filter(|s| s.solved_source == SolvedSource::Live)
            .count();
        debug!(live, cached = scored.len() - live, "Profiles aggregated");

        scored
    }

    async fn score(&self, profile: &Profile) -> ScoredProfile {
        let (solved_count, solved_source) = self.resolve_solved(profile).await;

        ScoredProfile {
            profile: profile.clone(),
            solved_count,
            points: resolve_points(profile, solved_count),
            solved_source,
        }
    }

    async fn resolve_solved(&self, profile: &Profile) -> (u32, SolvedSource) {
        let Some(username) = profile.practice_username() else {
            return (profile.cached_solved_count(), SolvedSource::Cached);
        };

        match self.fetcher.fetch(username).await {
            Ok(stats) => (stats.total_solved, SolvedSource::Live),
            Err(err) => {
                warn!(
                    profile_id = %profile.id,
                    username,
                    error = %err,
                    fallback = profile.cached_solved_count(),
                    "Live statistics unavailable, using cached solved count"
                );
                (profile.cached_solved_count(), SolvedSource::Cached)
            }
        }
    }
}

/// Stored points win when present; otherwise points derive from streak and solved count
pub fn resolve_points(profile: &Profile, solved_count: u32) -> u32 {
    match profile.stored_points {
        Some(points) => points,
        None => profile
            .streak_count
            .saturating_mul(scoring_weights::STREAK)
            .saturating_add(solved_count.saturating_mul(scoring_weights::SOLVED)),
    }
}
