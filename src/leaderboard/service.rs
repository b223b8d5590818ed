use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    aggregator::ScoreAggregator, ranking::RankingEngine, LeaderboardError, LeaderboardFilter,
    RankedEntry,
};
use crate::{practice::StatsFetcher, profile::ProfileRepository};

/// Service for building the leaderboard.
///
/// Every call reads profiles afresh, aggregates, and ranks. No ranking state
/// is kept between calls.
pub struct LeaderboardService {
    repository: Arc<dyn ProfileRepository + Send + Sync>,
    fetcher: Arc<dyn StatsFetcher>,
    aggregator: ScoreAggregator,
    ranking: RankingEngine,
}

impl LeaderboardService {
    pub fn new(
        repository: Arc<dyn ProfileRepository + Send + Sync>,
        fetcher: Arc<dyn StatsFetcher>,
    ) -> Self {
        Self {
            repository,
            aggregator: ScoreAggregator::new(Arc::clone(&fetcher)),
            fetcher,
            ranking: RankingEngine::new(),
        }
    }

    /// Loads every profile and returns the full ranked leaderboard
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Vec<RankedEntry>, LeaderboardError> {
        let profiles = self.repository.list_profiles().await?;
        debug!(profile_count = profiles.len(), "Profiles loaded for ranking");

        let scored = self.aggregator.aggregate(&profiles).await;
        let ranked = self.ranking.rank(&scored);

        info!(entry_count = ranked.len(), "Leaderboard computed");
        Ok(ranked)
    }

    /// Loads the full leaderboard and applies display filtering, keeping global ranks
    #[instrument(skip(self))]
    pub async fn load_filtered(
        &self,
        filter: &LeaderboardFilter,
    ) -> Result<(usize, Vec<RankedEntry>), LeaderboardError> {
        let ranked = self.load().await?;
        let total = ranked.len();
        Ok((total, filter.apply(ranked)))
    }

    /// Finds one user's position in the full leaderboard
    #[instrument(skip(self))]
    pub async fn rank_of(&self, profile_id: &str) -> Result<Option<RankedEntry>, LeaderboardError> {
        if self.repository.get_profile(profile_id).await?.is_none() {
            debug!(profile_id = %profile_id, "No profile to rank");
            return Ok(None);
        }

        let entry = self
            .load()
            .await?
            .into_iter()
            .find(|entry| entry.id == profile_id);

        Ok(entry)
    }

    /// Checks that a practice-site username exists before it is linked to a profile
    #[instrument(skip(self))]
    pub async fn verify_practice_username(&self, username: &str) -> Result<(), LeaderboardError> {
        self.fetcher.verify(username).await.map_err(|err| {
            warn!(username, error = %err, "Practice username verification failed");
            LeaderboardError::from(err)
        })?;

        info!(username, "Practice username verified");
        Ok(())
    }
}
