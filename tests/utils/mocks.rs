#![allow(dead_code)] // Test utilities may not all be used in every test

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use campus_leaderboard::{FetchError, PracticeStats, StatsFetcher};

// ============================================================================
// Mock Infrastructure
// ============================================================================

#[derive(Clone)]
struct Scripted {
    result: Result<u32, FetchError>,
    delay: Option<Duration>,
}

/// Stats fetcher with per-username scripted results.
///
/// Usernames without a script fail with `NotFound`. Every call is recorded.
#[derive(Clone, Default)]
pub struct MockStatsFetcher {
    scripts: Arc<RwLock<HashMap<String, Scripted>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockStatsFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn solved(self, username: &str, total_solved: u32) -> Self {
        self.script(username, Ok(total_solved), None).await
    }

    pub async fn failing(self, username: &str, error: FetchError) -> Self {
        self.script(username, Err(error), None).await
    }

    /// Succeeds only after sleeping for `delay`
    pub async fn slow(self, username: &str, total_solved: u32, delay: Duration) -> Self {
        self.script(username, Ok(total_solved), Some(delay)).await
    }

    async fn script(
        self,
        username: &str,
        result: Result<u32, FetchError>,
        delay: Option<Duration>,
    ) -> Self {
        self.scripts
            .write()
            .await
            .insert(username.to_string(), Scripted { result, delay });
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl StatsFetcher for MockStatsFetcher {
    async fn fetch(&self, username: &str) -> Result<PracticeStats, FetchError> {
        self.calls.write().await.push(username.to_string());

        let scripted = self.scripts.read().await.get(username).cloned();
        let Some(scripted) = scripted else {
            return Err(FetchError::NotFound(username.to_string()));
        };

        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }

        scripted.result.map(PracticeStats::with_total_solved)
    }
}
