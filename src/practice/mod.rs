pub mod client;
pub mod models;

mod errors;

pub use client::PracticeStatsClient;
pub use errors::FetchError;
pub use models::{PracticeStats, PracticeStatsResponse};

use async_trait::async_trait;

/// Source of live statistics for a practice-site username.
///
/// One call is one attempt; implementations do not retry.
#[async_trait]
pub trait StatsFetcher: Send + Sync {
    async fn fetch(&self, username: &str) -> Result<PracticeStats, FetchError>;

    /// Checks that the username exists on the practice site
    async fn verify(&self, username: &str) -> Result<(), FetchError> {
        self.fetch(username).await.map(|_| ())
    }
}
