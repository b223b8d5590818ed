use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{FetchError, PracticeStats, PracticeStatsResponse, StatsFetcher};

/// HTTP client for the third-party practice statistics endpoint
///
/// Requests go to `{base_url}/{username}/`. Each call makes exactly one
/// attempt, bounded by the client's request timeout.
#[derive(Debug, Clone)]
pub struct PracticeStatsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PracticeStatsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::Network(format!("invalid base url {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Network(format!(
                "base url cannot carry a path: {base_url}"
            )));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    /// Builds the statistics URL for a username, percent-encoding it as one path segment
    pub fn stats_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(username).push("");
        }
        url
    }
}

#[async_trait]
impl StatsFetcher for PracticeStatsClient {
    #[instrument(skip(self))]
    async fn fetch(&self, username: &str) -> Result<PracticeStats, FetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FetchError::NotFound("empty username".to_string()));
        }

        let url = self.stats_url(username);
        debug!(%url, "Fetching practice statistics");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(error = %e, username, "Statistics request failed");
            FetchError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(username.to_string()));
        }
        if !status.is_success() {
            warn!(%status, username, "Statistics endpoint returned non-success status");
            return Err(FetchError::Network(format!("unexpected status {status}")));
        }

        let body: PracticeStatsResponse = response.json().await?;
        let stats = PracticeStats::try_from(body)?;

        debug!(username, total_solved = stats.total_solved, "Practice statistics fetched");
        Ok(stats)
    }
}
