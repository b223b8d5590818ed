// Library crate for the campus leaderboard service
// This file exposes the public API for integration tests

pub mod config;
pub mod leaderboard;
pub mod practice;
pub mod profile;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use leaderboard::{LeaderboardService, RankedEntry, ScoreAggregator, ScoredProfile, SolvedSource};
pub use practice::{FetchError, PracticeStats, PracticeStatsClient, StatsFetcher};
pub use profile::{InMemoryProfileRepository, Profile, ProfileRepository};
pub use shared::{AppError, AppState};

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the full HTTP application around a prepared state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(leaderboard::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
