pub mod aggregator;
pub mod handlers;
pub mod ranking;
pub mod service;
pub mod types;

mod errors;
pub mod models;

pub use aggregator::ScoreAggregator;
pub use errors::LeaderboardError;
pub use models::*;
pub use ranking::RankingEngine;
pub use service::LeaderboardService;
pub use types::{LeaderboardFilter, LeaderboardResponse, VerifyResponse};

use axum::{routing::get, Router};

use crate::shared::AppState;

/// Weights used to derive points when a profile has none stored.
pub mod scoring_weights {
    /// Points per day of streak
    pub const STREAK: u32 = 10;
    /// Points per solved practice problem
    pub const SOLVED: u32 = 5;
}

/// Routes for the leaderboard and practice username endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(handlers::get_leaderboard))
        .route("/leaderboard/:id", get(handlers::get_leaderboard_entry))
        .route(
            "/practice/:username/verify",
            get(handlers::verify_practice_username),
        )
}
