use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::leaderboard::{LeaderboardError, LeaderboardService};
use crate::practice::StatsFetcher;
use crate::profile::ProfileRepository;

/// Shared application state containing all dependencies
///
/// Built once at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub leaderboard_service: Arc<LeaderboardService>,
}

impl AppState {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
        stats_fetcher: Arc<dyn StatsFetcher>,
    ) -> Self {
        Self {
            leaderboard_service: Arc::new(LeaderboardService::new(
                profile_repository,
                stats_fetcher,
            )),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<LeaderboardError> for AppError {
    fn from(err: LeaderboardError) -> Self {
        match err {
            LeaderboardError::Source(app_error) => app_error,
            LeaderboardError::Verification(fetch_error) => {
                AppError::BadRequest(fetch_error.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
