use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::Utc;
use tracing::{info, instrument};

use super::{
    types::{LeaderboardFilter, LeaderboardResponse, VerifyResponse},
    LeaderboardError, RankedEntry,
};
use crate::shared::{AppError, AppState};

/// HTTP handler for the ranked leaderboard
///
/// GET /leaderboard?search=&organization=&limit=
#[instrument(name = "get_leaderboard", skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    filter: Result<Query<LeaderboardFilter>, QueryRejection>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let Query(filter) = filter.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let (total, entries) = state.leaderboard_service.load_filtered(&filter).await?;

    info!(total, returned = entries.len(), "Leaderboard served");

    Ok(Json(LeaderboardResponse {
        generated_at: Utc::now(),
        total,
        entries,
    }))
}

/// HTTP handler for a single user's leaderboard entry
///
/// GET /leaderboard/:id
#[instrument(name = "get_leaderboard_entry", skip(state))]
pub async fn get_leaderboard_entry(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<RankedEntry>, AppError> {
    state
        .leaderboard_service
        .rank_of(&profile_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profile {profile_id} not found")))
}

/// HTTP handler for checking a practice-site username
///
/// GET /practice/:username/verify
/// An unknown or unreachable username is reported as `valid: false`, not as an HTTP error
#[instrument(name = "verify_practice_username", skip(state))]
pub async fn verify_practice_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<VerifyResponse>, AppError> {
    let result = state
        .leaderboard_service
        .verify_practice_username(&username)
        .await;

    let response = match result {
        Ok(()) => VerifyResponse {
            username,
            valid: true,
            reason: None,
        },
        Err(LeaderboardError::Verification(err)) => VerifyResponse {
            username,
            valid: false,
            reason: Some(err.to_string()),
        },
        Err(err) => return Err(err.into()),
    };

    Ok(Json(response))
}
