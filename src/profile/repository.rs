use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::Profile;
use crate::shared::AppError;

/// Trait for reading user profiles from the backing store
#[async_trait]
pub trait ProfileRepository {
    /// Lists every profile in a stable order
    async fn list_profiles(&self) -> Result<Vec<Profile>, AppError>;
    async fn get_profile(&self, profile_id: &str) -> Result<Option<Profile>, AppError>;
}

/// In-memory implementation of ProfileRepository for development and testing
///
/// Profiles are kept in insertion order, which is the order `list_profiles`
/// returns them in.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl InMemoryProfileRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates an in-memory repository with pre-populated profiles
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
        }
    }

    /// Inserts a profile, replacing any existing profile with the same ID in place
    #[cfg(test)]
    pub async fn upsert_profile(&self, profile: Profile) {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => profiles.push(profile),
        }
    }

    #[cfg(test)]
    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    #[instrument(skip(self))]
    async fn list_profiles(&self) -> Result<Vec<Profile>, AppError> {
        let profiles = self.profiles.read().await.clone();
        debug!(profile_count = profiles.len(), "Listed profiles from memory");
        Ok(profiles)
    }

    #[instrument(skip(self))]
    async fn get_profile(&self, profile_id: &str) -> Result<Option<Profile>, AppError> {
        let profiles = self.profiles.read().await;
        let profile = profiles.iter().find(|p| p.id == profile_id).cloned();

        match &profile {
            Some(_) => debug!(profile_id = %profile_id, "Profile found in memory"),
            None => debug!(profile_id = %profile_id, "Profile not found in memory"),
        }

        Ok(profile)
    }
}

const PROFILE_COLUMNS: &str = r#"
    SELECT
        p.id::text AS id,
        p.full_name,
        p.college_name,
        p.leetcode_points::bigint AS leetcode_points,
        p.streak_count::bigint AS streak_count,
        p.leetcode_username,
        s.total_solved::bigint AS total_solved
    FROM profiles p
    LEFT JOIN leetcode_stats s ON s.user_id = p.id
"#;

/// PostgreSQL implementation of profile repository
///
/// Reads the `profiles` table joined with the locally cached
/// `leetcode_stats` row for each user.
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape of `PROFILE_COLUMNS`
#[derive(Debug, Clone, Default, FromRow)]
struct ProfileRow {
    id: String,
    full_name: Option<String>,
    college_name: Option<String>,
    leetcode_points: Option<i64>,
    streak_count: Option<i64>,
    leetcode_username: Option<String>,
    total_solved: Option<i64>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            display_name: row.full_name,
            organization: row.college_name,
            // NULL stays None so points are derived rather than read as zero
            stored_points: row.leetcode_points.map(clamp_count),
            streak_count: row.streak_count.map(clamp_count).unwrap_or_default(),
            practice_username: row.leetcode_username,
            cached_solved_count: row.total_solved.map(clamp_count),
        }
    }
}

/// Counts are stored as signed integers; negative values are treated as zero
fn clamp_count(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    #[instrument(skip(self))]
    async fn list_profiles(&self) -> Result<Vec<Profile>, AppError> {
        debug!("Listing profiles from database");

        let query = format!("{PROFILE_COLUMNS} ORDER BY p.created_at ASC, p.id ASC");
        let profiles: Vec<Profile> = sqlx::query_as::<_, ProfileRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to list profiles from database");
                AppError::DatabaseError(e.to_string())
            })?
            .into_iter()
            .map(Profile::from)
            .collect();

        debug!(profile_count = profiles.len(), "Listed profiles from database");
        Ok(profiles)
    }

    #[instrument(skip(self))]
    async fn get_profile(&self, profile_id: &str) -> Result<Option<Profile>, AppError> {
        debug!(profile_id = %profile_id, "Fetching profile from database");

        let query = format!("{PROFILE_COLUMNS} WHERE p.id::text = $1");
        let row = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(profile_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, profile_id = %profile_id, "Failed to fetch profile from database");
                AppError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Profile::from))
    }
}
