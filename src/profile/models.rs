use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous";
pub const DEFAULT_ORGANIZATION: &str = "Unknown College";

/// A user's stored account/progress record, as read from the profile store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub display_name: Option<String>,
    pub organization: Option<String>,
    pub stored_points: Option<u32>, // Authoritative score when populated
    pub streak_count: u32,
    pub practice_username: Option<String>, // Handle on the external practice site
    pub cached_solved_count: Option<u32>,  // Last solved count persisted locally
}

impl Profile {
    /// Creates a profile with a generated ID and no progress recorded
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            display_name: Some(display_name.into()),
            ..Self::default()
        }
    }

    /// Display name, falling back to "Anonymous" when missing or blank
    pub fn display_name(&self) -> &str {
        non_blank(self.display_name.as_deref()).unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Organization, falling back to "Unknown College" when missing or blank
    pub fn organization(&self) -> &str {
        non_blank(self.organization.as_deref()).unwrap_or(DEFAULT_ORGANIZATION)
    }

    /// Practice-site username, if one is set. Blank usernames count as absent.
    pub fn practice_username(&self) -> Option<&str> {
        non_blank(self.practice_username.as_deref()).map(str::trim)
    }

    pub fn cached_solved_count(&self) -> u32 {
        self.cached_solved_count.unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
