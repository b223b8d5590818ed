use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use super::RankedEntry;

/// Organization filter value that disables organization filtering
const ALL_ORGANIZATIONS: &str = "all";

/// Display-side filtering applied on top of a ranked list.
///
/// Filtering never renumbers: entries keep the rank they hold in the full
/// leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderboardFilter {
    /// Case-insensitive substring of the display name
    pub search: Option<String>,
    /// Case-insensitive substring of the organization, or "all"
    pub organization: Option<String>,
    /// Maximum number of entries returned; blank means no limit
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<usize>,
}

impl LeaderboardFilter {
    pub fn matches(&self, entry: &RankedEntry) -> bool {
        let name_matches = match normalized(self.search.as_deref()) {
            Some(search) => entry.display_name.to_lowercase().contains(&search),
            None => true,
        };

        let organization_matches = match normalized(self.organization.as_deref()) {
            Some(org) if org != ALL_ORGANIZATIONS => {
                entry.organization.to_lowercase().contains(&org)
            }
            _ => true,
        };

        name_matches && organization_matches
    }

    pub fn apply(&self, entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid limit {value:?}"))),
    }
}

/// Response structure for the leaderboard endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardResponse {
    pub generated_at: DateTime<Utc>,
    pub total: usize, // Entry count before filtering
    pub entries: Vec<RankedEntry>,
}

/// Response structure for practice username verification
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VerifyResponse {
    pub username: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
