use serde::{Deserialize, Serialize};

use super::FetchError;

const STATUS_ERROR: &str = "error";

/// Raw body returned by the statistics endpoint.
///
/// Every field is optional here; `PracticeStats::try_from` decides which
/// ones are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeStatsResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub total_solved: Option<u64>,
    pub easy_solved: Option<u64>,
    pub medium_solved: Option<u64>,
    pub hard_solved: Option<u64>,
    pub ranking: Option<u64>,
    pub acceptance_rate: Option<AcceptanceRate>,
}

/// The endpoint has reported the acceptance rate both as a number and as a
/// string like "61.5%"
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AcceptanceRate {
    Number(f64),
    Text(String),
}

impl AcceptanceRate {
    fn as_percent(&self) -> f64 {
        match self {
            AcceptanceRate::Number(value) => *value,
            AcceptanceRate::Text(text) => text.trim().trim_end_matches('%').parse().unwrap_or(0.0),
        }
    }
}

/// Validated statistics for one practice-site user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeStats {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub ranking: u64,
    pub acceptance_rate: f64,
}

impl PracticeStats {
    pub fn with_total_solved(total_solved: u32) -> Self {
        Self {
            total_solved,
            ..Self::default()
        }
    }
}

impl TryFrom<PracticeStatsResponse> for PracticeStats {
    type Error = FetchError;

    fn try_from(response: PracticeStatsResponse) -> Result<Self, Self::Error> {
        if response.status.as_deref() == Some(STATUS_ERROR) {
            return Err(FetchError::NotFound(
                response
                    .message
                    .unwrap_or_else(|| "statistics endpoint reported an error".to_string()),
            ));
        }

        let total_solved = response
            .total_solved
            .ok_or_else(|| FetchError::MalformedResponse("missing totalSolved".to_string()))?;

        Ok(Self {
            total_solved: saturate(total_solved),
            easy_solved: response.easy_solved.map(saturate).unwrap_or_default(),
            medium_solved: response.medium_solved.map(saturate).unwrap_or_default(),
            hard_solved: response.hard_solved.map(saturate).unwrap_or_default(),
            ranking: response.ranking.unwrap_or_default(),
            acceptance_rate: response
                .acceptance_rate
                .as_ref()
                .map(AcceptanceRate::as_percent)
                .unwrap_or_default(),
        })
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
