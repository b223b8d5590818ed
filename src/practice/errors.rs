use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure reaching the statistics endpoint (DNS, refused, timeout, 5xx)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint reachable but has no data for the username
    #[error("Practice username not found: {0}")]
    NotFound(String),

    #[error("Malformed statistics response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::MalformedResponse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}
