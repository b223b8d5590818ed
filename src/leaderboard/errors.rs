use thiserror::Error;

use crate::{practice::FetchError, shared::AppError};

#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// The profile store could not be read; nothing can be ranked
    #[error("Profile source error: {0}")]
    Source(#[from] AppError),

    #[error("Verification failed: {0}")]
    Verification(#[from] FetchError),
}
