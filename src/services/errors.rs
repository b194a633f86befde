use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// Errors that can occur while assembling the leaderboard
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Goal store unavailable: {0}")]
    GoalStore(#[source] RepositoryError),

    #[error("Team directory unavailable: {0}")]
    TeamDirectory(#[source] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
