use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::team::TeamInfo;

/// Read-only source of team reference data
#[async_trait]
pub trait TeamDirectory: Send + Sync {
    /// Fetch all teams in directory order
    ///
    /// Duplicate names are passed through untouched; callers decide which one wins.
    async fn fetch_all_teams(&self) -> RepositoryResult<Vec<TeamInfo>>;
}
