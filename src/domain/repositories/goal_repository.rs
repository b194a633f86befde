use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::goal::GoalEvent;

/// Repository trait for the goal store
///
/// Implementations must return goals in the order they were recorded; the
/// leaderboard tie-break and each player's team depend on it.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Fetch every recorded goal, oldest first
    async fn fetch_all_goals(&self) -> RepositoryResult<Vec<GoalEvent>>;

    /// Persist a newly recorded goal
    async fn record(&self, goal: &GoalEvent) -> RepositoryResult<()>;
}
