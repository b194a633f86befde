use std::sync::Arc;

use tracing::{debug, info};

use super::errors::{ServiceError, ServiceResult};
use crate::domain::repositories::{GoalRepository, TeamDirectory};
use crate::domain::scorers::{compute_top_scorers, ScorerEntry};

/// Builds the top scorers leaderboard from the goal store and team directory
///
/// Both inputs are fetched concurrently; the leaderboard is recomputed on
/// every call.
#[derive(Clone)]
pub struct TopScorersService {
    goals: Arc<dyn GoalRepository>,
    teams: Arc<dyn TeamDirectory>,
}

impl TopScorersService {
    pub fn new(goals: Arc<dyn GoalRepository>, teams: Arc<dyn TeamDirectory>) -> Self {
        Self { goals, teams }
    }

    /// Fetch all goals and teams, then rank the scorers
    ///
    /// # Returns
    /// * `Ok(Vec<ScorerEntry>)` - Leaderboard ordered by rank
    /// * `Err(ServiceError)` - If either collaborator fails
    pub async fn top_scorers(&self) -> ServiceResult<Vec<ScorerEntry>> {
        let (goals, teams) = tokio::try_join!(
            async {
                self.goals
                    .fetch_all_goals()
                    .await
                    .map_err(ServiceError::GoalStore)
            },
            async {
                self.teams
                    .fetch_all_teams()
                    .await
                    .map_err(ServiceError::TeamDirectory)
            },
        )?;

        debug!(goals = goals.len(), teams = teams.len(), "Fetched leaderboard inputs");

        let leaderboard = compute_top_scorers(&goals, &teams);

        info!(scorers = leaderboard.len(), "Computed top scorers");
        Ok(leaderboard)
    }
}
