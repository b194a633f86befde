use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::goal::GoalEvent;
use crate::domain::repositories::{GoalRepository, RepositoryResult, TeamDirectory};
use crate::domain::team::TeamInfo;

/// Goal store kept in process memory, in recording order
#[derive(Debug, Default)]
pub struct InMemoryGoalRepository {
    goals: RwLock<Vec<GoalEvent>>,
}

impl InMemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with goals, treated as already recorded in this order
    pub fn with_goals(goals: Vec<GoalEvent>) -> Self {
        Self {
            goals: RwLock::new(goals),
        }
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn fetch_all_goals(&self) -> RepositoryResult<Vec<GoalEvent>> {
        Ok(self.goals.read().await.clone())
    }

    async fn record(&self, goal: &GoalEvent) -> RepositoryResult<()> {
        self.goals.write().await.push(goal.clone());
        Ok(())
    }
}

/// Fixed team directory
#[derive(Debug, Default)]
pub struct InMemoryTeamDirectory {
    teams: Vec<TeamInfo>,
}

impl InMemoryTeamDirectory {
    pub fn new(teams: Vec<TeamInfo>) -> Self {
        Self { teams }
    }
}

#[async_trait]
impl TeamDirectory for InMemoryTeamDirectory {
    async fn fetch_all_teams(&self) -> RepositoryResult<Vec<TeamInfo>> {
        Ok(self.teams.clone())
    }
}
