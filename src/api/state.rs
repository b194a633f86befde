use std::sync::Arc;

use crate::domain::repositories::{GoalRepository, TeamDirectory};
use crate::services::TopScorersService;

/// Shared handler state: the two collaborators the leaderboard is built from
#[derive(Clone)]
pub struct AppState {
    pub goals: Arc<dyn GoalRepository>,
    pub teams: Arc<dyn TeamDirectory>,
}

impl AppState {
    pub fn new(goals: Arc<dyn GoalRepository>, teams: Arc<dyn TeamDirectory>) -> Self {
        Self { goals, teams }
    }

    pub fn top_scorers_service(&self) -> TopScorersService {
        TopScorersService::new(self.goals.clone(), self.teams.clone())
    }
}
