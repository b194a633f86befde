use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::goal::GoalEvent;

/// Request body for recording a goal
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordGoalRequest {
    pub player_name: String,
    pub player_team: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: Uuid,
    pub player_name: String,
    pub player_team: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<&GoalEvent> for GoalResponse {
    fn from(goal: &GoalEvent) -> Self {
        Self {
            id: goal.id(),
            player_name: goal.player_name().to_string(),
            player_team: goal.player_team().to_string(),
            recorded_at: goal.recorded_at(),
        }
    }
}

/// Record a goal
///
/// POST /api/goals
pub async fn record_goal(
    State(state): State<AppState>,
    Json(req): Json<RecordGoalRequest>,
) -> Result<(StatusCode, Json<GoalResponse>), ApiError> {
    let goal = GoalEvent::new(&req.player_name, &req.player_team).map_err(ApiError::bad_request)?;

    state.goals.record(&goal).await?;
    tracing::info!(goal_id = %goal.id(), player = goal.player_name(), "Recorded goal");

    Ok((StatusCode::CREATED, Json(GoalResponse::from(&goal))))
}

/// List all recorded goals, oldest first
///
/// GET /api/goals
pub async fn list_goals(
    State(state): State<AppState>,
) -> Result<Json<Vec<GoalResponse>>, ApiError> {
    let goals = state.goals.fetch_all_goals().await?;

    Ok(Json(goals.iter().map(GoalResponse::from).collect()))
}
