use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::scorers::ScorerEntry;

/// One leaderboard row as served to the frontend
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopScorerResponse {
    pub rank: u32,
    pub player_name: String,
    pub player_team: String,
    pub crest_url: Option<String>,
    pub goals: u32,
}

impl From<ScorerEntry> for TopScorerResponse {
    fn from(entry: ScorerEntry) -> Self {
        Self {
            rank: entry.rank,
            player_name: entry.player_name,
            player_team: entry.team,
            crest_url: entry.crest_url,
            goals: entry.goals,
        }
    }
}

/// Get the top scorers leaderboard, ordered by rank
///
/// GET /api/top-scorers
pub async fn get_top_scorers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopScorerResponse>>, ApiError> {
    let leaderboard = state.top_scorers_service().top_scorers().await?;

    Ok(Json(
        leaderboard
            .into_iter()
            .map(TopScorerResponse::from)
            .collect(),
    ))
}
