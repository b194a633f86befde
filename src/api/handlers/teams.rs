use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::TeamInfo;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub name: String,
    pub crest_url: String,
}

impl From<TeamInfo> for TeamResponse {
    fn from(team: TeamInfo) -> Self {
        Self {
            name: team.name,
            crest_url: team.crest_url,
        }
    }
}

/// List the team directory in directory order
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.fetch_all_teams().await?;

    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}
