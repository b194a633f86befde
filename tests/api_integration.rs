//! End-to-end API tests
//!
//! These tests drive the full router over in-memory repositories:
//! - Top scorers leaderboard shape and ordering
//! - Recording goals and seeing them reflected in the leaderboard
//! - Validation and collaborator failures mapped to HTTP errors

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use footybot_api::api::{self, AppState};
use footybot_api::domain::goal::GoalEvent;
use footybot_api::domain::repositories::{RepositoryError, RepositoryResult, TeamDirectory};
use footybot_api::domain::team::TeamInfo;
use footybot_api::infrastructure::repositories::{InMemoryGoalRepository, InMemoryTeamDirectory};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

/// Setup test application over the given goals and teams
fn setup_app(goals: Vec<(&str, &str)>, teams: Vec<TeamInfo>) -> Router {
    let goals = goals
        .into_iter()
        .map(|(player, team)| GoalEvent::new(player, team).expect("valid goal"))
        .collect();

    api::router(AppState::new(
        Arc::new(InMemoryGoalRepository::with_goals(goals)),
        Arc::new(InMemoryTeamDirectory::new(teams)),
    ))
}

fn premier_league_teams() -> Vec<TeamInfo> {
    vec![
        TeamInfo::new("Arsenal", "https://crests.example/arsenal.png"),
        TeamInfo::new("Liverpool", "https://crests.example/liverpool.png"),
        TeamInfo::new("Man City", "https://crests.example/man-city.png"),
    ]
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_goal(app: Router, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/goals")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app(Vec::new(), Vec::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_top_scorers_ranked_with_crests() {
    let app = setup_app(
        vec![
            ("A", "TeamX"),
            ("B", "TeamY"),
            ("A", "TeamX"),
            ("A", "TeamX"),
        ],
        vec![TeamInfo::new("TeamX", "urlX"), TeamInfo::new("TeamY", "urlY")],
    );

    let (status, json) = get_json(app, "/api/top-scorers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"rank": 1, "playerName": "A", "playerTeam": "TeamX", "crestUrl": "urlX", "goals": 3},
            {"rank": 2, "playerName": "B", "playerTeam": "TeamY", "crestUrl": "urlY", "goals": 1}
        ])
    );
}

#[tokio::test]
async fn test_top_scorers_empty() {
    let app = setup_app(Vec::new(), Vec::new());

    let (status, json) = get_json(app, "/api/top-scorers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_top_scorers_unknown_team_has_null_crest() {
    let app = setup_app(vec![("C", "TeamZ")], Vec::new());

    let (_, json) = get_json(app, "/api/top-scorers").await;

    assert_eq!(
        json,
        json!([{"rank": 1, "playerName": "C", "playerTeam": "TeamZ", "crestUrl": null, "goals": 1}])
    );
}

#[tokio::test]
async fn test_recorded_goal_reaches_leaderboard() {
    let app = setup_app(
        vec![("Bukayo Saka", "Arsenal"), ("Mohamed Salah", "Liverpool")],
        premier_league_teams(),
    );

    let (status, json) = post_goal(
        app.clone(),
        json!({"playerName": "Mohamed Salah", "playerTeam": "Liverpool"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(json["id"].is_string());
    assert!(json["recordedAt"].is_string());
    assert_eq!(json["playerName"], "Mohamed Salah");

    let (_, board) = get_json(app, "/api/top-scorers").await;

    assert_eq!(board[0]["playerName"], "Mohamed Salah");
    assert_eq!(board[0]["goals"], 2);
    assert_eq!(board[0]["crestUrl"], "https://crests.example/liverpool.png");
    assert_eq!(board[1]["playerName"], "Bukayo Saka");
    assert_eq!(board[1]["rank"], 2);
}

#[tokio::test]
async fn test_record_goal_trims_names() {
    let app = setup_app(Vec::new(), premier_league_teams());

    let (status, json) = post_goal(
        app.clone(),
        json!({"playerName": "  Erling Haaland ", "playerTeam": "Man City  "}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["playerName"], "Erling Haaland");
    assert_eq!(json["playerTeam"], "Man City");

    let (_, board) = get_json(app, "/api/top-scorers").await;
    assert_eq!(board[0]["crestUrl"], "https://crests.example/man-city.png");
}

#[tokio::test]
async fn test_record_goal_blank_player_rejected() {
    let app = setup_app(Vec::new(), Vec::new());

    let (status, json) = post_goal(
        app.clone(),
        json!({"playerName": "   ", "playerTeam": "Arsenal"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Player name cannot be empty");

    let (_, goals) = get_json(app, "/api/goals").await;
    assert_eq!(goals, json!([]));
}

#[tokio::test]
async fn test_record_goal_blank_team_rejected() {
    let app = setup_app(Vec::new(), Vec::new());

    let (status, json) = post_goal(app, json!({"playerName": "Saka", "playerTeam": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Player team cannot be empty");
}

#[tokio::test]
async fn test_list_goals_in_recording_order() {
    let app = setup_app(
        vec![("Cole Palmer", "Chelsea"), ("Alexander Isak", "Newcastle")],
        Vec::new(),
    );

    let (status, json) = get_json(app, "/api/goals").await;

    assert_eq!(status, StatusCode::OK);
    let players: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["playerName"].as_str().unwrap())
        .collect();
    assert_eq!(players, vec!["Cole Palmer", "Alexander Isak"]);
}

#[tokio::test]
async fn test_list_teams() {
    let app = setup_app(Vec::new(), premier_league_teams());

    let (status, json) = get_json(app, "/api/teams").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["name"], "Arsenal");
    assert_eq!(json[0]["crestUrl"], "https://crests.example/arsenal.png");
}

struct BrokenDirectory;

#[async_trait]
impl TeamDirectory for BrokenDirectory {
    async fn fetch_all_teams(&self) -> RepositoryResult<Vec<TeamInfo>> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[tokio::test]
async fn test_top_scorers_directory_failure_is_500() {
    let app = api::router(AppState::new(
        Arc::new(InMemoryGoalRepository::new()),
        Arc::new(BrokenDirectory),
    ));

    let (status, json) = get_json(app, "/api/top-scorers").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Team directory unavailable"));
}
