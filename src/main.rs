use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use footybot_api::api::{self, AppState};
use footybot_api::config::AppConfig;
use footybot_api::domain::repositories::TeamDirectory;
use footybot_api::infrastructure::repositories::{
    JsonFileTeamDirectory, PostgresGoalRepository, PostgresTeamDirectory,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected successfully");

    let teams: Arc<dyn TeamDirectory> = match &config.teams_file {
        Some(path) => {
            let directory = JsonFileTeamDirectory::new(path);
            tracing::info!("Reading team directory from {:?}", directory.path());
            Arc::new(directory)
        }
        None => Arc::new(PostgresTeamDirectory::new(pool.clone())),
    };
    let goals = Arc::new(PostgresGoalRepository::new(pool));

    let app = api::router(AppState::new(goals, teams));

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
