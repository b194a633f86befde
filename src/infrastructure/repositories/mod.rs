// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod json_team_directory;
pub mod postgres_goal_repository;
pub mod postgres_team_directory;

pub use in_memory::{InMemoryGoalRepository, InMemoryTeamDirectory};
pub use json_team_directory::JsonFileTeamDirectory;
pub use postgres_goal_repository::PostgresGoalRepository;
pub use postgres_team_directory::PostgresTeamDirectory;
