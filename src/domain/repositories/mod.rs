// Repository interfaces (ports)
// Infrastructure adapters implement these; the domain never sees a concrete store

pub mod errors;
pub mod goal_repository;
pub mod team_directory;

pub use errors::{RepositoryError, RepositoryResult};
pub use goal_repository::GoalRepository;
pub use team_directory::TeamDirectory;
