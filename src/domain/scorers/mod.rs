// Scorers domain module
// Pure aggregation of goal events into the top scorers leaderboard

pub mod leaderboard;

pub use leaderboard::{compute_top_scorers, ScorerEntry};
