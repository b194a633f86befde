use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single scored goal, attributed to a player and the team they scored for
///
/// # Invariants
/// - Player name is non-blank and stored trimmed
/// - Player team is non-blank and stored trimmed
/// - Immutable once recorded
///
/// # Example
/// ```
/// use footybot_api::domain::goal::GoalEvent;
///
/// let goal = GoalEvent::new("  Bukayo Saka ", "Arsenal").expect("valid goal");
///
/// assert_eq!(goal.player_name(), "Bukayo Saka");
/// assert_eq!(goal.player_team(), "Arsenal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalEvent {
    id: Uuid,
    player_name: String,
    player_team: String,
    recorded_at: DateTime<Utc>,
}

impl GoalEvent {
    /// Records a new goal
    ///
    /// # Returns
    /// * `Ok(GoalEvent)` - New goal stamped with a fresh id and the current time
    /// * `Err(String)` - If the player name or team is blank
    pub fn new(
        player_name: impl AsRef<str>,
        player_team: impl AsRef<str>,
    ) -> Result<Self, String> {
        let player_name = player_name.as_ref().trim();
        let player_team = player_team.as_ref().trim();

        if player_name.is_empty() {
            return Err("Player name cannot be empty".to_string());
        }

        if player_team.is_empty() {
            return Err("Player team cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            player_name: player_name.to_string(),
            player_team: player_team.to_string(),
            recorded_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name of the player who scored
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Team the player scored for
    pub fn player_team(&self) -> &str {
        &self.player_team
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Reconstructs a goal from stored data
    ///
    /// Skips validation; stored rows are trusted as-is.
    pub fn from_persistence(
        id: Uuid,
        player_name: String,
        player_team: String,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            player_name,
            player_team,
            recorded_at,
        }
    }
}
