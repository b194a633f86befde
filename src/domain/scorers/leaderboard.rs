use std::collections::HashMap;

use crate::domain::goal::GoalEvent;
use crate::domain::team::TeamInfo;

/// One row of the top scorers leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerEntry {
    /// 1-based position in the leaderboard
    pub rank: u32,
    pub player_name: String,
    /// Team taken from the player's first goal
    pub team: String,
    /// Crest of `team`, `None` when the directory does not know the team
    pub crest_url: Option<String>,
    pub goals: u32,
}

/// Per-player tally built during the single pass over goals
struct Tally<'a> {
    player_name: &'a str,
    team: &'a str,
    goals: u32,
}

/// Builds the top scorers leaderboard from raw goals and team reference data
///
/// # Rules
/// - Goals are counted per player name
/// - A player's team is the team of their first goal in `goals`; later
///   goals listing a different team do not change it
/// - Crests are looked up by team name; when `teams` lists a name more than
///   once the first entry wins
/// - Entries are ordered by goals descending; equal counts keep the order in
///   which the players first appear in `goals`
/// - Ranks are positional (`1..=N`), equal counts still get distinct ranks
///
/// Never fails: empty input yields an empty leaderboard and unknown teams
/// yield `crest_url: None`.
///
/// # Example
/// ```
/// use footybot_api::domain::goal::GoalEvent;
/// use footybot_api::domain::scorers::compute_top_scorers;
/// use footybot_api::domain::team::TeamInfo;
///
/// let goals = vec![
///     GoalEvent::new("A", "TeamX").unwrap(),
///     GoalEvent::new("B", "TeamY").unwrap(),
///     GoalEvent::new("A", "TeamX").unwrap(),
/// ];
/// let teams = vec![TeamInfo::new("TeamX", "urlX")];
///
/// let board = compute_top_scorers(&goals, &teams);
///
/// assert_eq!(board[0].player_name, "A");
/// assert_eq!(board[0].goals, 2);
/// assert_eq!(board[1].crest_url, None);
/// ```
pub fn compute_top_scorers(goals: &[GoalEvent], teams: &[TeamInfo]) -> Vec<ScorerEntry> {
    let mut crests: HashMap<&str, &str> = HashMap::with_capacity(teams.len());
    for team in teams {
        crests
            .entry(team.name.as_str())
            .or_insert(team.crest_url.as_str());
    }

    // Tallies stay in first-appearance order; `slots` maps a player to their tally.
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<Tally<'_>> = Vec::new();

    for goal in goals {
        match slots.get(goal.player_name()).copied() {
            Some(slot) => tallies[slot].goals = tallies[slot].goals.saturating_add(1),
            None => {
                slots.insert(goal.player_name(), tallies.len());
                tallies.push(Tally {
                    player_name: goal.player_name(),
                    team: goal.player_team(),
                    goals: 1,
                });
            }
        }
    }

    // sort_by is stable, which keeps the first-appearance tie-break
    tallies.sort_by(|a, b| b.goals.cmp(&a.goals));

    tallies
        .into_iter()
        .enumerate()
        .map(|(position, tally)| ScorerEntry {
            rank: rank_at(position),
            player_name: tally.player_name.to_string(),
            team: tally.team.to_string(),
            crest_url: crests.get(tally.team).map(|crest| crest.to_string()),
            goals: tally.goals,
        })
        .collect()
}

/// 1-based rank for a 0-based position, pinned at `u32::MAX`
fn rank_at(position: usize) -> u32 {
    u32::try_from(position.saturating_add(1)).unwrap_or(u32::MAX)
}
