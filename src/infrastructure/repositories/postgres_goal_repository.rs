use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::goal::GoalEvent;
use crate::domain::repositories::{GoalRepository, RepositoryResult};

/// Row shape of the `goals` table
#[derive(Debug, sqlx::FromRow)]
struct GoalRow {
    id: Uuid,
    player_name: String,
    player_team: String,
    recorded_at: DateTime<Utc>,
}

impl From<GoalRow> for GoalEvent {
    fn from(row: GoalRow) -> Self {
        GoalEvent::from_persistence(row.id, row.player_name, row.player_team, row.recorded_at)
    }
}

/// PostgreSQL implementation of GoalRepository
///
/// Reads and writes the `goals` table through a shared SQLx pool. Recording
/// order comes from the table's `seq BIGSERIAL` column, assigned on insert;
/// `recorded_at` only has microsecond precision and can tie.
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    /// Creates a new PostgresGoalRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn fetch_all_goals(&self) -> RepositoryResult<Vec<GoalEvent>> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, player_name, player_team, recorded_at
            FROM goals
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GoalEvent::from).collect())
    }

    async fn record(&self, goal: &GoalEvent) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO goals (id, player_name, player_team, recorded_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(goal.id())
        .bind(goal.player_name())
        .bind(goal.player_team())
        .bind(goal.recorded_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
