use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{RepositoryResult, TeamDirectory};
use crate::domain::team::TeamInfo;

#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    name: String,
    crest: String,
}

/// PostgreSQL implementation of TeamDirectory, backed by the `teams` table
pub struct PostgresTeamDirectory {
    pool: PgPool,
}

impl PostgresTeamDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamDirectory for PostgresTeamDirectory {
    async fn fetch_all_teams(&self) -> RepositoryResult<Vec<TeamInfo>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT name, crest
            FROM teams
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| TeamInfo::new(r.name, r.crest))
            .collect())
    }
}
