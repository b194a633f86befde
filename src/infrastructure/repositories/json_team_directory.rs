use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamDirectory};
use crate::domain::team::TeamInfo;

/// On-disk shape of one team entry
#[derive(Debug, Deserialize)]
struct TeamRecord {
    name: String,
    #[serde(alias = "crestUrl", alias = "crest_url")]
    crest: String,
}

/// Team directory read from a JSON file
///
/// The file holds an array of `{"name": ..., "crest": ...}` objects. It is
/// re-read on every fetch, so edits show up on the next leaderboard request.
pub struct JsonFileTeamDirectory {
    path: PathBuf,
}

impl JsonFileTeamDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TeamDirectory for JsonFileTeamDirectory {
    async fn fetch_all_teams(&self) -> RepositoryResult<Vec<TeamInfo>> {
        let path = self.path.display().to_string();

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RepositoryError::Io {
                path: path.clone(),
                source,
            })?;

        let records: Vec<TeamRecord> = serde_json::from_str(&contents)
            .map_err(|source| RepositoryError::Malformed { path, source })?;

        debug!("Loaded {} teams from {:?}", records.len(), self.path);

        Ok(records
            .into_iter()
            .map(|r| TeamInfo::new(r.name, r.crest))
            .collect())
    }
}
