//! Snapshot storage.
//!
//! A league snapshot lives in a directory of JSONL files, one per record
//! type. Loading never partially fails: a missing file is an empty
//! collection and malformed lines are skipped with a warning.

pub mod jsonl;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::LeagueSnapshot;
use jsonl::{EntityType, JsonlReader, JsonlWriter};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot directory not found: {0}")]
    PathNotFound(PathBuf),
}

/// Location of snapshot files.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the file holding one record type.
    pub fn entity_path(&self, entity: EntityType) -> PathBuf {
        self.data_dir.join(entity.filename())
    }

    fn reader<T: serde::de::DeserializeOwned>(&self, entity: EntityType) -> JsonlReader<T> {
        JsonlReader::new(self.entity_path(entity))
    }

    fn writer<T: serde::Serialize>(&self, entity: EntityType) -> JsonlWriter<T> {
        JsonlWriter::new(self.entity_path(entity))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Load a snapshot from `config.data_dir`.
pub fn load_snapshot(config: &StorageConfig) -> Result<LeagueSnapshot, StorageError> {
    if !config.data_dir.is_dir() {
        return Err(StorageError::PathNotFound(config.data_dir.clone()));
    }

    let snapshot = LeagueSnapshot {
        divisions: config.reader(EntityType::Division).read_all()?,
        teams: config.reader(EntityType::Team).read_all()?,
        venues: config.reader(EntityType::Venue).read_all()?,
        players: config.reader(EntityType::Player).read_all()?,
        matches: config.reader(EntityType::Match).read_all()?,
        player_stats: config.reader(EntityType::PlayerStat).read_all()?,
    };

    info!(
        "Loaded {} teams, {} players, {} matches from {:?}",
        snapshot.teams.len(),
        snapshot.players.len(),
        snapshot.matches.len(),
        config.data_dir
    );

    Ok(snapshot)
}

fn write_records<T: serde::Serialize>(
    config: &StorageConfig,
    entity: EntityType,
    records: &[T],
) -> Result<usize, StorageError> {
    config.writer(entity).write_all(records)
}

/// Write every collection of a snapshot, replacing existing files.
pub fn save_snapshot(
    config: &StorageConfig,
    snapshot: &LeagueSnapshot,
) -> Result<(), StorageError> {
    write_records(config, EntityType::Division, &snapshot.divisions)?;
    write_records(config, EntityType::Team, &snapshot.teams)?;
    write_records(config, EntityType::Venue, &snapshot.venues)?;
    write_records(config, EntityType::Player, &snapshot.players)?;
    write_records(config, EntityType::Match, &snapshot.matches)?;
    write_records(config, EntityType::PlayerStat, &snapshot.player_stats)?;
    Ok(())
}

/// Load a snapshot from a directory path.
pub fn load_snapshot_from(data_dir: &Path) -> Result<LeagueSnapshot, StorageError> {
    load_snapshot(&StorageConfig::new(data_dir.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Division, MatchRecord, Player, PlayerStatRecord, Team, Venue};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> LeagueSnapshot {
        LeagueSnapshot {
            divisions: vec![Division::new("d1", "Premier")],
            teams: vec![
                Team::new("a", "Alpha").with_division("d1"),
                Team::new("b", "Beta")
                    .with_division("d1")
                    .with_alias("beta"),
            ],
            venues: vec![Venue::new("v", "Ground", 500)],
            players: vec![Player::new("p1", "Ada").with_team("a")],
            matches: vec![
                MatchRecord::new("m1", NaiveDate::from_ymd_opt(2024, 1, 6), "a", "b")
                    .with_score(2, 1)
                    .at_venue("v", 320),
            ],
            player_stats: vec![
                PlayerStatRecord::new("m1", "p1").with_goals_and_assists(2, 0),
            ],
        }
    }

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(
            config.entity_path(EntityType::Match),
            PathBuf::from("/data/matches.jsonl")
        );
        assert_eq!(
            config.entity_path(EntityType::PlayerStat),
            PathBuf::from("/data/player_stats.jsonl")
        );
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_save_and_load_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        save_snapshot(&config, &sample()).unwrap();
        let loaded = load_snapshot(&config).unwrap();

        assert_eq!(loaded.teams, sample().teams);
        assert_eq!(loaded.matches, sample().matches);
        assert_eq!(loaded.player_stats.len(), 1);
    }

    #[test]
    fn test_missing_files_are_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("teams.jsonl"),
            "{\"id\":\"a\",\"name\":\"Alpha\"}\n",
        )
        .unwrap();

        let loaded = load_snapshot_from(temp_dir.path()).unwrap();

        assert_eq!(loaded.teams.len(), 1);
        assert!(loaded.matches.is_empty());
        assert!(loaded.divisions.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        assert!(matches!(
            load_snapshot_from(&missing),
            Err(StorageError::PathNotFound(_))
        ));
    }
}
