//! Curated data merged into computed results.
//!
//! Leaderboard rows and fixtures that do not come from match statistics
//! (manually maintained tables, imports from other leagues) are injected
//! through [`SupplementarySource`]. Rows reference teams by name or alias
//! and players by name; they are resolved against the snapshot at merge
//! time and unresolvable rows are dropped.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{LeaderboardMetric, VenueSummary};

/// Errors loading a supplementary table.
#[derive(Debug, Error)]
pub enum SupplementaryError {
    #[error("Failed to read supplementary table: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse supplementary table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A curated leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementaryLeaderRow {
    /// Team name or alias
    pub team: String,
    /// Player name, matched exactly
    pub player: String,
    pub value: u32,
    pub matches_played: u32,
}

/// A curated upcoming fixture for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementaryFixture {
    /// Team name or alias the fixture belongs to
    pub team: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    pub opponent: String,
    pub home: bool,
    #[serde(default)]
    pub venue: Option<VenueSummary>,
}

/// Injected source of curated leaderboard rows and fixtures.
pub trait SupplementarySource: Send + Sync {
    /// Curated rows for the given metric.
    fn leaderboard_rows(&self, metric: LeaderboardMetric) -> Vec<SupplementaryLeaderRow>;

    /// All curated fixtures.
    fn fixtures(&self) -> Vec<SupplementaryFixture>;
}

/// Supplementary data loaded from a TOML table.
///
/// ```toml
/// [[scorers]]
/// team = "Harbour FC"
/// player = "Ada Lovelace"
/// value = 12
/// matches_played = 10
///
/// [[fixtures]]
/// team = "harbourfc"
/// date = "2026-05-01"
/// time = "15:00:00"
/// opponent = "Rovers"
/// home = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementaryTable {
    #[serde(default)]
    pub scorers: Vec<SupplementaryLeaderRow>,

    #[serde(default)]
    pub assists: Vec<SupplementaryLeaderRow>,

    #[serde(default)]
    pub fixtures: Vec<SupplementaryFixture>,
}

impl SupplementaryTable {
    /// Load a table from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SupplementaryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse a table from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, SupplementaryError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn is_empty(&self) -> bool {
        self.scorers.is_empty() && self.assists.is_empty() && self.fixtures.is_empty()
    }
}

impl SupplementarySource for SupplementaryTable {
    fn leaderboard_rows(&self, metric: LeaderboardMetric) -> Vec<SupplementaryLeaderRow> {
        match metric {
            LeaderboardMetric::Goals => self.scorers.clone(),
            LeaderboardMetric::Assists => self.assists.clone(),
        }
    }

    fn fixtures(&self) -> Vec<SupplementaryFixture> {
        self.fixtures.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
[[scorers]]
team = "Harbour FC"
player = "Ada"
value = 12
matches_played = 10

[[assists]]
team = "harbourfc"
player = "Grace"
value = 7
matches_played = 9

[[fixtures]]
team = "Harbour FC"
date = "2026-05-01"
time = "15:00:00"
opponent = "Rovers"
home = true

[fixtures.venue]
name = "Quayside"
capacity = 8000
"#;

    #[test]
    fn test_parse_table() {
        let table = SupplementaryTable::from_toml(TABLE).unwrap();

        assert_eq!(table.scorers.len(), 1);
        assert_eq!(table.assists[0].team, "harbourfc");
        assert_eq!(
            table.fixtures[0].date,
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
        );
        assert_eq!(
            table.fixtures[0].venue.as_ref().map(|v| v.name.as_str()),
            Some("Quayside")
        );
    }

    #[test]
    fn test_rows_by_metric() {
        let table = SupplementaryTable::from_toml(TABLE).unwrap();

        let goals = table.leaderboard_rows(LeaderboardMetric::Goals);
        let assists = table.leaderboard_rows(LeaderboardMetric::Assists);

        assert_eq!(goals[0].player, "Ada");
        assert_eq!(assists[0].player, "Grace");
    }

    #[test]
    fn test_empty_table() {
        let table = SupplementaryTable::from_toml("").unwrap();
        assert!(table.is_empty());
        assert!(table.fixtures().is_empty());
    }

    #[test]
    fn test_invalid_table() {
        let table = "[[scorers]]\nvalue = \"many\"";
        assert!(SupplementaryTable::from_toml(table).is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supplementary.toml");
        std::fs::write(&path, TABLE).unwrap();

        let table = SupplementaryTable::from_file(&path).unwrap();
        assert_eq!(table.fixtures.len(), 1);
    }
}
