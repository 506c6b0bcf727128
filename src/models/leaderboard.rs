//! Player leaderboard models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PlayerId, PlayerStatRecord, TeamId};

/// Counting statistic a leaderboard ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardMetric {
    Goals,
    Assists,
}

impl LeaderboardMetric {
    /// Read this metric from a single match record.
    pub fn value_of(&self, stat: &PlayerStatRecord) -> u32 {
        match self {
            LeaderboardMetric::Goals => stat.goals,
            LeaderboardMetric::Assists => stat.assists,
        }
    }
}

impl std::fmt::Display for LeaderboardMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardMetric::Goals => write!(f, "goals"),
            LeaderboardMetric::Assists => write!(f, "assists"),
        }
    }
}

impl FromStr for LeaderboardMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goals" | "scorers" => Ok(LeaderboardMetric::Goals),
            "assists" => Ok(LeaderboardMetric::Assists),
            other => Err(format!("unknown leaderboard metric: {}", other)),
        }
    }
}

/// Where a leaderboard entry's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    /// Summed from per-match statistic records
    Computed,
    /// Taken from the injected supplementary table
    Supplementary,
}

/// One ranked player on a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team_id: Option<TeamId>,
    pub team_name: String,
    pub metric: LeaderboardMetric,
    /// Metric total across all matches
    pub total: u32,
    pub matches_played: u32,
    pub source: EntrySource,
}

impl LeaderboardEntry {
    /// Whether this entry should replace `existing` for the same player.
    ///
    /// Higher total wins; on equal totals, more matches played wins.
    /// A full tie keeps `existing`.
    pub fn supersedes(&self, existing: &LeaderboardEntry) -> bool {
        self.total > existing.total
            || (self.total == existing.total && self.matches_played > existing.matches_played)
    }
}
