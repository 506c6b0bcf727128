//! League analytics engine.
//!
//! Computes derived views from a [`LeagueSnapshot`](crate::models::LeagueSnapshot):
//! - Division standings with points / goal difference / goals-for ranking
//! - Goal and assist leaderboards merged with supplementary data
//! - Per-date team performance timelines
//! - Venue attendance and occupancy
//! - Team dashboards with upcoming/past classification and current form
//!
//! Every function is a pure computation over borrowed input.

pub mod dashboard;
pub mod filter;
pub mod history;
pub mod leaderboard;
pub mod standings;
pub mod timeline;
pub mod venues;

pub use dashboard::{build_dashboard, classify_match, compute_streak, DashboardOptions};
pub use filter::{filter_matches, MatchFilter};
pub use history::{player_history, team_match_history};
pub use leaderboard::{leaderboard, merge_entries};
pub use standings::{all_standings, compare_standings, division_standings, team_standing};
pub use timeline::team_performance;
pub use venues::venue_statistics;

use thiserror::Error;

use crate::models::EntityId;

/// Kind of record a lookup failed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
    Division,
    Player,
    Venue,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Team => write!(f, "Team"),
            EntityKind::Division => write!(f, "Division"),
            EntityKind::Player => write!(f, "Player"),
            EntityKind::Venue => write!(f, "Venue"),
        }
    }
}

/// Analytics errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: EntityId },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AnalyticsError {
    pub fn not_found(kind: EntityKind, id: &EntityId) -> Self {
        AnalyticsError::NotFound {
            kind,
            id: id.clone(),
        }
    }
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Win percentage (0 to 100) from wins and matches played.
pub fn calculate_win_percentage(wins: u32, played: u32) -> f64 {
    ratio(f64::from(wins) * 100.0, f64::from(played))
}
