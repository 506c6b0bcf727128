//! Derived statistics models.
//!
//! Built fresh from a [`LeagueSnapshot`](super::LeagueSnapshot) on every
//! request; nothing here is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Division, DivisionId, ResultTally, Team, TeamId, Venue, VenueId};

/// Name used for standings rows of teams without one.
pub const UNNAMED_TEAM: &str = "Unnamed Team";

/// A team's row in a standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub team_id: TeamId,
    pub team_name: String,
    pub division_id: Option<DivisionId>,
    pub division_name: Option<String>,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingEntry {
    /// Create an entry from an accumulated tally.
    pub fn from_tally(team: &Team, division: Option<&Division>, tally: &ResultTally) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.display_name(UNNAMED_TEAM).to_string(),
            division_id: division.map(|d| d.id.clone()),
            division_name: division.map(|d| d.name.clone()),
            played: tally.played(),
            wins: tally.wins,
            draws: tally.draws,
            losses: tally.losses,
            goals_for: tally.goals_for,
            goals_against: tally.goals_against,
            goal_difference: tally.goal_difference(),
            points: tally.points(),
        }
    }
}

/// A ranked standings table for one division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionStandings {
    pub division_id: DivisionId,
    pub division_name: String,
    pub entries: Vec<StandingEntry>,
}

/// Results a team recorded on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePerformance {
    pub date: NaiveDate,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl DatePerformance {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }
}

/// Attendance summary for a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueStats {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub capacity: u32,
    pub total_matches: u32,
    pub total_spectators: u64,

    /// Spectators per match, two decimal places
    pub average_attendance: f64,

    /// Average attendance as a percentage of capacity, two decimal places
    pub occupancy_rate: f64,
}

impl VenueStats {
    /// Empty counters for a venue that has hosted nothing yet.
    pub fn empty(venue: &Venue) -> Self {
        Self {
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            capacity: venue.capacity,
            total_matches: 0,
            total_spectators: 0,
            average_attendance: 0.0,
            occupancy_rate: 0.0,
        }
    }
}
