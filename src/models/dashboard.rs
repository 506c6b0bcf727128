//! Team dashboard and match history views.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{MatchId, Outcome, TeamId, Venue, VenueId};

/// Venue details embedded in a match view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    #[serde(default)]
    pub id: Option<VenueId>,
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}

impl From<&Venue> for VenueSummary {
    fn from(venue: &Venue) -> Self {
        Self {
            id: Some(venue.id.clone()),
            name: venue.name.clone(),
            capacity: venue.capacity,
        }
    }
}

/// A match seen from one team's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatchView {
    /// Absent for fixtures that only exist in the supplementary source
    pub match_id: Option<MatchId>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub venue: Option<VenueSummary>,
    pub home_goals: u32,
    pub away_goals: u32,
    pub spectators: u32,
    pub opponent_name: String,
    pub home_match: bool,
}

impl TeamMatchView {
    /// Goals scored by the viewing team.
    pub fn team_goals(&self) -> u32 {
        if self.home_match {
            self.home_goals
        } else {
            self.away_goals
        }
    }

    /// Goals scored by the opponent.
    pub fn opponent_goals(&self) -> u32 {
        if self.home_match {
            self.away_goals
        } else {
            self.home_goals
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_goals(self.team_goals(), self.opponent_goals())
    }

    pub fn is_goalless(&self) -> bool {
        self.home_goals == 0 && self.away_goals == 0
    }
}

/// Whether a match is still to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTiming {
    Upcoming,
    Past,
}

/// Recent form: the latest results and the current run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Outcomes, most recent first
    pub sequence: Vec<Outcome>,
    /// Length of the run sharing the most recent outcome
    pub run_length: u32,
}

impl Streak {
    /// Outcome of the most recent match.
    pub fn current(&self) -> Option<Outcome> {
        self.sequence.first().copied()
    }

    /// Dash-joined letters, e.g. `W-W-L`.
    pub fn sequence_string(&self) -> String {
        self.sequence
            .iter()
            .map(|o| o.letter().to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl std::fmt::Display for Streak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.current() {
            Some(outcome) => write!(
                f,
                "{} {} ({})",
                outcome.verb(),
                self.run_length,
                self.sequence_string()
            ),
            None => write!(f, "No matches yet"),
        }
    }
}

/// Everything a team's landing page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub team_id: TeamId,
    pub team_name: String,

    /// Number of past matches
    pub total_matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub points: u32,

    /// Earliest first
    pub upcoming_matches: Vec<TeamMatchView>,

    /// Most recent first
    pub past_matches: Vec<TeamMatchView>,

    /// One decimal place
    pub win_percentage: f64,

    /// Two decimal places
    pub average_goals_scored: f64,

    /// Two decimal places
    pub average_goals_conceded: f64,

    /// e.g. "Won 3 (W-W-W-L-D)"
    pub current_streak: String,

    /// Roster size
    pub total_players: u32,

    pub announcements: Vec<String>,
}

/// One row of a player's match-by-match record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMatchHistory {
    pub match_id: MatchId,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub opponent_name: String,
    pub home_match: bool,
    pub goals: u32,
    pub assists: u32,
    pub passes: u32,
    pub saves: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(home_goals: u32, away_goals: u32, home_match: bool) -> TeamMatchView {
        TeamMatchView {
            match_id: None,
            date: None,
            time: None,
            venue: None,
            home_goals,
            away_goals,
            spectators: 0,
            opponent_name: "Opp".to_string(),
            home_match,
        }
    }

    #[test]
    fn test_view_perspective() {
        let away_win = view(0, 2, false);

        assert_eq!(away_win.team_goals(), 2);
        assert_eq!(away_win.opponent_goals(), 0);
        assert_eq!(away_win.outcome(), Outcome::Win);
        assert_eq!(view(1, 1, true).outcome(), Outcome::Draw);
        assert!(view(0, 0, true).is_goalless());
    }

    #[test]
    fn test_streak_display() {
        let streak = Streak {
            sequence: vec![Outcome::Win, Outcome::Win, Outcome::Loss],
            run_length: 2,
        };

        assert_eq!(streak.sequence_string(), "W-W-L");
        assert_eq!(streak.to_string(), "Won 2 (W-W-L)");
    }

    #[test]
    fn test_empty_streak_display() {
        let streak = Streak {
            sequence: vec![],
            run_length: 0,
        };
        assert_eq!(streak.to_string(), "No matches yet");
    }

    #[test]
    fn test_venue_summary_from_venue() {
        let venue = Venue::new("v", "Park Lane", 1200);
        let summary = VenueSummary::from(&venue);

        assert_eq!(summary.id, Some(VenueId::from("v")));
        assert_eq!(summary.capacity, 1200);
    }
}
