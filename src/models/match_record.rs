//! Match and per-player statistic records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{MatchId, PlayerId, TeamId, VenueId};

/// Which side of a fixture a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Result of a match from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Classify a scoreline from the perspective of the side scoring `goals_for`.
    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Single-letter form used in form guides.
    pub fn letter(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }

    /// Past-tense verb used when describing a run of results.
    pub fn verb(&self) -> &'static str {
        match self {
            Outcome::Win => "Won",
            Outcome::Draw => "Drew",
            Outcome::Loss => "Lost",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Running win/draw/loss and goal tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTally {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl ResultTally {
    /// Add one match, returning its outcome.
    pub fn record(&mut self, goals_for: u32, goals_against: u32) -> Outcome {
        self.goals_for += goals_for;
        self.goals_against += goals_against;

        let outcome = Outcome::from_goals(goals_for, goals_against);
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
        outcome
    }

    /// Total matches recorded.
    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Three points for a win, one for a draw.
    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// A scheduled or played fixture between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier
    pub id: MatchId,

    /// Kick-off date; unscheduled fixtures may lack one
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Kick-off time
    #[serde(default)]
    pub time: Option<NaiveTime>,

    pub home_team_id: TeamId,

    pub away_team_id: TeamId,

    #[serde(default)]
    pub home_goals: u32,

    #[serde(default)]
    pub away_goals: u32,

    /// Stadium the match was played at
    #[serde(default)]
    pub venue_id: Option<VenueId>,

    /// Attendance
    #[serde(default)]
    pub spectators: u32,

    /// Gate revenue
    #[serde(default)]
    pub revenue: f64,
}

impl MatchRecord {
    /// Create a new match with a 0-0 score and no venue.
    pub fn new(
        id: impl Into<MatchId>,
        date: Option<NaiveDate>,
        home_team_id: impl Into<TeamId>,
        away_team_id: impl Into<TeamId>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            time: None,
            home_team_id: home_team_id.into(),
            away_team_id: away_team_id.into(),
            home_goals: 0,
            away_goals: 0,
            venue_id: None,
            spectators: 0,
            revenue: 0.0,
        }
    }

    /// Builder method to set the score.
    pub fn with_score(mut self, home_goals: u32, away_goals: u32) -> Self {
        self.home_goals = home_goals;
        self.away_goals = away_goals;
        self
    }

    /// Builder method to set the kick-off time.
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Builder method to set venue and attendance.
    pub fn at_venue(mut self, venue_id: impl Into<VenueId>, spectators: u32) -> Self {
        self.venue_id = Some(venue_id.into());
        self.spectators = spectators;
        self
    }

    /// The side `team` played on, if it took part.
    pub fn side_of(&self, team: &TeamId) -> Option<Side> {
        if &self.home_team_id == team {
            Some(Side::Home)
        } else if &self.away_team_id == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        self.side_of(team).is_some()
    }

    /// Goals (for, against) from the given side's perspective.
    pub fn goals_for_side(&self, side: Side) -> (u32, u32) {
        match side {
            Side::Home => (self.home_goals, self.away_goals),
            Side::Away => (self.away_goals, self.home_goals),
        }
    }

    /// The opposing team for the given side.
    pub fn opponent_of(&self, side: Side) -> &TeamId {
        match side {
            Side::Home => &self.away_team_id,
            Side::Away => &self.home_team_id,
        }
    }

    /// Neither side has scored.
    pub fn is_goalless(&self) -> bool {
        self.home_goals == 0 && self.away_goals == 0
    }
}

/// One player's contribution to one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatRecord {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub passes: u32,
    #[serde(default)]
    pub saves: u32,
}

impl PlayerStatRecord {
    pub fn new(match_id: impl Into<MatchId>, player_id: impl Into<PlayerId>) -> Self {
        Self {
            match_id: match_id.into(),
            player_id: player_id.into(),
            goals: 0,
            assists: 0,
            passes: 0,
            saves: 0,
        }
    }

    /// Builder method to set goals and assists.
    pub fn with_goals_and_assists(mut self, goals: u32, assists: u32) -> Self {
        self.goals = goals;
        self.assists = assists;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_outcome_from_goals() {
        assert_eq!(Outcome::from_goals(2, 1), Outcome::Win);
        assert_eq!(Outcome::from_goals(1, 1), Outcome::Draw);
        assert_eq!(Outcome::from_goals(0, 3), Outcome::Loss);
    }

    #[test]
    fn test_outcome_letters_and_verbs() {
        assert_eq!(Outcome::Win.letter(), 'W');
        assert_eq!(Outcome::Loss.verb(), "Lost");
        assert_eq!(format!("{}", Outcome::Draw), "D");
    }

    #[test]
    fn test_result_tally_points_and_difference() {
        let mut tally = ResultTally::default();
        tally.record(2, 1);
        tally.record(0, 0);
        tally.record(1, 4);

        assert_eq!(tally.played(), 3);
        assert_eq!(tally.points(), 4);
        assert_eq!(tally.goals_for, 3);
        assert_eq!(tally.goals_against, 5);
        assert_eq!(tally.goal_difference(), -2);
    }

    #[test]
    fn test_match_perspective() {
        let m = MatchRecord::new("m1", date(2024, 1, 1), "a", "b").with_score(3, 1);
        let a = TeamId::from("a");
        let b = TeamId::from("b");
        let c = TeamId::from("c");

        assert_eq!(m.side_of(&a), Some(Side::Home));
        assert_eq!(m.side_of(&b), Some(Side::Away));
        assert_eq!(m.side_of(&c), None);
        assert_eq!(m.goals_for_side(Side::Away), (1, 3));
        assert_eq!(m.opponent_of(Side::Away), &a);
        assert!(!m.is_goalless());
    }

    #[test]
    fn test_match_deserializes_with_defaults() {
        let json = r#"{"id":"m9","date":"2024-03-02","home_team_id":"1","away_team_id":"2"}"#;
        let m: MatchRecord = serde_json::from_str(json).unwrap();

        assert_eq!(m.date, date(2024, 3, 2));
        assert!(m.time.is_none());
        assert!(m.is_goalless());
        assert_eq!(m.spectators, 0);
    }
}
