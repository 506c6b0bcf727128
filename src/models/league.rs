//! League reference data: divisions, teams, venues and players.

use serde::{Deserialize, Serialize};

use super::{DivisionId, PlayerId, TeamId, VenueId};

/// A grouping of teams sharing a standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: DivisionId,
    pub name: String,
}

impl Division {
    pub fn new(id: impl Into<DivisionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A team in the league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    pub id: TeamId,

    /// Display name; may be blank for teams that registered without one
    #[serde(default)]
    pub name: String,

    /// Alternate handle the team is known by (e.g. its login name)
    #[serde(default)]
    pub alias: Option<String>,

    /// Division the team competes in
    #[serde(default)]
    pub division_id: Option<DivisionId>,

    /// Home venue
    #[serde(default)]
    pub venue_id: Option<VenueId>,
}

impl Team {
    /// Create a new Team with no division or venue.
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            alias: None,
            division_id: None,
            venue_id: None,
        }
    }

    /// Builder method to set the division.
    pub fn with_division(mut self, division_id: impl Into<DivisionId>) -> Self {
        self.division_id = Some(division_id.into());
        self
    }

    /// Builder method to set the home venue.
    pub fn with_venue(mut self, venue_id: impl Into<VenueId>) -> Self {
        self.venue_id = Some(venue_id.into());
        self
    }

    /// Builder method to set the alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Name for display, falling back when the team has none.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(&self.name).unwrap_or(fallback)
    }

    /// Whether `key` refers to this team by name or alias.
    pub fn is_known_as(&self, key: &str) -> bool {
        let alias = self.alias.as_deref().and_then(non_blank);
        non_blank(&self.name) == Some(key) || alias == Some(key)
    }
}

/// A stadium where matches are played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}

impl Venue {
    pub fn new(id: impl Into<VenueId>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
        }
    }
}

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    #[serde(default)]
    pub name: String,

    /// e.g. "Forward", "Midfielder", "Defender", "Goalkeeper"
    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub jersey_number: Option<u32>,

    /// Current team; players may be unattached
    #[serde(default)]
    pub team_id: Option<TeamId>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: None,
            jersey_number: None,
            team_id: None,
        }
    }

    /// Builder method to set the team.
    pub fn with_team(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Builder method to set the position.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Name for display, falling back when the player has none.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(&self.name).unwrap_or(fallback)
    }
}

/// Returns the string unless it is empty or whitespace.
fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_display_name_fallback() {
        let named = Team::new("1", "Harbour FC");
        let unnamed = Team::new("2", "  ");

        assert_eq!(named.display_name("Team"), "Harbour FC");
        assert_eq!(unnamed.display_name("Team"), "Team");
    }

    #[test]
    fn test_team_is_known_as_name_or_alias() {
        let team = Team::new("1", "Harbour FC").with_alias("harbourfc");

        assert!(team.is_known_as("Harbour FC"));
        assert!(team.is_known_as("harbourfc"));
        assert!(!team.is_known_as("harbour fc"));
    }

    #[test]
    fn test_unnamed_team_never_matches_empty_key() {
        let team = Team::new("1", "");
        assert!(!team.is_known_as(""));
    }

    #[test]
    fn test_blank_name_and_alias_never_match() {
        let whitespace = Team::new("1", "  ");
        assert!(!whitespace.is_known_as("  "));

        let empty_alias = Team::new("2", "Rovers").with_alias("");
        assert!(!empty_alias.is_known_as(""));
        assert!(empty_alias.is_known_as("Rovers"));

        let blank_alias = Team::new("3", "").with_alias(" ");
        assert!(!blank_alias.is_known_as(" "));
    }

    #[test]
    fn test_team_deserializes_with_missing_optionals() {
        let team: Team = serde_json::from_str(r#"{"id":"5","name":"Rovers"}"#).unwrap();

        assert_eq!(team.id.as_str(), "5");
        assert!(team.division_id.is_none());
        assert!(team.alias.is_none());
    }

    #[test]
    fn test_player_builder() {
        let player = Player::new("p1", "Ada")
            .with_team("t1")
            .with_position("Forward");

        assert_eq!(player.team_id, Some(TeamId::from("t1")));
        assert_eq!(player.position.as_deref(), Some("Forward"));
    }
}
