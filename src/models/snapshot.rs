//! Immutable snapshot of league records handed to the calculators.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{
    Division, DivisionId, MatchId, MatchRecord, Player, PlayerId, PlayerStatRecord, Team, TeamId,
    Venue, VenueId,
};

/// All records in scope for one request.
///
/// Relations are plain id references; the collaborator that builds a
/// snapshot is expected to supply every record those ids point at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub divisions: Vec<Division>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    #[serde(default)]
    pub player_stats: Vec<PlayerStatRecord>,
}

impl LeagueSnapshot {
    pub fn division(&self, id: &DivisionId) -> Option<&Division> {
        self.divisions.iter().find(|d| &d.id == id)
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    pub fn venue(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| &v.id == id)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// First team known by `key` as either name or alias.
    pub fn team_by_name_or_alias(&self, key: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.is_known_as(key))
    }

    /// Teams belonging to a division, in snapshot order.
    pub fn teams_in_division<'a>(
        &'a self,
        division_id: &'a DivisionId,
    ) -> impl Iterator<Item = &'a Team> + 'a {
        self.teams
            .iter()
            .filter(move |t| t.division_id.as_ref() == Some(division_id))
    }

    /// Players currently registered to a team.
    pub fn players_on_team<'a>(
        &'a self,
        team_id: &'a TeamId,
    ) -> impl Iterator<Item = &'a Player> + 'a {
        self.players
            .iter()
            .filter(move |p| p.team_id.as_ref() == Some(team_id))
    }

    /// Matches the team played at home, in snapshot order.
    pub fn home_matches<'a>(
        &'a self,
        team_id: &'a TeamId,
    ) -> impl Iterator<Item = &'a MatchRecord> + 'a {
        self.matches
            .iter()
            .filter(move |m| &m.home_team_id == team_id)
    }

    /// Matches the team played away, in snapshot order.
    pub fn away_matches<'a>(
        &'a self,
        team_id: &'a TeamId,
    ) -> impl Iterator<Item = &'a MatchRecord> + 'a {
        self.matches
            .iter()
            .filter(move |m| &m.away_team_id == team_id)
    }

    /// Home matches followed by away matches.
    pub fn matches_for_team<'a>(
        &'a self,
        team_id: &'a TeamId,
    ) -> impl Iterator<Item = &'a MatchRecord> + 'a {
        self.home_matches(team_id).chain(self.away_matches(team_id))
    }

    /// Matches keyed by id.
    pub fn match_index(&self) -> HashMap<&MatchId, &MatchRecord> {
        self.matches.iter().map(|m| (&m.id, m)).collect()
    }

    /// Players keyed by id.
    pub fn player_index(&self) -> HashMap<&PlayerId, &Player> {
        self.players.iter().map(|p| (&p.id, p)).collect()
    }

    /// Teams keyed by id.
    pub fn team_index(&self) -> HashMap<&TeamId, &Team> {
        self.teams.iter().map(|t| (&t.id, t)).collect()
    }
}
