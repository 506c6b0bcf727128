//! Team and player match histories, most recent first.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};

use super::{AnalyticsError, EntityKind};
use crate::models::{
    LeagueSnapshot, MatchRecord, PlayerId, PlayerMatchHistory, Side, TeamId, TeamMatchView,
    VenueSummary,
};

const UNKNOWN_OPPONENT: &str = "Unknown";

/// Descending by date, then time. Undated rows sort last.
pub(crate) fn most_recent_first(
    a: (Option<NaiveDate>, Option<NaiveTime>),
    b: (Option<NaiveDate>, Option<NaiveTime>),
) -> Ordering {
    b.0.cmp(&a.0).then(b.1.cmp(&a.1))
}

fn opponent_name(snapshot: &LeagueSnapshot, m: &MatchRecord, side: Side) -> String {
    snapshot
        .team(m.opponent_of(side))
        .map(|t| t.display_name(UNKNOWN_OPPONENT).to_string())
        .unwrap_or_else(|| UNKNOWN_OPPONENT.to_string())
}

/// Build a team-perspective view of a match.
pub fn match_view(snapshot: &LeagueSnapshot, m: &MatchRecord, side: Side) -> TeamMatchView {
    TeamMatchView {
        match_id: Some(m.id.clone()),
        date: m.date,
        time: m.time,
        venue: m
            .venue_id
            .as_ref()
            .and_then(|id| snapshot.venue(id))
            .map(VenueSummary::from),
        home_goals: m.home_goals,
        away_goals: m.away_goals,
        spectators: m.spectators,
        opponent_name: opponent_name(snapshot, m, side),
        home_match: side == Side::Home,
    }
}

/// Every match the team played, home or away, most recent first.
pub fn team_match_history(
    snapshot: &LeagueSnapshot,
    team_id: &TeamId,
) -> Result<Vec<TeamMatchView>, AnalyticsError> {
    if snapshot.team(team_id).is_none() {
        return Err(AnalyticsError::not_found(EntityKind::Team, team_id));
    }

    let mut history: Vec<TeamMatchView> = snapshot
        .home_matches(team_id)
        .map(|m| match_view(snapshot, m, Side::Home))
        .chain(
            snapshot
                .away_matches(team_id)
                .map(|m| match_view(snapshot, m, Side::Away)),
        )
        .collect();

    history.sort_by(|a, b| most_recent_first((a.date, a.time), (b.date, b.time)));
    Ok(history)
}

/// A player's per-match statistics, most recent first.
///
/// Unattached players have no history. Records for matches that did not
/// involve the player's current team are left out.
pub fn player_history(
    snapshot: &LeagueSnapshot,
    player_id: &PlayerId,
) -> Result<Vec<PlayerMatchHistory>, AnalyticsError> {
    let player = snapshot
        .player(player_id)
        .ok_or_else(|| AnalyticsError::not_found(EntityKind::Player, player_id))?;

    let Some(team_id) = player.team_id.as_ref() else {
        return Ok(Vec::new());
    };

    let matches = snapshot.match_index();
    let mut history: Vec<PlayerMatchHistory> = snapshot
        .player_stats
        .iter()
        .filter(|s| &s.player_id == player_id)
        .filter_map(|s| {
            let m = matches.get(&s.match_id)?;
            let side = m.side_of(team_id)?;
            Some(PlayerMatchHistory {
                match_id: m.id.clone(),
                date: m.date,
                time: m.time,
                opponent_name: opponent_name(snapshot, m, side),
                home_match: side == Side::Home,
                goals: s.goals,
                assists: s.assists,
                passes: s.passes,
                saves: s.saves,
            })
        })
        .collect();

    history.sort_by(|a, b| most_recent_first((a.date, a.time), (b.date, b.time)));
    Ok(history)
}
