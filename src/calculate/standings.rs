//! Division standings.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::debug;

use super::{AnalyticsError, EntityKind};
use crate::models::{
    Division, DivisionId, DivisionStandings, LeagueSnapshot, ResultTally, StandingEntry, Team,
    TeamId,
};

/// Ranking order: points, then goal difference, then goals for, all descending.
///
/// Entries equal on all three compare equal so a stable sort keeps them in
/// the order they were supplied.
pub fn compare_standings(a: &StandingEntry, b: &StandingEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.goal_difference.cmp(&a.goal_difference))
        .then(b.goals_for.cmp(&a.goals_for))
}

/// Accumulate a team's home then away results.
fn tally_team(snapshot: &LeagueSnapshot, team_id: &TeamId) -> ResultTally {
    let mut tally = ResultTally::default();

    for m in snapshot.home_matches(team_id) {
        tally.record(m.home_goals, m.away_goals);
    }
    for m in snapshot.away_matches(team_id) {
        tally.record(m.away_goals, m.home_goals);
    }

    tally
}

fn standing_for(snapshot: &LeagueSnapshot, team: &Team) -> StandingEntry {
    let division = team
        .division_id
        .as_ref()
        .and_then(|id| snapshot.division(id));
    StandingEntry::from_tally(team, division, &tally_team(snapshot, &team.id))
}

/// Standings row for a single team.
pub fn team_standing(
    snapshot: &LeagueSnapshot,
    team_id: &TeamId,
) -> Result<StandingEntry, AnalyticsError> {
    let team = snapshot
        .team(team_id)
        .ok_or_else(|| AnalyticsError::not_found(EntityKind::Team, team_id))?;
    Ok(standing_for(snapshot, team))
}

fn build_table(
    snapshot: &LeagueSnapshot,
    division_id: &DivisionId,
    name: &str,
) -> DivisionStandings {
    let mut entries: Vec<StandingEntry> = snapshot
        .teams_in_division(division_id)
        .map(|team| standing_for(snapshot, team))
        .collect();

    // sort_by is stable
    entries.sort_by(compare_standings);

    debug!("Ranked {} teams in division {}", entries.len(), division_id);

    DivisionStandings {
        division_id: division_id.clone(),
        division_name: name.to_string(),
        entries,
    }
}

/// Ranked table for one division. Teams without matches appear with zeros.
pub fn division_standings(
    snapshot: &LeagueSnapshot,
    division_id: &DivisionId,
) -> Result<DivisionStandings, AnalyticsError> {
    let division: &Division = snapshot
        .division(division_id)
        .ok_or_else(|| AnalyticsError::not_found(EntityKind::Division, division_id))?;
    Ok(build_table(snapshot, division_id, &division.name))
}

/// Ranked tables for every division that has at least one team.
///
/// Divisions are computed in parallel and returned in ascending id order.
/// Teams without a division are left out.
pub fn all_standings(snapshot: &LeagueSnapshot) -> Vec<DivisionStandings> {
    let division_ids: BTreeSet<&DivisionId> = snapshot
        .teams
        .iter()
        .filter_map(|t| t.division_id.as_ref())
        .collect();
    let division_ids: Vec<&DivisionId> = division_ids.into_iter().collect();

    division_ids
        .par_iter()
        .map(|id| {
            let name = snapshot
                .division(id)
                .map(|d| d.name.as_str())
                .unwrap_or_default();
            build_table(snapshot, id, name)
        })
        .collect()
}
