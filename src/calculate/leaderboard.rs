//! Goal and assist leaderboards.
//!
//! Per-match statistic records are summed per player, merged with rows
//! from the supplementary source, deduplicated by player and ranked.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    EntrySource, LeaderboardEntry, LeaderboardMetric, LeagueSnapshot, PlayerId,
    SupplementaryLeaderRow, SupplementarySource,
};

const UNKNOWN_PLAYER: &str = "Unknown";
const UNKNOWN_TEAM: &str = "Unknown Team";

/// Sum a metric per player across all statistic records.
///
/// Entries come out in the order each player is first seen. Records for
/// players missing from the snapshot are skipped.
pub fn computed_entries(
    snapshot: &LeagueSnapshot,
    metric: LeaderboardMetric,
) -> Vec<LeaderboardEntry> {
    let players = snapshot.player_index();
    let teams = snapshot.team_index();

    let mut order: Vec<&PlayerId> = Vec::new();
    let mut totals: HashMap<&PlayerId, (u32, u32)> = HashMap::new();

    for stat in &snapshot.player_stats {
        if !players.contains_key(&stat.player_id) {
            debug!("Skipping stat record for unknown player {}", stat.player_id);
            continue;
        }
        let slot = totals.entry(&stat.player_id).or_insert_with(|| {
            order.push(&stat.player_id);
            (0, 0)
        });
        slot.0 += metric.value_of(stat);
        slot.1 += 1;
    }

    order
        .into_iter()
        .filter_map(|player_id| {
            let player = players.get(player_id)?;
            let (total, matches_played) = totals.get(player_id).copied()?;
            let team = player.team_id.as_ref().and_then(|id| teams.get(id));

            Some(LeaderboardEntry {
                player_id: player.id.clone(),
                player_name: player.display_name(UNKNOWN_PLAYER).to_string(),
                team_id: team.map(|t| t.id.clone()),
                team_name: team
                    .map(|t| t.display_name(UNKNOWN_TEAM).to_string())
                    .unwrap_or_else(|| UNKNOWN_TEAM.to_string()),
                metric,
                total,
                matches_played,
                source: EntrySource::Computed,
            })
        })
        .collect()
}

/// Resolve supplementary rows to real players.
///
/// A row's team is looked up by name or alias and its player by exact name
/// within that team's roster. Rows that do not resolve are dropped.
pub fn resolve_supplementary(
    snapshot: &LeagueSnapshot,
    metric: LeaderboardMetric,
    rows: &[SupplementaryLeaderRow],
) -> Vec<LeaderboardEntry> {
    let mut resolved = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(team) = snapshot.team_by_name_or_alias(&row.team) else {
            debug!("Dropping supplementary row: no team named {:?}", row.team);
            continue;
        };
        let Some(player) = snapshot
            .players_on_team(&team.id)
            .find(|p| p.name == row.player)
        else {
            debug!(
                "Dropping supplementary row: no player {:?} on {:?}",
                row.player, row.team
            );
            continue;
        };

        resolved.push(LeaderboardEntry {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            team_id: Some(team.id.clone()),
            team_name: team.display_name(UNKNOWN_TEAM).to_string(),
            metric,
            total: row.value,
            matches_played: row.matches_played,
            source: EntrySource::Supplementary,
        });
    }

    if resolved.len() < rows.len() {
        debug!(
            "Resolved {} of {} supplementary {} rows",
            resolved.len(),
            rows.len(),
            metric
        );
    }

    resolved
}

/// Keep one entry per player.
///
/// A later entry replaces an earlier one only when it
/// [supersedes](LeaderboardEntry::supersedes) it. Output keeps the position
/// of each player's first appearance.
pub fn merge_entries(entries: impl IntoIterator<Item = LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    let mut merged: Vec<LeaderboardEntry> = Vec::new();
    let mut positions: HashMap<PlayerId, usize> = HashMap::new();

    for entry in entries {
        match positions.get(&entry.player_id) {
            Some(&i) => {
                if entry.supersedes(&merged[i]) {
                    merged[i] = entry;
                }
            }
            None => {
                positions.insert(entry.player_id.clone(), merged.len());
                merged.push(entry);
            }
        }
    }

    merged
}

/// Sort descending by total (stable) and truncate. A non-positive limit
/// keeps every entry.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>, limit: i64) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.total.cmp(&a.total));
    if limit > 0 {
        entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    entries
}

/// Ranked leaderboard for a metric.
pub fn leaderboard(
    snapshot: &LeagueSnapshot,
    metric: LeaderboardMetric,
    source: &dyn SupplementarySource,
    limit: i64,
) -> Vec<LeaderboardEntry> {
    let computed = computed_entries(snapshot, metric);
    let supplementary = resolve_supplementary(snapshot, metric, &source.leaderboard_rows(metric));

    debug!(
        "Merging {} computed and {} supplementary {} entries",
        computed.len(),
        supplementary.len(),
        metric
    );

    let merged = merge_entries(computed.into_iter().chain(supplementary));
    rank_entries(merged, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchRecord, Player, PlayerStatRecord, SupplementaryTable, Team};
    use pretty_assertions::assert_eq;

    fn stat(match_id: &str, player: &str, goals: u32, assists: u32) -> PlayerStatRecord {
        PlayerStatRecord::new(match_id, player).with_goals_and_assists(goals, assists)
    }

    fn row(team: &str, player: &str, value: u32, matches_played: u32) -> SupplementaryLeaderRow {
        SupplementaryLeaderRow {
            team: team.to_string(),
            player: player.to_string(),
            value,
            matches_played,
        }
    }

    fn snapshot() -> LeagueSnapshot {
        LeagueSnapshot {
            teams: vec![
                Team::new("t1", "Harbour FC").with_alias("harbourfc"),
                Team::new("t2", "Rovers"),
            ],
            players: vec![
                Player::new("p1", "Ada").with_team("t1"),
                Player::new("p2", "Bo").with_team("t2"),
                Player::new("p3", "Cy"),
            ],
            matches: vec![
                MatchRecord::new("m1", None, "t1", "t2"),
                MatchRecord::new("m2", None, "t2", "t1"),
            ],
            player_stats: vec![
                stat("m1", "p1", 2, 0),
                stat("m1", "p2", 1, 1),
                stat("m2", "p1", 1, 2),
                stat("m2", "p3", 0, 1),
                stat("m2", "ghost", 9, 9),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_computed_goals() {
        let entries = computed_entries(&snapshot(), LeaderboardMetric::Goals);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].player_id.as_str(), "p1");
        assert_eq!(entries[0].total, 3);
        assert_eq!(entries[0].matches_played, 2);
        assert_eq!(entries[0].team_name, "Harbour FC");
    }

    #[test]
    fn test_computed_player_without_team() {
        let entries = computed_entries(&snapshot(), LeaderboardMetric::Assists);
        let cy = entries
            .iter()
            .find(|e| e.player_id.as_str() == "p3")
            .unwrap();

        assert_eq!(cy.team_name, "Unknown Team");
        assert!(cy.team_id.is_none());
        assert_eq!(cy.total, 1);
    }

    #[test]
    fn test_tie_on_total_keeps_more_matches() {
        let mut s = snapshot();
        s.player_stats = vec![
            stat("m1", "p1", 5, 0),
            stat("m2", "p1", 0, 0),
            stat("m3", "p1", 0, 0),
            stat("m4", "p1", 0, 0),
        ];
        let table = SupplementaryTable {
            scorers: vec![row("Harbour FC", "Ada", 5, 6)],
            ..Default::default()
        };

        let board = leaderboard(&s, LeaderboardMetric::Goals, &table, 0);

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].total, 5);
        assert_eq!(board[0].matches_played, 6);
        assert_eq!(board[0].source, EntrySource::Supplementary);
    }

    #[test]
    fn test_higher_total_wins_merge() {
        let table = SupplementaryTable {
            scorers: vec![row("harbourfc", "Ada", 2, 20)],
            ..Default::default()
        };

        let board = leaderboard(&snapshot(), LeaderboardMetric::Goals, &table, 0);
        let ada = board.iter().find(|e| e.player_id.as_str() == "p1").unwrap();

        assert_eq!(ada.total, 3);
        assert_eq!(ada.source, EntrySource::Computed);
    }

    #[test]
    fn test_supplementary_only_player_included() {
        let mut s = snapshot();
        s.players.push(Player::new("p4", "Dee").with_team("t2"));
        let table = SupplementaryTable {
            scorers: vec![row("Rovers", "Dee", 10, 8)],
            ..Default::default()
        };

        let board = leaderboard(&s, LeaderboardMetric::Goals, &table, 0);

        assert_eq!(board[0].player_id.as_str(), "p4");
        assert_eq!(board[0].team_id.as_ref().map(|t| t.as_str()), Some("t2"));
    }

    #[test]
    fn test_unresolvable_rows_dropped() {
        let rows = vec![
            row("Nobody United", "Ada", 50, 1),
            row("Rovers", "Ada", 50, 1),
        ];

        let resolved = resolve_supplementary(&snapshot(), LeaderboardMetric::Goals, &rows);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_merge_idempotent() {
        let table = SupplementaryTable {
            scorers: vec![row("Harbour FC", "Ada", 7, 3), row("Rovers", "Bo", 1, 5)],
            ..Default::default()
        };
        let s = snapshot();

        let once = leaderboard(&s, LeaderboardMetric::Goals, &table, 0);

        let computed = computed_entries(&s, LeaderboardMetric::Goals);
        let supp = resolve_supplementary(&s, LeaderboardMetric::Goals, &table.scorers);
        let twice = rank_entries(
            merge_entries(computed.into_iter().chain(supp.clone()).chain(supp)),
            0,
        );

        assert_eq!(once, twice);
    }

    #[test]
    fn test_ranking_and_limit() {
        let s = snapshot();
        let none = SupplementaryTable::default();

        let all = leaderboard(&s, LeaderboardMetric::Goals, &none, -1);
        let totals: Vec<u32> = all.iter().map(|e| e.total).collect();
        assert_eq!(totals, vec![3, 1, 0]);

        let top = leaderboard(&s, LeaderboardMetric::Goals, &none, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].player_id.as_str(), "p2");
    }

    #[test]
    fn test_equal_totals_keep_encounter_order() {
        let s = snapshot();
        let none = SupplementaryTable::default();
        let board = leaderboard(&s, LeaderboardMetric::Assists, &none, 0);
        let ids: Vec<_> = board.iter().map(|e| e.player_id.as_str()).collect();

        // p1: 2, p2: 1, p3: 1 -> p2 seen before p3
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }
}
