//! Team performance over time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use super::{AnalyticsError, EntityKind};
use crate::models::{DatePerformance, LeagueSnapshot, Outcome, TeamId};

/// One win/draw/loss bucket per match date, earliest first.
///
/// Matches on the same date share a bucket. Undated matches are skipped.
pub fn team_performance(
    snapshot: &LeagueSnapshot,
    team_id: &TeamId,
) -> Result<Vec<DatePerformance>, AnalyticsError> {
    if snapshot.team(team_id).is_none() {
        return Err(AnalyticsError::not_found(EntityKind::Team, team_id));
    }

    let mut buckets: BTreeMap<NaiveDate, DatePerformance> = BTreeMap::new();

    for m in snapshot.matches_for_team(team_id) {
        let (Some(date), Some(side)) = (m.date, m.side_of(team_id)) else {
            continue;
        };
        let (goals_for, goals_against) = m.goals_for_side(side);
        let bucket = buckets
            .entry(date)
            .or_insert_with(|| DatePerformance::new(date));

        match Outcome::from_goals(goals_for, goals_against) {
            Outcome::Win => bucket.wins += 1,
            Outcome::Draw => bucket.draws += 1,
            Outcome::Loss => bucket.losses += 1,
        }
    }

    debug!("Team {} has results on {} dates", team_id, buckets.len());

    Ok(buckets.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchRecord, Team};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> LeagueSnapshot {
        LeagueSnapshot {
            teams: vec![
                Team::new("a", "A"),
                Team::new("b", "B"),
                Team::new("c", "C"),
            ],
            matches: vec![
                MatchRecord::new("1", Some(date(2024, 3, 10)), "a", "b").with_score(1, 0),
                MatchRecord::new("2", Some(date(2024, 3, 3)), "b", "a").with_score(2, 2),
                MatchRecord::new("3", Some(date(2024, 3, 10)), "c", "a").with_score(3, 1),
                MatchRecord::new("4", None, "a", "c").with_score(5, 0),
                MatchRecord::new("5", Some(date(2024, 3, 3)), "b", "c").with_score(1, 0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_buckets_sorted_by_date() {
        let timeline = team_performance(&snapshot(), &"a".into()).unwrap();

        assert_eq!(
            timeline,
            vec![
                DatePerformance {
                    date: date(2024, 3, 3),
                    wins: 0,
                    losses: 0,
                    draws: 1,
                },
                DatePerformance {
                    date: date(2024, 3, 10),
                    wins: 1,
                    losses: 1,
                    draws: 0,
                },
            ]
        );
    }

    #[test]
    fn test_team_without_matches() {
        let mut s = snapshot();
        s.teams.push(Team::new("idle", "Idle"));

        assert!(team_performance(&s, &"idle".into()).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_team() {
        assert!(matches!(
            team_performance(&snapshot(), &"zz".into()),
            Err(AnalyticsError::NotFound { .. })
        ));
    }
}
