//! Match search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AnalyticsError;
use crate::models::{DivisionId, LeagueSnapshot, MatchRecord, TeamId, VenueId};

/// Criteria for [`filter_matches`]. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFilter {
    /// Either side belongs to this division
    pub division_id: Option<DivisionId>,
    pub venue_id: Option<VenueId>,
    /// Team played home or away
    pub team_id: Option<TeamId>,
    /// Inclusive lower bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub end_date: Option<NaiveDate>,
}

impl MatchFilter {
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(AnalyticsError::InvalidInput(format!(
                    "start date {} is after end date {}",
                    start, end
                )));
            }
        }
        Ok(())
    }

    fn in_date_range(&self, date: Option<NaiveDate>) -> bool {
        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.start_date.map_or(true, |start| date >= start)
            && self.end_date.map_or(true, |end| date <= end)
    }

    fn in_division(&self, snapshot: &LeagueSnapshot, m: &MatchRecord) -> bool {
        let Some(division_id) = &self.division_id else {
            return true;
        };
        [&m.home_team_id, &m.away_team_id].into_iter().any(|id| {
            snapshot
                .team(id)
                .is_some_and(|t| t.division_id.as_ref() == Some(division_id))
        })
    }
}

/// Matches satisfying every criterion, in snapshot order.
pub fn filter_matches(
    snapshot: &LeagueSnapshot,
    filter: &MatchFilter,
) -> Result<Vec<MatchRecord>, AnalyticsError> {
    filter.validate()?;

    let matches: Vec<MatchRecord> = snapshot
        .matches
        .iter()
        .filter(|m| {
            filter
                .venue_id
                .as_ref()
                .map_or(true, |v| m.venue_id.as_ref() == Some(v))
        })
        .filter(|m| filter.team_id.as_ref().map_or(true, |t| m.involves(t)))
        .filter(|m| filter.in_date_range(m.date))
        .filter(|m| filter.in_division(snapshot, m))
        .cloned()
        .collect();

    debug!(
        "Filter matched {} of {} matches",
        matches.len(),
        snapshot.matches.len()
    );

    Ok(matches)
}
