//! Venue attendance statistics.

use std::collections::HashMap;

use tracing::debug;

use super::{ratio, round_to};
use crate::models::{LeagueSnapshot, VenueId, VenueStats};

/// Match count, attendance and occupancy for every venue.
///
/// Venues that hosted nothing are included with zeros. Matches without a
/// venue, or at a venue missing from the snapshot, are ignored. Sorted by
/// total spectators, highest first.
pub fn venue_statistics(snapshot: &LeagueSnapshot) -> Vec<VenueStats> {
    let mut stats: Vec<VenueStats> = snapshot.venues.iter().map(VenueStats::empty).collect();
    let positions: HashMap<VenueId, usize> = stats
        .iter()
        .enumerate()
        .map(|(i, s)| (s.venue_id.clone(), i))
        .collect();

    for m in &snapshot.matches {
        let Some(&i) = m.venue_id.as_ref().and_then(|id| positions.get(id)) else {
            continue;
        };
        stats[i].total_matches += 1;
        stats[i].total_spectators += u64::from(m.spectators);
    }

    for s in &mut stats {
        let average = ratio(s.total_spectators as f64, f64::from(s.total_matches));
        let occupancy = ratio(average, f64::from(s.capacity)) * 100.0;
        s.average_attendance = round_to(average, 2);
        s.occupancy_rate = round_to(occupancy, 2);
    }

    stats.sort_by(|a, b| b.total_spectators.cmp(&a.total_spectators));

    debug!("Computed statistics for {} venues", stats.len());
    stats
}
