//! Team dashboard.
//!
//! Matches carry no "played" flag, so the dashboard infers whether a match
//! is upcoming from its date and score. A goalless match dated today or
//! later is treated as not yet played; anything dated before today, or any
//! match with goals, is treated as played. A real 0-0 draw on today's date
//! therefore shows as upcoming until the date passes.

use chrono::NaiveDate;
use tracing::debug;

use super::history::team_match_history;
use super::{calculate_win_percentage, ratio, round_to, AnalyticsError, EntityKind};
use crate::models::{
    DashboardSummary, LeagueSnapshot, MatchTiming, ResultTally, Streak, SupplementaryFixture,
    SupplementarySource, Team, TeamId, TeamMatchView,
};

const FALLBACK_TEAM_NAME: &str = "Team";

/// Default number of recent matches shown in the form guide.
pub const DEFAULT_STREAK_WINDOW: usize = 5;

/// Inputs that are not part of the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct DashboardOptions {
    /// Reference date for upcoming/past classification
    pub today: NaiveDate,
    /// How many recent matches feed the form guide
    pub streak_window: usize,
}

impl DashboardOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            streak_window: DEFAULT_STREAK_WINDOW,
        }
    }

    pub fn with_streak_window(mut self, window: usize) -> Self {
        self.streak_window = window;
        self
    }
}

/// Decide whether a dated match is upcoming or past.
///
/// Anything before `today` is past. From `today` on, a goalless match is
/// upcoming and a match with goals was played ahead of schedule.
pub fn classify_match(date: NaiveDate, goalless: bool, today: NaiveDate) -> MatchTiming {
    if date < today {
        MatchTiming::Past
    } else if goalless {
        MatchTiming::Upcoming
    } else {
        MatchTiming::Past
    }
}

/// Form guide over the first `window` matches of `past` (most recent first).
pub fn compute_streak(past: &[TeamMatchView], window: usize) -> Streak {
    let sequence: Vec<_> = past.iter().take(window).map(|m| m.outcome()).collect();
    let run_length = match sequence.first() {
        Some(latest) => sequence.iter().take_while(|o| *o == latest).count() as u32,
        None => 0,
    };

    Streak {
        sequence,
        run_length,
    }
}

fn fixture_view(fixture: SupplementaryFixture) -> TeamMatchView {
    TeamMatchView {
        match_id: None,
        date: Some(fixture.date),
        time: fixture.time,
        venue: fixture.venue,
        home_goals: 0,
        away_goals: 0,
        spectators: 0,
        opponent_name: fixture.opponent,
        home_match: fixture.home,
    }
}

fn sort_earliest_first(matches: &mut [TeamMatchView]) {
    matches.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
}

fn announcements(upcoming: usize, wins: u32, total: u32) -> Vec<String> {
    let mut lines = vec!["Welcome to your team dashboard!".to_string()];
    if upcoming > 0 {
        lines.push(format!("You have {} upcoming match(es).", upcoming));
    }
    if wins > 0 && total > 0 {
        lines.push(format!(
            "Your team has won {} out of {} matches!",
            wins, total
        ));
    }
    lines
}

/// Build the dashboard for a team.
pub fn build_dashboard(
    snapshot: &LeagueSnapshot,
    team_id: &TeamId,
    source: &dyn SupplementarySource,
    options: DashboardOptions,
) -> Result<DashboardSummary, AnalyticsError> {
    if options.streak_window == 0 {
        return Err(AnalyticsError::InvalidInput(
            "streak window must be greater than 0".to_string(),
        ));
    }

    // history also reports unknown teams
    let history = team_match_history(snapshot, team_id)?;
    let team: &Team = snapshot
        .team(team_id)
        .ok_or_else(|| AnalyticsError::not_found(EntityKind::Team, team_id))?;

    let mut upcoming = Vec::new();
    let mut past = Vec::new();
    for view in history {
        let Some(date) = view.date else {
            continue;
        };
        match classify_match(date, view.is_goalless(), options.today) {
            MatchTiming::Upcoming => upcoming.push(view),
            MatchTiming::Past => past.push(view),
        }
    }

    upcoming.extend(
        source
            .fixtures()
            .into_iter()
            .filter(|f| team.is_known_as(&f.team))
            .map(fixture_view),
    );
    sort_earliest_first(&mut upcoming);

    let mut tally = ResultTally::default();
    for m in &past {
        tally.record(m.team_goals(), m.opponent_goals());
    }
    let total = tally.played();
    let streak = compute_streak(&past, options.streak_window);

    debug!(
        "Dashboard for {}: {} upcoming, {} past",
        team_id,
        upcoming.len(),
        past.len()
    );

    Ok(DashboardSummary {
        team_id: team.id.clone(),
        team_name: team.display_name(FALLBACK_TEAM_NAME).to_string(),
        total_matches: total,
        wins: tally.wins,
        losses: tally.losses,
        draws: tally.draws,
        goals_scored: tally.goals_for,
        goals_conceded: tally.goals_against,
        points: tally.points(),
        win_percentage: round_to(calculate_win_percentage(tally.wins, total), 1),
        average_goals_scored: round_to(ratio(f64::from(tally.goals_for), f64::from(total)), 2),
        average_goals_conceded: round_to(
            ratio(f64::from(tally.goals_against), f64::from(total)),
            2,
        ),
        current_streak: streak.to_string(),
        total_players: snapshot.players_on_team(team_id).count() as u32,
        announcements: announcements(upcoming.len(), tally.wins, total),
        upcoming_matches: upcoming,
        past_matches: past,
    })
}
