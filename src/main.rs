use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_analytics::calculate::{
    all_standings, build_dashboard, division_standings, filter_matches, leaderboard,
    player_history, team_match_history, team_performance, venue_statistics, AnalyticsError,
    DashboardOptions, MatchFilter,
};
use league_analytics::config::AppConfig;
use league_analytics::models::LeaderboardMetric;
use league_analytics::parse_date;
use league_analytics::storage::{load_snapshot, StorageConfig};

#[derive(Parser)]
#[command(name = "league-analytics")]
#[command(about = "Standings, leaderboards and dashboards for a sports league")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Snapshot directory (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides config
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Division standings (all divisions when none is given)
    Standings {
        #[arg(long)]
        division: Option<String>,
    },

    /// Top scorers or assist providers
    Leaderboard {
        /// goals or assists
        #[arg(long)]
        metric: String,

        /// Maximum entries; 0 or less returns all
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Wins, draws and losses per match date
    Timeline {
        #[arg(long)]
        team: String,
    },

    /// Attendance and occupancy per venue
    Venues,

    /// Team dashboard
    Dashboard {
        #[arg(long)]
        team: String,

        /// Reference date (YYYY-MM-DD); defaults to config or the system date
        #[arg(long)]
        today: Option<String>,
    },

    /// A team's matches, most recent first
    History {
        #[arg(long)]
        team: String,
    },

    /// A player's per-match statistics
    PlayerHistory {
        #[arg(long)]
        player: String,
    },

    /// Search matches
    Matches {
        #[arg(long)]
        division: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(long)]
        team: Option<String>,

        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

fn date_arg(flag: &str, value: &str) -> Result<NaiveDate, AnalyticsError> {
    parse_date(value).ok_or_else(|| {
        AnalyticsError::InvalidInput(format!(
            "Invalid --{} date (expected YYYY-MM-DD): {}",
            flag, value
        ))
    })
}

fn optional_date_arg(
    flag: &str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, AnalyticsError> {
    value.map(|v| date_arg(flag, &v)).transpose()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(log_level, cli.json_logs);

    tracing::info!("Starting league-analytics v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = cli.data_dir.as_ref().unwrap_or(&config.data_dir);
    let storage = StorageConfig::new(data_dir.clone());
    let snapshot = load_snapshot(&storage)
        .with_context(|| format!("Failed to load {:?}", storage.data_dir))?;

    match cli.command {
        Commands::Standings { division } => match division {
            Some(id) => print_json(&division_standings(&snapshot, &id.into())?)?,
            None => print_json(&all_standings(&snapshot))?,
        },

        Commands::Leaderboard { metric, limit } => {
            let metric: LeaderboardMetric = metric.parse().map_err(AnalyticsError::InvalidInput)?;
            let source = config.supplementary_table()?;
            let limit = limit.unwrap_or(config.leaderboard.default_limit);

            print_json(&leaderboard(&snapshot, metric, &source, limit))?;
        }

        Commands::Timeline { team } => {
            print_json(&team_performance(&snapshot, &team.into())?)?;
        }

        Commands::Venues => {
            print_json(&venue_statistics(&snapshot))?;
        }

        Commands::Dashboard { team, today } => {
            let today = match optional_date_arg("today", today)? {
                Some(date) => date,
                None => config
                    .dashboard
                    .today
                    .unwrap_or_else(|| chrono::Local::now().date_naive()),
            };
            let options =
                DashboardOptions::new(today).with_streak_window(config.dashboard.streak_window);
            let source = config.supplementary_table()?;

            print_json(&build_dashboard(&snapshot, &team.into(), &source, options)?)?;
        }

        Commands::History { team } => {
            print_json(&team_match_history(&snapshot, &team.into())?)?;
        }

        Commands::PlayerHistory { player } => {
            print_json(&player_history(&snapshot, &player.into())?)?;
        }

        Commands::Matches {
            division,
            venue,
            team,
            from,
            to,
        } => {
            let filter = MatchFilter {
                division_id: division.map(Into::into),
                venue_id: venue.map(Into::into),
                team_id: team.map(Into::into),
                start_date: optional_date_arg("from", from)?,
                end_date: optional_date_arg("to", to)?,
            };

            print_json(&filter_matches(&snapshot, &filter)?)?;
        }
    }

    Ok(())
}
