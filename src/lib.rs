//! # League Analytics
//!
//! Derived views over a sports league: standings, leaderboards, team
//! timelines, venue statistics and team dashboards.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, matches, stat records, views)
//! - **calculate**: Pure computations over a [`LeagueSnapshot`]
//! - **storage**: Snapshot loading from JSONL files
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
