//! Core data models for league analytics.

mod dashboard;
mod ids;
mod leaderboard;
mod league;
mod match_record;
mod snapshot;
mod stats;
mod supplementary;

pub use dashboard::*;
pub use ids::*;
pub use leaderboard::*;
pub use league::*;
pub use match_record::*;
pub use snapshot::*;
pub use stats::*;
pub use supplementary::*;
