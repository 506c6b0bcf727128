//! Configuration loading and validation.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{SupplementaryError, SupplementaryTable};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Supplementary(#[from] SupplementaryError),
}

/// Leaderboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Entries returned when no limit is given; 0 or less keeps all
    #[serde(default = "default_limit")]
    pub default_limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Recent matches shown in the form guide
    #[serde(default = "default_streak_window")]
    pub streak_window: usize,

    /// Fixed reference date; the system date is used when unset
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

fn default_streak_window() -> usize {
    crate::calculate::dashboard::DEFAULT_STREAK_WINDOW
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            streak_window: default_streak_window(),
            today: None,
        }
    }
}

/// Supplementary table location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplementaryConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub leaderboard: LeaderboardConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub supplementary: SupplementaryConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            leaderboard: LeaderboardConfig::default(),
            dashboard: DashboardConfig::default(),
            supplementary: SupplementaryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if the file exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.streak_window == 0 {
            return Err(ConfigError::ValidationError(
                "Dashboard streak window must be greater than 0".to_string(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Log level must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Load the configured supplementary table, or an empty one.
    pub fn supplementary_table(&self) -> Result<SupplementaryTable, ConfigError> {
        match &self.supplementary.path {
            Some(path) => Ok(SupplementaryTable::from_file(path)?),
            None => Ok(SupplementaryTable::default()),
        }
    }
}
