//! Service configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use heuristic_engine::DEFAULT_TOP_CANDIDATES;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("top_candidates must be at least 1")]
    NoCandidates,
}

/// Service configuration, read from TOML. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Where the current game snapshot is persisted
    pub snapshot_path: PathBuf,
    /// Seed for the automated opponent (None = OS entropy)
    pub seed: Option<u64>,
    /// Size of the top-ranked set the opponent draws from
    pub top_candidates: usize,
    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("xiangqi_game.json"),
            seed: None,
            top_candidates: DEFAULT_TOP_CANDIDATES,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        if config.top_candidates == 0 {
            return Err(ConfigError::NoCandidates);
        }
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
