//! Configuration loading and management

mod periods;
mod rewards;

pub use periods::PeriodConfig;
pub use rewards::RewardConfig;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Days-per-period mapping
    #[serde(default)]
    pub periods: PeriodConfig,

    /// Reward amounts
    #[serde(default)]
    pub rewards: RewardConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .habitloop/config.toml (preferred) or habitloop.toml (legacy)
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let new_path = dir.join(".habitloop/config.toml");
        if new_path.exists() {
            return Self::from_file(&new_path);
        }

        let legacy_path = dir.join("habitloop.toml");
        if legacy_path.exists() {
            return Self::from_file(&legacy_path);
        }

        Ok(Self::default())
    }
}
