//! Host configuration, read from a TOML file.

use std::path::{Path, PathBuf};

use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};

use swarmfall_core::constants::TICK_RATE;
use swarmfall_sim::config::SimConfig;
use swarmfall_sim::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub leaderboard_path: PathBuf,
    /// Identity submitted to the leaderboard.
    pub player_name: String,
    /// Wall-clock length of a headless session.
    pub run_seconds: f64,
    /// Host frame rate (Hz).
    pub frame_rate: u32,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            leaderboard_path: PathBuf::from("swarmfall-scores.json"),
            player_name: "player".into(),
            run_seconds: 30.0,
            frame_rate: TICK_RATE,
            log_level: "info".into(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.sim.validate()?;
        if config.frame_rate == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_rate",
                reason: "must be at least 1".into(),
            });
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Like [`AppConfig::load`], but any failure falls back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}: {e}; using default host config", path.display());
                Self::default()
            }
        }
    }

    /// Parsed log level. Unrecognised names mean `info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
