//! Runtime simulation configuration.
//!
//! [`SimConfig`] mirrors the tuning constants in
//! [`swarmfall_core::constants`]. A TOML file may override any subset of
//! fields; missing keys keep their compile-time defaults.
//!
//! ```toml
//! seed = 7
//! view_width = 1024
//!
//! [[waves]]
//! start_time = 0.0
//! spawn_interval = 0.5
//! pattern = "edge"
//! difficulty = 1.0
//! enemy_kind = "monster_eye"
//! ```

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use swarmfall_core::constants::*;
use swarmfall_core::enums::{EnemyKind, SpawnPattern};

use crate::error::ConfigError;

/// One row of the wave schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Elapsed seconds at which this wave becomes active.
    pub start_time: f32,
    /// Advisory only. A wave stays active until a later wave starts.
    pub duration: f32,
    /// Seconds between spawn events. Ignored by boss waves.
    pub spawn_interval: f32,
    pub pattern: SpawnPattern,
    pub difficulty: f32,
    /// Enemy table name; unknown names resolve to the default kind.
    pub enemy_kind: String,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            duration: 60.0,
            spawn_interval: 0.25,
            pattern: SpawnPattern::Edge,
            difficulty: 1.0,
            enemy_kind: EnemyKind::default().name().to_string(),
        }
    }
}

impl WaveConfig {
    pub fn kind(&self) -> EnemyKind {
        EnemyKind::from_name(&self.enemy_kind)
    }
}

/// The built-in four-wave schedule.
pub fn default_waves() -> Vec<WaveConfig> {
    vec![
        WaveConfig {
            start_time: 0.0,
            duration: 60.0,
            spawn_interval: 0.25,
            pattern: SpawnPattern::Edge,
            difficulty: 1.0,
            enemy_kind: "monster_red".into(),
        },
        WaveConfig {
            start_time: 60.0,
            duration: 30.0,
            spawn_interval: 0.15,
            pattern: SpawnPattern::Edge,
            difficulty: 1.5,
            enemy_kind: "monster_eye".into(),
        },
        WaveConfig {
            start_time: 90.0,
            duration: 15.0,
            spawn_interval: 0.2,
            pattern: SpawnPattern::Circle,
            difficulty: 1.0,
            enemy_kind: "monster_skeleton".into(),
        },
        WaveConfig {
            start_time: 120.0,
            duration: 9999.0,
            spawn_interval: 0.0,
            pattern: SpawnPattern::Boss,
            difficulty: 5.0,
            enemy_kind: "boss_demon".into(),
        },
    ]
}

/// Pre-allocation sizes for each entity pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSizes {
    pub enemy: usize,
    pub boss: usize,
    pub projectile: usize,
    pub pickup: usize,
    pub floating_text: usize,
}

impl Default for PoolSizes {
    fn default() -> Self {
        Self {
            enemy: ENEMY_POOL_SIZE,
            boss: BOSS_POOL_SIZE,
            projectile: PROJECTILE_POOL_SIZE,
            pickup: PICKUP_POOL_SIZE,
            floating_text: FLOATING_TEXT_POOL_SIZE,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub view_width: f32,
    pub view_height: f32,
    /// Largest delta a single tick may consume (seconds).
    pub max_tick_delta: f32,
    /// Options offered per level-up.
    pub upgrade_choices: usize,
    pub pools: PoolSizes,
    pub waves: Vec<WaveConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            max_tick_delta: MAX_TICK_DELTA,
            upgrade_choices: UPGRADE_CHOICES,
            pools: PoolSizes::default(),
            waves: default_waves(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Like [`SimConfig::load`], but any failure falls back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}: {e}; using default simulation config", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.view_width > 0.0 && self.view_height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "view_width/view_height",
                reason: format!("must be positive, got {}x{}", self.view_width, self.view_height),
            });
        }
        if !(self.max_tick_delta > 0.0) {
            return Err(ConfigError::Invalid {
                field: "max_tick_delta",
                reason: format!("must be positive, got {}", self.max_tick_delta),
            });
        }
        if self.upgrade_choices == 0 {
            return Err(ConfigError::Invalid {
                field: "upgrade_choices",
                reason: "a level-up menu needs at least one choice".into(),
            });
        }
        if self.waves.is_empty() {
            return Err(ConfigError::Invalid {
                field: "waves",
                reason: "schedule is empty".into(),
            });
        }
        if self
            .waves
            .windows(2)
            .any(|pair| pair[1].start_time < pair[0].start_time)
        {
            return Err(ConfigError::Invalid {
                field: "waves",
                reason: "start times must be non-decreasing".into(),
            });
        }
        if let Some(wave) = self
            .waves
            .iter()
            .find(|w| w.pattern != SpawnPattern::Boss && !(w.spawn_interval > 0.0))
        {
            return Err(ConfigError::Invalid {
                field: "waves.spawn_interval",
                reason: format!("wave at {}s needs a positive interval", wave.start_time),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.waves.len(), 4);
        assert_eq!(config.pools.enemy, 100);
        assert_eq!(config.pools.boss, 1);
    }

    #[test]
    fn test_validate_rejects_empty_upgrade_menu() {
        let config = SimConfig {
            upgrade_choices: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "upgrade_choices",
                ..
            })
        ));
        assert!(SimConfig::from_toml_str("upgrade_choices = 0\n").is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimConfig::from_toml_str("seed = 7\nview_width = 1024.0\n").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.view_width, 1024.0);
        assert_eq!(config.view_height, VIEW_HEIGHT);
        assert_eq!(config.waves, default_waves());
    }

    #[test]
    fn test_toml_wave_schedule_override() {
        let doc = r#"
            [[waves]]
            start_time = 0.0
            spawn_interval = 0.5
            pattern = "circle"
            enemy_kind = "monster_eye"

            [[waves]]
            start_time = 30.0
            pattern = "boss"
            difficulty = 2.0
            enemy_kind = "boss_demon"
        "#;
        let config = SimConfig::from_toml_str(doc).unwrap();
        assert_eq!(config.waves.len(), 2);
        assert_eq!(config.waves[0].pattern, SpawnPattern::Circle);
        assert_eq!(config.waves[0].kind(), EnemyKind::MonsterEye);
        assert_eq!(config.waves[1].kind(), EnemyKind::BossDemon);
    }

    #[test]
    fn test_unknown_enemy_name_uses_default_kind() {
        let wave = WaveConfig {
            enemy_kind: "gelatinous_cube".into(),
            ..Default::default()
        };
        assert_eq!(wave.kind(), EnemyKind::MonsterRed);
    }

    #[test]
    fn test_validate_rejects_unsorted_waves() {
        let mut config = SimConfig::default();
        config.waves.swap(0, 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "waves", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_view_and_delta() {
        let config = SimConfig {
            view_width: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = SimConfig {
            max_tick_delta: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = SimConfig::from_toml_str("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = SimConfig::load_or_default("/nonexistent/swarmfall/sim.toml");
        assert_eq!(config, SimConfig::default());
    }
}
