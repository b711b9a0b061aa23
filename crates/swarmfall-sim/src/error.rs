//! Error types for the simulation crate.

use thiserror::Error;

use swarmfall_core::enums::PoolKind;

/// Entity pool misuse. Both variants indicate a programming error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("no pool registered for {0:?}")]
    UnknownKind(PoolKind),
    #[error("pool {0:?} is already registered")]
    AlreadyRegistered(PoolKind),
}

/// Configuration loading or validation failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level simulation error.
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
