//! Host error type.

use thiserror::Error;

use swarmfall_sim::error::{ConfigError, SimError};

use crate::leaderboard::LeaderboardError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has stopped")]
    Disconnected,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
