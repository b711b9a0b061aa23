//! SWARMFALL headless host.
//!
//! Wires the simulation engine to its collaborators (input, upgrade
//! selection, leaderboard, audio and a canvas) and drives it from a game
//! loop thread.

pub mod audio;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod headless;
pub mod input;
pub mod leaderboard;
pub mod logger;
pub mod state;
pub mod upgrade_select;

pub use swarmfall_core as core;
