//! Core types and definitions for the SWARMFALL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! commands, state snapshots, audio cues, upgrade descriptors and constants.
//! It has no dependency on any runtime or host framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod upgrades;

#[cfg(test)]
mod tests;
