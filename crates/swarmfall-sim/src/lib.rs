//! Simulation engine for SWARMFALL.
//!
//! Owns the world (player, pools, active entity lists), runs systems once
//! per host frame and produces GameStateSnapshots for the host.

pub mod camera;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod player;
pub mod pool;
pub mod render;
pub mod systems;
pub mod weapons;
pub mod world;

pub use swarmfall_core as core;
pub use engine::SimulationEngine;
