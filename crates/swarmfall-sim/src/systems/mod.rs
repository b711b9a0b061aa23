//! Per-tick systems.
//!
//! Systems are free functions over the explicit [`World`](crate::world::World)
//! context. They hold no state of their own, apart from the wave director's
//! schedule clock.

pub mod cleanup;
pub mod combat;
pub mod loot;
pub mod movement;
pub mod snapshot;
pub mod steering;
pub mod wave_director;
