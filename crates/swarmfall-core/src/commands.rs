//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Run lifecycle ---
    /// Leave the main menu and begin a run.
    StartRun,
    /// Start over after game over (or from the pause menu).
    Restart,
    /// Open the pause menu.
    Pause,
    /// Close the pause menu.
    Resume,

    // --- Input ---
    /// Movement axis as read from the input collaborator. Need not be
    /// normalized; diagonals are normalized by the player.
    SetMovement { x: f32, y: f32 },
    /// Raw pointer position in screen coordinates.
    SetPointer { x: f32, y: f32 },

    // --- Level-up ---
    /// Pick one of the offered upgrades by index.
    ChooseUpgrade { index: usize },
}
