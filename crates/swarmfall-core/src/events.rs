//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// Fire-and-forget audio cues. The host plays them; nothing waits on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    /// Run started.
    Start,
    /// A weapon emitted a volley.
    Shoot { weapon_id: String },
    /// A projectile struck and removed an enemy. `killed` is set when the
    /// hit alone drained its health.
    Hit { kind: EnemyKind, killed: bool },
    LevelUp { level: u32 },
    BossSpawned,
    GameOver { score: u32 },
}
