//! Upgrade descriptors offered to the player on level-up.

use serde::{Deserialize, Serialize};

/// What an upgrade does when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UpgradeKind {
    /// Restore health, clamped to max.
    Heal { amount: f32 },
    /// Multiply player move speed.
    Swiftness { multiplier: f32 },
    /// Multiply the damage of every owned weapon.
    Might { multiplier: f32 },
    /// Call `upgrade()` on every owned weapon.
    Sharpen,
    /// Add a weapon from the catalogue.
    NewWeapon { weapon_id: String },
}

/// One entry of the level-up menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOption {
    pub name: String,
    pub description: String,
    pub kind: UpgradeKind,
}

impl UpgradeOption {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: UpgradeKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
        }
    }
}
