//! Game state snapshot: the complete visible state handed to the host each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioCue;
use crate::types::{Color, SimTime};
use crate::upgrades::UpgradeOption;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub camera: CameraView,
    pub wave: WaveView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub texts: Vec<FloatingTextView>,
    pub weapons: Vec<WeaponView>,
    /// Non-empty only while the phase is `LevelUp`.
    pub upgrade_offer: Vec<UpgradeOption>,
    pub audio_cues: Vec<AudioCue>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub move_speed: f32,
    pub pickup_radius: f32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub level: u32,
    pub anim: AnimState,
    pub anim_frame: u32,
    pub facing_left: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    /// Radians, 0 = +x.
    pub heading: f32,
    pub size: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub anim_frame: u32,
}

impl EnemyView {
    /// Health-bar fill fraction.
    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp > 0.0 {
            self.hp / self.max_hp
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vec2,
    pub radius: f32,
    /// Owned by an orbital weapon.
    pub persistent: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Vec2,
    pub kind: PickupKind,
    pub value: u32,
    pub magnetized: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloatingTextView {
    pub position: Vec2,
    pub text: String,
    pub color: Color,
    /// 1.0 = opaque.
    pub alpha: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    /// Top-left corner of the visible area in world space.
    pub position: Vec2,
    pub view_width: f32,
    pub view_height: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub index: usize,
    pub pattern: SpawnPattern,
    pub enemy_kind: EnemyKind,
    pub difficulty: f32,
    pub elapsed_secs: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub id: String,
    pub name: String,
    pub kind: WeaponKind,
    pub level: u32,
    pub damage: f32,
    pub cooldown: f32,
    pub cooldown_timer: f32,
    pub count: f32,
    pub speed: f32,
    pub area: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub kills: u32,
    pub gold: u32,
}
