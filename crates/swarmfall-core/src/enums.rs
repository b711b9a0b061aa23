//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (run lifecycle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    /// Ticks advance.
    Active,
    /// Pause menu shown; timers frozen.
    Paused,
    /// Waiting for the player to pick an upgrade; timers frozen.
    LevelUp,
    /// Player died. Only `Restart` leaves this phase.
    GameOver,
}

impl GamePhase {
    /// Whether the simulation advances in this phase.
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::Active)
    }
}

/// Enemy archetype. Each kind has a fixed base-stat row in the enemy table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    #[default]
    MonsterRed,
    /// Fast, fragile.
    MonsterEye,
    /// Weak swarm filler used by ring spawns.
    MonsterSkeleton,
    BossDemon,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::MonsterRed,
        EnemyKind::MonsterEye,
        EnemyKind::MonsterSkeleton,
        EnemyKind::BossDemon,
    ];

    /// Resolve a kind by its configuration name. Unknown names fall back to
    /// the default kind.
    pub fn from_name(name: &str) -> EnemyKind {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::MonsterRed => "monster_red",
            EnemyKind::MonsterEye => "monster_eye",
            EnemyKind::MonsterSkeleton => "monster_skeleton",
            EnemyKind::BossDemon => "boss_demon",
        }
    }

    pub fn is_boss(self) -> bool {
        matches!(self, EnemyKind::BossDemon)
    }
}

/// Loot variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupKind {
    #[default]
    Xp,
    Gold,
    Health,
}

/// How a wave places the enemies it spawns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPattern {
    /// One enemy just outside a random edge of the visible rectangle.
    #[default]
    Edge,
    /// A batch evenly spaced on a ring around the player.
    Circle,
    /// A single boss, once per wave activation.
    Boss,
}

/// Entity pool identifier. The set of pooled kinds is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoolKind {
    Enemy,
    Boss,
    Projectile,
    Pickup,
    FloatingText,
}

/// Player animation state, derived from movement and the attack timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
    Throw,
    WalkAttack,
}

impl AnimState {
    /// Frame count of the sprite-sheet row for this state.
    pub fn frame_count(self) -> u32 {
        match self {
            AnimState::Idle | AnimState::Throw => 4,
            AnimState::Walk | AnimState::WalkAttack => 6,
        }
    }

    /// Sprite-sheet row.
    pub fn row(self) -> u32 {
        match self {
            AnimState::Idle => 0,
            AnimState::Walk => 1,
            AnimState::Throw => 2,
            AnimState::WalkAttack => 3,
        }
    }
}

/// Weapon behaviour family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// Cooldown-driven, auto-targeting volley of linear projectiles.
    #[default]
    Projectile,
    /// Persistent projectiles circling the player.
    Orbital,
}
