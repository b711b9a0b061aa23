//! Simulation constants and tuning parameters.
//!
//! Distances are world units (one unit is one pixel at zoom 1). Movement
//! speeds of the player, enemies and linear projectiles are units per tick;
//! every timer is in seconds.

/// Nominal host frame rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per nominal tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Largest delta a single tick may consume (seconds).
pub const MAX_TICK_DELTA: f32 = 0.1;

// --- View / camera ---

/// Visible area width.
pub const VIEW_WIDTH: f32 = 800.0;

/// Visible area height.
pub const VIEW_HEIGHT: f32 = 600.0;

/// Fraction of the remaining distance the camera covers each tick.
pub const CAMERA_SMOOTHING: f32 = 0.1;

// --- Pools ---

pub const ENEMY_POOL_SIZE: usize = 100;
pub const BOSS_POOL_SIZE: usize = 1;
pub const PROJECTILE_POOL_SIZE: usize = 50;
pub const PICKUP_POOL_SIZE: usize = 50;
pub const FLOATING_TEXT_POOL_SIZE: usize = 20;

// --- Player ---

/// Sprite footprint (square side).
pub const PLAYER_SIZE: f32 = 32.0;

pub const PLAYER_MOVE_SPEED: f32 = 3.0;

pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Distance at which pickups become magnetized.
pub const PLAYER_PICKUP_RADIUS: f32 = 100.0;

/// XP needed to reach level 2.
pub const PLAYER_FIRST_LEVEL_XP: u32 = 100;

/// Threshold growth factor per level.
pub const LEVEL_XP_GROWTH: f32 = 1.5;

/// How long the attack pose holds after a weapon fires.
pub const PLAYER_ATTACK_DURATION: f32 = 0.5;

/// Seconds per animation frame (player and enemies).
pub const ANIM_FRAME_SECS: f32 = 0.1;

// --- Enemies ---

pub const ENEMY_SIZE: f32 = 16.0;

pub const BOSS_SIZE: f32 = 64.0;

/// Frames in an enemy walk cycle.
pub const ENEMY_ANIM_FRAMES: u32 = 4;

/// Neighbours closer than this push each other apart.
pub const SEPARATION_RADIUS: f32 = 24.0;

/// Weight applied to the summed repulsion vector before it moves the enemy.
pub const SEPARATION_WEIGHT: f32 = 0.05;

/// Max HP gained per point of difficulty.
pub const ENEMY_HP_PER_DIFFICULTY: f32 = 10.0;

/// Contact damage gained per point of difficulty.
pub const ENEMY_DAMAGE_PER_DIFFICULTY: f32 = 2.0;

pub const MONSTER_RED_HP: f32 = 20.0;
pub const MONSTER_RED_DAMAGE: f32 = 10.0;
pub const MONSTER_RED_SPEED: f32 = 0.3;
pub const MONSTER_RED_SPEED_VARIANCE: f32 = 0.1;

pub const MONSTER_EYE_HP: f32 = 14.0;
pub const MONSTER_EYE_DAMAGE: f32 = 8.0;
pub const MONSTER_EYE_SPEED: f32 = 0.45;
pub const MONSTER_EYE_SPEED_VARIANCE: f32 = 0.1;

pub const MONSTER_SKELETON_HP: f32 = 12.0;
pub const MONSTER_SKELETON_DAMAGE: f32 = 6.0;
pub const MONSTER_SKELETON_SPEED: f32 = 0.35;
pub const MONSTER_SKELETON_SPEED_VARIANCE: f32 = 0.05;

/// Boss max HP per point of difficulty (no flat base).
pub const BOSS_HP_PER_DIFFICULTY: f32 = 5000.0;
pub const BOSS_DAMAGE: f32 = 40.0;
pub const BOSS_SPEED: f32 = 0.4;
/// Boss speed jitter; not scaled by difficulty.
pub const BOSS_SPEED_VARIANCE: f32 = 0.1;

// --- Waves ---

/// Seconds between global difficulty steps.
pub const DIFFICULTY_RAMP_INTERVAL: f32 = 300.0;

/// Difficulty added per elapsed ramp interval.
pub const DIFFICULTY_RAMP_STEP: f32 = 0.5;

/// How far outside the visible edge edge-spawns appear.
pub const EDGE_SPAWN_MARGIN: f32 = 20.0;

pub const CIRCLE_SPAWN_RADIUS: f32 = 400.0;

pub const CIRCLE_SPAWN_COUNT: usize = 10;

/// Boss appears this far above the visible rectangle's top edge.
pub const BOSS_SPAWN_OFFSET: f32 = 100.0;

// --- Weapons ---

/// Damage multiplier per `upgrade()` call.
pub const WEAPON_UPGRADE_DAMAGE: f32 = 1.1;

/// Cooldown multiplier per `upgrade()` call.
pub const WEAPON_UPGRADE_COOLDOWN: f32 = 0.9;

/// Auto-targeting acquisition range.
pub const WEAPON_TARGET_RANGE: f32 = 600.0;

/// Angular step between projectiles in one volley (radians).
pub const VOLLEY_SPREAD: f32 = 0.2;

pub const PROJECTILE_RADIUS: f32 = 4.0;

/// Units per tick of linear projectile travel per point of weapon speed.
/// A speed-10 crossbow bolt covers 8 units per tick.
pub const PROJECTILE_SPEED_SCALE: f32 = 0.8;

/// Linear projectiles expire after this long.
pub const PROJECTILE_LIFETIME: f32 = 2.0;

/// Orbit radius at area 1.
pub const ORBIT_BASE_RADIUS: f32 = 80.0;

pub const ORBIT_PROJECTILE_RADIUS: f32 = 6.0;

// --- Combat ---

pub const SCORE_PER_KILL: u32 = 10;

/// XP carried by the pickup a kill drops.
pub const KILL_XP_VALUE: u32 = 20;

// --- Loot ---

pub const PICKUP_SIZE: f32 = 8.0;

/// Magnet speed gained per second while magnetized (units/tick per second).
pub const MAGNET_ACCELERATION: f32 = 50.0;

// --- Upgrades ---

pub const HEAL_AMOUNT: f32 = 50.0;

/// Move-speed multiplier of the Swiftness upgrade.
pub const SWIFTNESS_MULTIPLIER: f32 = 1.1;

/// Damage multiplier of the Might upgrade.
pub const MIGHT_MULTIPLIER: f32 = 1.1;

/// Options offered per level-up.
pub const UPGRADE_CHOICES: usize = 3;

// --- Floating text ---

pub const FLOATING_TEXT_DURATION: f32 = 0.8;

/// Upward drift (units per second).
pub const FLOATING_TEXT_RISE_SPEED: f32 = 50.0;

/// Time taken to pop up to full scale.
pub const FLOATING_TEXT_POP_TIME: f32 = 0.1;

pub const FLOATING_TEXT_POP_SCALE: f32 = 1.5;

/// Spawn position jitter around the hit point (each axis, ±).
pub const FLOATING_TEXT_JITTER: f32 = 10.0;
