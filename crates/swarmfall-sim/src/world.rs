//! The explicit simulation context: player, camera, active lists, pools and score.
//!
//! Every tick function takes `&mut World` (or the fields it needs); there are
//! no process-wide singletons.

use glam::Vec2;
use rand::Rng;

use swarmfall_core::enums::{EnemyKind, PickupKind, PoolKind};
use swarmfall_core::state::ScoreView;
use swarmfall_core::types::Color;

use crate::camera::Camera;
use crate::config::SimConfig;
use crate::entities::{Enemy, FloatingText, Pickup, Projectile};
use crate::error::PoolError;
use crate::player::Player;
use crate::pool::EntityPool;

/// Monotonic entity id source.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> u32 {
        self.next = self.next.wrapping_add(1);
        self.next
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub kills: u32,
    pub gold: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            kills: self.kills,
            gold: self.gold,
        }
    }
}

pub struct World {
    pub player: Player,
    pub camera: Camera,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    pub texts: Vec<FloatingText>,
    /// Serves both `PoolKind::Enemy` and `PoolKind::Boss`.
    pub enemy_pool: EntityPool<Enemy>,
    pub projectile_pool: EntityPool<Projectile>,
    pub pickup_pool: EntityPool<Pickup>,
    pub text_pool: EntityPool<FloatingText>,
    pub score: ScoreState,
    pub ids: IdAllocator,
    /// Reused by the steering pass.
    pub position_buffer: Vec<Vec2>,
}

impl World {
    /// Build an empty world and pre-allocate every pool.
    pub fn new(config: &SimConfig) -> Result<Self, PoolError> {
        let mut enemy_pool = EntityPool::new();
        enemy_pool.create_pool(PoolKind::Enemy, Enemy::default, config.pools.enemy)?;
        enemy_pool.create_pool(PoolKind::Boss, Enemy::default, config.pools.boss)?;
        let mut projectile_pool = EntityPool::new();
        projectile_pool.create_pool(
            PoolKind::Projectile,
            Projectile::default,
            config.pools.projectile,
        )?;
        let mut pickup_pool = EntityPool::new();
        pickup_pool.create_pool(PoolKind::Pickup, Pickup::default, config.pools.pickup)?;
        let mut text_pool = EntityPool::new();
        text_pool.create_pool(
            PoolKind::FloatingText,
            FloatingText::default,
            config.pools.floating_text,
        )?;

        let start = Vec2::new(config.view_width, config.view_height) * 0.5;
        let mut camera = Camera::new(config.view_width, config.view_height);
        camera.snap_to(start);

        Ok(Self {
            player: Player::new(start),
            camera,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            texts: Vec::new(),
            enemy_pool,
            projectile_pool,
            pickup_pool,
            text_pool,
            score: ScoreState::default(),
            ids: IdAllocator::default(),
            position_buffer: Vec::new(),
        })
    }

    pub fn spawn_enemy(
        &mut self,
        kind: EnemyKind,
        difficulty: f32,
        position: Vec2,
        rng: &mut impl Rng,
    ) -> Result<(), PoolError> {
        let pool_kind = if kind.is_boss() {
            PoolKind::Boss
        } else {
            PoolKind::Enemy
        };
        let mut enemy = self.enemy_pool.get(pool_kind)?;
        enemy.reset(self.ids.next_id(), difficulty, kind, rng);
        enemy.position = position;
        self.enemies.push(enemy);
        Ok(())
    }

    pub fn spawn_loot(
        &mut self,
        position: Vec2,
        kind: PickupKind,
        value: u32,
    ) -> Result<(), PoolError> {
        let mut pickup = self.pickup_pool.get(PoolKind::Pickup)?;
        pickup.reset(position, kind, value);
        self.pickups.push(pickup);
        Ok(())
    }

    pub fn spawn_text(
        &mut self,
        position: Vec2,
        text: &str,
        color: Color,
    ) -> Result<(), PoolError> {
        let mut floating = self.text_pool.get(PoolKind::FloatingText)?;
        floating.reset(position, text, color);
        self.texts.push(floating);
        Ok(())
    }

    /// Return every active entity to its pool and start a fresh run state.
    pub fn reset(&mut self) -> Result<(), PoolError> {
        for enemy in self.enemies.drain(..) {
            let kind = enemy.pool_kind();
            self.enemy_pool.release(kind, enemy)?;
        }
        for projectile in self.projectiles.drain(..) {
            self.projectile_pool.release(PoolKind::Projectile, projectile)?;
        }
        for pickup in self.pickups.drain(..) {
            self.pickup_pool.release(PoolKind::Pickup, pickup)?;
        }
        for text in self.texts.drain(..) {
            self.text_pool.release(PoolKind::FloatingText, text)?;
        }
        let start = Vec2::new(self.camera.view_width, self.camera.view_height) * 0.5;
        self.player = Player::new(start);
        self.camera.snap_to(start);
        self.score = ScoreState::default();
        Ok(())
    }
}
