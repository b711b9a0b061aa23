//! Projectiles and their movement variants.

use glam::Vec2;

use swarmfall_core::constants::*;
use swarmfall_core::state::ProjectileView;
use swarmfall_core::types::unit;

use crate::pool::Poolable;

/// How a projectile moves each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Constant velocity in units per tick.
    Linear { velocity: Vec2 },
    /// Circles an anchor point: `anchor + radius * unit(elapsed * angular_speed + angle_offset)`.
    Orbital {
        radius: f32,
        /// Radians per second.
        angular_speed: f32,
        angle_offset: f32,
        /// Seconds since the owning weapon started its orbit clock.
        elapsed: f32,
    },
}

impl Default for Motion {
    fn default() -> Self {
        Motion::Linear {
            velocity: Vec2::ZERO,
        }
    }
}

impl Motion {
    /// Advance one tick. `anchor` is only read by orbital motion.
    pub fn advance(&mut self, position: &mut Vec2, anchor: Vec2, dt: f32) {
        match self {
            Motion::Linear { velocity } => *position += *velocity,
            Motion::Orbital {
                radius,
                angular_speed,
                angle_offset,
                elapsed,
            } => {
                *elapsed += dt;
                *position = anchor + unit(*elapsed * *angular_speed + *angle_offset) * *radius;
            }
        }
    }

    /// Current orbit angle, if orbital.
    pub fn orbit_angle(&self) -> Option<f32> {
        match *self {
            Motion::Orbital {
                angular_speed,
                angle_offset,
                elapsed,
                ..
            } => Some(elapsed * angular_speed + angle_offset),
            Motion::Linear { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec2,
    pub motion: Motion,
    pub radius: f32,
    /// Damage dealt per hit; copied from the firing weapon.
    pub damage: f32,
    /// Seconds left before expiry. Ignored while `persistent`.
    pub ttl: f32,
    /// Owned by a weapon; collisions never mark it for deletion.
    pub persistent: bool,
    pub marked_for_deletion: bool,
}

impl Projectile {
    pub fn reset_linear(&mut self, id: u32, position: Vec2, velocity: Vec2, damage: f32) {
        self.id = id;
        self.position = position;
        self.motion = Motion::Linear { velocity };
        self.radius = PROJECTILE_RADIUS;
        self.damage = damage;
        self.ttl = PROJECTILE_LIFETIME;
        self.persistent = false;
        self.marked_for_deletion = false;
    }

    pub fn reset_orbital(&mut self, id: u32, anchor: Vec2, motion: Motion, damage: f32) {
        self.id = id;
        self.position = anchor;
        self.motion = motion;
        self.radius = ORBIT_PROJECTILE_RADIUS;
        self.damage = damage;
        self.ttl = 0.0;
        self.persistent = true;
        self.marked_for_deletion = false;
    }

    /// Move and age the projectile.
    pub fn update(&mut self, anchor: Vec2, dt: f32) {
        self.motion.advance(&mut self.position, anchor, dt);
        if !self.persistent {
            self.ttl -= dt;
            if self.ttl <= 0.0 {
                self.marked_for_deletion = true;
            }
        }
    }

    pub fn view(&self) -> ProjectileView {
        ProjectileView {
            id: self.id,
            position: self.position,
            radius: self.radius,
            persistent: self.persistent,
        }
    }
}

impl Poolable for Projectile {
    fn on_release(&mut self) {
        self.persistent = false;
        self.marked_for_deletion = false;
        self.motion = Motion::default();
    }
}
