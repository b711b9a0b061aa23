//! Loot dropped by enemies.

use glam::Vec2;

use swarmfall_core::constants::*;
use swarmfall_core::enums::PickupKind;
use swarmfall_core::state::PickupView;

use crate::pool::Poolable;

#[derive(Debug, Clone)]
pub struct Pickup {
    pub position: Vec2,
    pub kind: PickupKind,
    pub value: u32,
    pub size: f32,
    pub magnetized: bool,
    /// Units per tick. Only grows while magnetized.
    pub magnet_speed: f32,
    pub marked_for_deletion: bool,
}

impl Default for Pickup {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            kind: PickupKind::default(),
            value: 0,
            size: PICKUP_SIZE,
            magnetized: false,
            magnet_speed: 0.0,
            marked_for_deletion: false,
        }
    }
}

impl Pickup {
    pub fn reset(&mut self, position: Vec2, kind: PickupKind, value: u32) {
        self.position = position;
        self.kind = kind;
        self.value = value;
        self.size = PICKUP_SIZE;
        self.magnetized = false;
        self.magnet_speed = 0.0;
        self.marked_for_deletion = false;
    }

    /// Attract toward the player. Returns `true` on the tick it is collected.
    ///
    /// `collect_distance` is measured before this tick's step.
    pub fn update(
        &mut self,
        player: Vec2,
        pickup_radius: f32,
        collect_distance: f32,
        dt: f32,
    ) -> bool {
        if self.marked_for_deletion {
            return false;
        }
        let to = player - self.position;
        let dist_sq = to.length_squared();
        if !self.magnetized && dist_sq < pickup_radius * pickup_radius {
            self.magnetized = true;
        }
        if !self.magnetized {
            return false;
        }

        self.magnet_speed += MAGNET_ACCELERATION * dt;
        let dist = dist_sq.sqrt();
        if dist > 0.0 {
            self.position += to / dist * self.magnet_speed;
        }
        if dist < collect_distance {
            self.marked_for_deletion = true;
            return true;
        }
        false
    }

    pub fn view(&self) -> PickupView {
        PickupView {
            position: self.position,
            kind: self.kind,
            value: self.value,
            magnetized: self.magnetized,
        }
    }
}

impl Poolable for Pickup {
    fn on_release(&mut self) {
        self.magnetized = false;
        self.magnet_speed = 0.0;
        self.marked_for_deletion = false;
    }
}
