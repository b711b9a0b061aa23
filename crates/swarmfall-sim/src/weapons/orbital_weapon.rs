//! Persistent blades circling the player.

use std::f32::consts::TAU;

use swarmfall_core::constants::ORBIT_BASE_RADIUS;
use swarmfall_core::enums::PoolKind;

use super::{WeaponBase, WeaponContext, WeaponTemplate};
use crate::entities::Motion;
use crate::error::PoolError;

#[derive(Debug, Clone)]
pub struct OrbitalWeapon {
    pub base: WeaponBase,
    /// Ids of the projectiles this weapon keeps alive, in orbit-slot order.
    owned: Vec<u32>,
    /// Orbit clock (seconds); shared by every owned projectile.
    clock: f32,
}

impl OrbitalWeapon {
    pub fn new(template: &WeaponTemplate) -> Self {
        Self {
            base: WeaponBase::new(template),
            owned: Vec::new(),
            clock: 0.0,
        }
    }

    pub fn owned(&self) -> &[u32] {
        &self.owned
    }

    /// Reconcile the orbiter count with the current stats and refresh every
    /// orbiter's slot. Never reports a volley.
    pub fn update(&mut self, dt: f32, ctx: &mut WeaponContext<'_>) -> Result<bool, PoolError> {
        let stats = self.base.current_stats;
        let count = stats.whole_count();
        let anchor = ctx.player.position;

        // Forget orbiters that left the active list (restart, external cleanup).
        let projectiles = &*ctx.projectiles;
        self.owned
            .retain(|id| projectiles.iter().any(|p| p.id == *id && p.persistent));

        while self.owned.len() < count {
            let id = ctx.ids.next_id();
            let mut projectile = ctx.pool.get(PoolKind::Projectile)?;
            projectile.reset_orbital(id, anchor, Motion::default(), stats.damage);
            ctx.projectiles.push(projectile);
            self.owned.push(id);
        }
        if self.owned.len() > count {
            let retired = self.owned.split_off(count);
            for projectile in ctx.projectiles.iter_mut().filter(|p| retired.contains(&p.id)) {
                projectile.persistent = false;
                projectile.marked_for_deletion = true;
            }
        }

        let slots = self.owned.len();
        for (index, id) in self.owned.iter().enumerate() {
            if let Some(projectile) = ctx.projectiles.iter_mut().find(|p| p.id == *id) {
                projectile.motion = Motion::Orbital {
                    radius: ORBIT_BASE_RADIUS * stats.area,
                    angular_speed: stats.speed,
                    angle_offset: index as f32 / slots as f32 * TAU,
                    elapsed: self.clock,
                };
                projectile.damage = stats.damage;
                projectile.marked_for_deletion = false;
            }
        }
        self.clock += dt;
        Ok(false)
    }
}
