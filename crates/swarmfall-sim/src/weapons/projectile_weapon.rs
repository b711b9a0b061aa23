//! Auto-targeting volley weapon.

use glam::Vec2;

use swarmfall_core::constants::*;
use swarmfall_core::enums::PoolKind;
use swarmfall_core::events::AudioCue;
use swarmfall_core::types::{angle_between, unit};

use super::{WeaponBase, WeaponContext, WeaponTemplate};
use crate::entities::Enemy;
use crate::error::PoolError;

#[derive(Debug, Clone)]
pub struct ProjectileWeapon {
    pub base: WeaponBase,
}

impl ProjectileWeapon {
    pub fn new(template: &WeaponTemplate) -> Self {
        Self {
            base: WeaponBase::new(template),
        }
    }

    pub fn update(&mut self, dt: f32, ctx: &mut WeaponContext<'_>) -> Result<bool, PoolError> {
        if self.base.ready(dt, true) {
            return self.fire(ctx);
        }
        Ok(false)
    }

    /// Emit one volley at the nearest enemy in range, else along the
    /// player's heading. A stationary player with no target whiffs.
    pub fn fire(&self, ctx: &mut WeaponContext<'_>) -> Result<bool, PoolError> {
        let origin = ctx.player.position;
        let aim = match nearest_target(origin, ctx.enemies, WEAPON_TARGET_RANGE) {
            Some(target) => angle_between(origin, target),
            None if ctx.player.is_moving() => angle_between(Vec2::ZERO, ctx.player.velocity),
            None => return Ok(false),
        };

        let stats = &self.base.current_stats;
        let count = stats.whole_count();
        let speed = stats.speed * PROJECTILE_SPEED_SCALE;
        for angle in volley_angles(aim, count, VOLLEY_SPREAD) {
            let mut projectile = ctx.pool.get(PoolKind::Projectile)?;
            projectile.reset_linear(ctx.ids.next_id(), origin, unit(angle) * speed, stats.damage);
            ctx.projectiles.push(projectile);
        }
        if count > 0 {
            ctx.audio.push(AudioCue::Shoot {
                weapon_id: self.base.id.clone(),
            });
        }
        Ok(count > 0)
    }
}

/// Position of the closest living enemy strictly within `range`.
pub fn nearest_target(origin: Vec2, enemies: &[Enemy], range: f32) -> Option<Vec2> {
    let range_sq = range * range;
    let mut best: Option<(f32, Vec2)> = None;
    for enemy in enemies {
        if enemy.is_dead() || enemy.marked_for_deletion {
            continue;
        }
        let dist_sq = enemy.position.distance_squared(origin);
        if dist_sq < range_sq && best.map_or(true, |(d, _)| dist_sq < d) {
            best = Some((dist_sq, enemy.position));
        }
    }
    best.map(|(_, position)| position)
}

/// Angles of a `count`-projectile volley centred on `aim`.
pub fn volley_angles(aim: f32, count: usize, spread: f32) -> impl Iterator<Item = f32> {
    let middle = (count as f32 - 1.0) / 2.0;
    (0..count).map(move |i| aim + (i as f32 - middle) * spread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::weapons::evolution::template;
    use crate::world::World;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use swarmfall_core::enums::EnemyKind;

    fn world_with_enemies(offsets: &[Vec2]) -> World {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut world = World::new(&SimConfig::default()).unwrap();
        let origin = world.player.position;
        for offset in offsets {
            world
                .spawn_enemy(EnemyKind::MonsterRed, 1.0, origin + *offset, &mut rng)
                .unwrap();
        }
        world
    }

    fn crossbow() -> ProjectileWeapon {
        ProjectileWeapon::new(template("crossbow").unwrap())
    }

    #[test]
    fn test_volley_angles_three_way() {
        let angles: Vec<f32> = volley_angles(1.0, 3, 0.2).collect();
        assert_eq!(angles.len(), 3);
        assert!((angles[0] - 0.8).abs() < 1e-6);
        assert!((angles[1] - 1.0).abs() < 1e-6);
        assert!((angles[2] - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_volley_angles_single_is_on_target() {
        let angles: Vec<f32> = volley_angles(-0.5, 1, 0.2).collect();
        assert_eq!(angles, vec![-0.5]);
        assert_eq!(volley_angles(0.0, 0, 0.2).count(), 0);
    }

    #[test]
    fn test_nearest_target_respects_range() {
        let world = world_with_enemies(&[
            Vec2::new(700.0, 0.0),
            Vec2::new(0.0, 300.0),
            Vec2::new(-100.0, 0.0),
        ]);
        let origin = world.player.position;
        let target = nearest_target(origin, &world.enemies, WEAPON_TARGET_RANGE).unwrap();
        assert_eq!(target, origin + Vec2::new(-100.0, 0.0));

        let far = world_with_enemies(&[Vec2::new(700.0, 0.0)]);
        assert!(nearest_target(far.player.position, &far.enemies, WEAPON_TARGET_RANGE).is_none());
    }

    #[test]
    fn test_fire_aims_at_nearest_enemy() {
        let mut world = world_with_enemies(&[Vec2::new(0.0, 200.0)]);
        let mut audio = Vec::new();
        let weapon = crossbow();
        let mut ctx = WeaponContext::new(&mut world, &mut audio);
        assert!(weapon.fire(&mut ctx).unwrap());
        assert_eq!(world.projectiles.len(), 1);
        let p = &world.projectiles[0];
        assert_eq!(p.damage, 15.0);
        match p.motion {
            crate::entities::Motion::Linear { velocity } => {
                assert!(velocity.x.abs() < 1e-4);
                assert!((velocity.y - 8.0).abs() < 1e-4);
            }
            _ => panic!("expected linear motion"),
        }
        assert_eq!(audio.len(), 1);
    }

    #[test]
    fn test_fire_falls_back_to_heading() {
        let mut world = world_with_enemies(&[]);
        world.player.set_input(Vec2::new(-1.0, 0.0));
        world.player.update(0.016);
        let mut audio = Vec::new();
        let weapon = crossbow();
        let mut ctx = WeaponContext::new(&mut world, &mut audio);
        assert!(weapon.fire(&mut ctx).unwrap());
        match world.projectiles[0].motion {
            crate::entities::Motion::Linear { velocity } => assert!(velocity.x < 0.0),
            _ => panic!("expected linear motion"),
        }
    }

    #[test]
    fn test_stationary_without_target_whiffs_but_resets_cooldown() {
        let mut world = world_with_enemies(&[]);
        let mut audio = Vec::new();
        let mut weapon = crossbow();
        let mut ctx = WeaponContext::new(&mut world, &mut audio);
        assert!(!weapon.update(1.2, &mut ctx).unwrap());
        assert_eq!(weapon.base.cooldown_timer, 0.0);
        assert!(world.projectiles.is_empty());
        assert!(audio.is_empty());
    }

    #[test]
    fn test_multishot_emits_three() {
        let mut world = world_with_enemies(&[Vec2::new(100.0, 0.0)]);
        let mut audio = Vec::new();
        let weapon = ProjectileWeapon::new(template("multishot_bow").unwrap());
        let mut ctx = WeaponContext::new(&mut world, &mut audio);
        weapon.fire(&mut ctx).unwrap();
        assert_eq!(world.projectiles.len(), 3);
    }
}
