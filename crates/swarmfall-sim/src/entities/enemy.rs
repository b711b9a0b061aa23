//! Enemy agents, including the boss variant.

use glam::Vec2;
use rand::Rng;

use swarmfall_core::constants::*;
use swarmfall_core::enums::{EnemyKind, PoolKind};
use swarmfall_core::state::EnemyView;

use crate::pool::Poolable;

/// Base-stat row of the enemy table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub base_hp: f32,
    pub base_damage: f32,
    pub base_speed: f32,
    pub speed_variance: f32,
    pub size: f32,
}

/// Per-kind base stats.
pub fn base_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::MonsterRed => EnemyStats {
            base_hp: MONSTER_RED_HP,
            base_damage: MONSTER_RED_DAMAGE,
            base_speed: MONSTER_RED_SPEED,
            speed_variance: MONSTER_RED_SPEED_VARIANCE,
            size: ENEMY_SIZE,
        },
        EnemyKind::MonsterEye => EnemyStats {
            base_hp: MONSTER_EYE_HP,
            base_damage: MONSTER_EYE_DAMAGE,
            base_speed: MONSTER_EYE_SPEED,
            speed_variance: MONSTER_EYE_SPEED_VARIANCE,
            size: ENEMY_SIZE,
        },
        EnemyKind::MonsterSkeleton => EnemyStats {
            base_hp: MONSTER_SKELETON_HP,
            base_damage: MONSTER_SKELETON_DAMAGE,
            base_speed: MONSTER_SKELETON_SPEED,
            speed_variance: MONSTER_SKELETON_SPEED_VARIANCE,
            size: ENEMY_SIZE,
        },
        EnemyKind::BossDemon => EnemyStats {
            base_hp: 0.0,
            base_damage: BOSS_DAMAGE,
            base_speed: BOSS_SPEED,
            speed_variance: BOSS_SPEED_VARIANCE,
            size: BOSS_SIZE,
        },
    }
}

/// A pooled enemy. Bosses share the type and differ by `kind`.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    /// Radians toward the player, refreshed every tick.
    pub heading: f32,
    /// Units per tick.
    pub speed: f32,
    pub hp: f32,
    pub max_hp: f32,
    /// Contact damage.
    pub damage: f32,
    pub size: f32,
    pub anim_frame: u32,
    anim_timer: f32,
    dead: bool,
    pub marked_for_deletion: bool,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            id: 0,
            kind: EnemyKind::default(),
            position: Vec2::ZERO,
            heading: 0.0,
            speed: 0.0,
            hp: 0.0,
            max_hp: 0.0,
            damage: 0.0,
            size: ENEMY_SIZE,
            anim_frame: 0,
            anim_timer: 0.0,
            dead: false,
            marked_for_deletion: false,
        }
    }
}

impl Enemy {
    /// Re-initialise for a new life at `difficulty`.
    pub fn reset(&mut self, id: u32, difficulty: f32, kind: EnemyKind, rng: &mut impl Rng) {
        let stats = base_stats(kind);
        let roll: f32 = rng.gen();
        if kind.is_boss() {
            self.max_hp = BOSS_HP_PER_DIFFICULTY * difficulty;
            self.damage = stats.base_damage;
            self.speed = stats.base_speed + roll * stats.speed_variance;
        } else {
            self.max_hp = stats.base_hp + ENEMY_HP_PER_DIFFICULTY * difficulty;
            self.damage = stats.base_damage + ENEMY_DAMAGE_PER_DIFFICULTY * difficulty;
            self.speed = stats.base_speed + roll * stats.speed_variance * difficulty;
        }
        self.id = id;
        self.kind = kind;
        self.hp = self.max_hp;
        self.size = stats.size;
        self.heading = 0.0;
        self.anim_frame = 0;
        self.anim_timer = 0.0;
        self.dead = false;
        self.marked_for_deletion = false;
    }

    /// Apply damage. Returns `true` only on the call that kills.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.dead {
            return false;
        }
        self.hp = (self.hp - amount.max(0.0)).clamp(0.0, self.max_hp);
        if self.hp <= 0.0 {
            self.dead = true;
            return true;
        }
        false
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    /// Health-bar fill fraction.
    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp > 0.0 {
            self.hp / self.max_hp
        } else {
            0.0
        }
    }

    /// Pool this instance returns to.
    pub fn pool_kind(&self) -> PoolKind {
        if self.kind.is_boss() {
            PoolKind::Boss
        } else {
            PoolKind::Enemy
        }
    }

    /// Turn toward `target` and step `speed` along the new heading.
    pub fn seek(&mut self, target: Vec2) {
        let to = target - self.position;
        self.heading = to.y.atan2(to.x);
        self.position += Vec2::new(self.heading.cos(), self.heading.sin()) * self.speed;
    }

    pub fn advance_animation(&mut self, dt: f32) {
        self.anim_timer += dt;
        while self.anim_timer >= ANIM_FRAME_SECS {
            self.anim_timer -= ANIM_FRAME_SECS;
            self.anim_frame = (self.anim_frame + 1) % ENEMY_ANIM_FRAMES;
        }
    }

    pub fn view(&self) -> EnemyView {
        EnemyView {
            id: self.id,
            kind: self.kind,
            position: self.position,
            heading: self.heading,
            size: self.size,
            hp: self.hp,
            max_hp: self.max_hp,
            anim_frame: self.anim_frame,
        }
    }
}

impl Poolable for Enemy {
    fn on_release(&mut self) {
        self.marked_for_deletion = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spawn(kind: EnemyKind, difficulty: f32) -> Enemy {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut enemy = Enemy::default();
        enemy.reset(1, difficulty, kind, &mut rng);
        enemy
    }

    #[test]
    fn test_reset_scales_with_difficulty() {
        let e = spawn(EnemyKind::MonsterRed, 2.0);
        assert_eq!(e.max_hp, 40.0);
        assert_eq!(e.hp, 40.0);
        assert_eq!(e.damage, 14.0);
        assert!(e.speed >= 0.3 && e.speed <= 0.3 + 0.1 * 2.0);
    }

    #[test]
    fn test_boss_stats() {
        let boss = spawn(EnemyKind::BossDemon, 5.0);
        assert_eq!(boss.max_hp, 25_000.0);
        assert_eq!(boss.size, BOSS_SIZE);
        assert!(boss.speed >= 0.4 && boss.speed <= 0.5);
        assert_eq!(boss.pool_kind(), PoolKind::Boss);
    }

    #[test]
    fn test_take_damage_signals_death_once() {
        let mut e = spawn(EnemyKind::MonsterRed, 0.0);
        assert_eq!(e.max_hp, 20.0);
        assert!(!e.take_damage(15.0));
        assert!(e.take_damage(15.0));
        assert_eq!(e.hp, 0.0);
        assert!(!e.take_damage(15.0));
        assert!(!e.take_damage(0.0));
        assert_eq!(e.hp, 0.0);
    }

    #[test]
    fn test_hp_stays_in_range() {
        let mut e = spawn(EnemyKind::MonsterEye, 1.0);
        for amount in [-50.0, 0.0, 3.5, 1e9, -1.0] {
            e.take_damage(amount);
            assert!(e.hp >= 0.0 && e.hp <= e.max_hp, "hp {} out of range", e.hp);
        }
    }

    #[test]
    fn test_reset_revives() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut e = spawn(EnemyKind::MonsterRed, 1.0);
        e.take_damage(1000.0);
        assert!(e.is_dead());
        e.reset(2, 1.0, EnemyKind::MonsterSkeleton, &mut rng);
        assert!(!e.is_dead());
        assert_eq!(e.hp, e.max_hp);
        assert_eq!(e.kind, EnemyKind::MonsterSkeleton);
    }

    #[test]
    fn test_seek_moves_toward_target() {
        let mut e = spawn(EnemyKind::MonsterRed, 1.0);
        e.position = Vec2::new(100.0, 0.0);
        let before = e.position.distance(Vec2::ZERO);
        e.seek(Vec2::ZERO);
        assert!((e.heading - std::f32::consts::PI).abs() < 1e-5);
        assert!((before - e.position.distance(Vec2::ZERO) - e.speed).abs() < 1e-4);
    }

    #[test]
    fn test_animation_wraps() {
        let mut e = spawn(EnemyKind::MonsterRed, 1.0);
        e.advance_animation(0.25);
        assert_eq!(e.anim_frame, 2);
        e.advance_animation(0.3);
        assert_eq!(e.anim_frame, 1);
    }
}
