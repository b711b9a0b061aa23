//! Weapons: the shared cooldown base, the projectile and orbital variants,
//! and the evolution manager that owns the active loadout.

pub mod evolution;
pub mod orbital_weapon;
pub mod projectile_weapon;

use swarmfall_core::constants::{WEAPON_UPGRADE_COOLDOWN, WEAPON_UPGRADE_DAMAGE};
use swarmfall_core::enums::WeaponKind;
use swarmfall_core::events::AudioCue;
use swarmfall_core::state::WeaponView;

use crate::entities::{Enemy, Projectile};
use crate::error::PoolError;
use crate::player::Player;
use crate::pool::EntityPool;
use crate::world::{IdAllocator, World};

pub use evolution::EvolutionManager;
pub use orbital_weapon::OrbitalWeapon;
pub use projectile_weapon::ProjectileWeapon;

/// Tunable weapon numbers. `count` is fractional so upgrades can grow it
/// gradually; only its floor is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub damage: f32,
    /// Seconds between volleys.
    pub cooldown: f32,
    pub count: f32,
    /// Projectile weapons: travel speed stat. Orbital weapons: radians per second.
    pub speed: f32,
    /// Orbit radius multiplier.
    pub area: f32,
    pub duration: f32,
}

impl WeaponStats {
    pub const DEFAULT: WeaponStats = WeaponStats {
        damage: 10.0,
        cooldown: 1.0,
        count: 1.0,
        speed: 10.0,
        area: 1.0,
        duration: 1.0,
    };

    /// Whole projectiles per volley (or orbiters).
    pub fn whole_count(&self) -> usize {
        self.count.max(0.0).floor() as usize
    }
}

impl Default for WeaponStats {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: WeaponKind,
    pub stats: WeaponStats,
}

/// State shared by every weapon variant.
#[derive(Debug, Clone)]
pub struct WeaponBase {
    pub id: String,
    pub name: String,
    pub kind: WeaponKind,
    pub base_stats: WeaponStats,
    pub current_stats: WeaponStats,
    pub cooldown_timer: f32,
    pub level: u32,
}

impl WeaponBase {
    pub fn new(template: &WeaponTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            name: template.name.to_string(),
            kind: template.kind,
            base_stats: template.stats,
            current_stats: template.stats,
            cooldown_timer: 0.0,
            level: 1,
        }
    }

    /// Accumulate `dt`. When the cooldown has elapsed and `can_fire` holds,
    /// reset the timer to exactly zero and report that the weapon fires.
    /// Overflow past the cooldown is discarded.
    pub fn ready(&mut self, dt: f32, can_fire: bool) -> bool {
        self.cooldown_timer += dt;
        if self.cooldown_timer >= self.current_stats.cooldown && can_fire {
            self.cooldown_timer = 0.0;
            return true;
        }
        false
    }

    /// Compounding damage and cooldown improvement.
    pub fn upgrade(&mut self) {
        self.current_stats.damage *= WEAPON_UPGRADE_DAMAGE;
        self.current_stats.cooldown *= WEAPON_UPGRADE_COOLDOWN;
        self.level += 1;
    }

    pub fn view(&self) -> WeaponView {
        WeaponView {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            level: self.level,
            damage: self.current_stats.damage,
            cooldown: self.current_stats.cooldown,
            cooldown_timer: self.cooldown_timer,
            count: self.current_stats.count,
            speed: self.current_stats.speed,
            area: self.current_stats.area,
        }
    }
}

/// What a weapon may read and emit during its update.
pub struct WeaponContext<'a> {
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a mut Vec<Projectile>,
    pub pool: &'a mut EntityPool<Projectile>,
    pub ids: &'a mut IdAllocator,
    pub audio: &'a mut Vec<AudioCue>,
}

impl<'a> WeaponContext<'a> {
    pub fn new(world: &'a mut World, audio: &'a mut Vec<AudioCue>) -> Self {
        Self {
            player: &world.player,
            enemies: &world.enemies,
            projectiles: &mut world.projectiles,
            pool: &mut world.projectile_pool,
            ids: &mut world.ids,
            audio,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Weapon {
    Projectile(ProjectileWeapon),
    Orbital(OrbitalWeapon),
}

impl Weapon {
    pub fn from_template(template: &WeaponTemplate) -> Self {
        match template.kind {
            WeaponKind::Projectile => Weapon::Projectile(ProjectileWeapon::new(template)),
            WeaponKind::Orbital => Weapon::Orbital(OrbitalWeapon::new(template)),
        }
    }

    pub fn base(&self) -> &WeaponBase {
        match self {
            Weapon::Projectile(w) => &w.base,
            Weapon::Orbital(w) => &w.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut WeaponBase {
        match self {
            Weapon::Projectile(w) => &mut w.base,
            Weapon::Orbital(w) => &mut w.base,
        }
    }

    /// Advance one tick. Returns `true` when a volley left the weapon.
    pub fn update(&mut self, dt: f32, ctx: &mut WeaponContext<'_>) -> Result<bool, PoolError> {
        match self {
            Weapon::Projectile(w) => w.update(dt, ctx),
            Weapon::Orbital(w) => w.update(dt, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(cooldown: f32) -> WeaponBase {
        WeaponBase::new(&WeaponTemplate {
            id: "test",
            name: "Test",
            description: "",
            kind: WeaponKind::Projectile,
            stats: WeaponStats {
                cooldown,
                ..WeaponStats::DEFAULT
            },
        })
    }

    #[test]
    fn test_cooldown_overflow_is_discarded() {
        let mut w = base(1.0);
        assert!(!w.ready(0.75, true));
        assert!(w.ready(0.5, true));
        assert_eq!(w.cooldown_timer, 0.0);
    }

    #[test]
    fn test_cooldown_waits_for_can_fire() {
        let mut w = base(1.0);
        assert!(!w.ready(1.5, false));
        assert_eq!(w.cooldown_timer, 1.5);
        assert!(w.ready(0.0, true));
        assert_eq!(w.cooldown_timer, 0.0);
    }

    #[test]
    fn test_upgrade_compounds() {
        let mut w = base(1.0);
        w.upgrade();
        w.upgrade();
        assert!((w.current_stats.damage - 10.0 * 1.1 * 1.1).abs() < 1e-4);
        assert!((w.current_stats.cooldown - 0.81).abs() < 1e-5);
        assert_eq!(w.level, 3);
        assert_eq!(w.base_stats.damage, 10.0);
    }

    #[test]
    fn test_whole_count_floors() {
        let stats = WeaponStats {
            count: 2.9,
            ..WeaponStats::DEFAULT
        };
        assert_eq!(stats.whole_count(), 2);
    }
}
