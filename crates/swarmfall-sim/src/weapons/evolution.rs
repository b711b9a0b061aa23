//! Weapon catalogue, active loadout and level-up upgrades.

use log::info;

use swarmfall_core::constants::*;
use swarmfall_core::enums::WeaponKind;
use swarmfall_core::state::WeaponView;
use swarmfall_core::upgrades::{UpgradeKind, UpgradeOption};

use super::{Weapon, WeaponContext, WeaponStats, WeaponTemplate};
use crate::error::PoolError;
use crate::player::Player;

/// Every weapon the player can own.
pub const CATALOGUE: [WeaponTemplate; 3] = [
    WeaponTemplate {
        id: "crossbow",
        name: "Crossbow",
        description: "Fires a bolt at the nearest enemy",
        kind: WeaponKind::Projectile,
        stats: WeaponStats {
            damage: 15.0,
            cooldown: 1.0,
            count: 1.0,
            speed: 10.0,
            ..WeaponStats::DEFAULT
        },
    },
    WeaponTemplate {
        id: "multishot_bow",
        name: "Triple Bow",
        description: "Fires a spread of three arrows",
        kind: WeaponKind::Projectile,
        stats: WeaponStats {
            damage: 8.0,
            cooldown: 1.5,
            count: 3.0,
            speed: 12.0,
            ..WeaponStats::DEFAULT
        },
    },
    WeaponTemplate {
        id: "blade_orbit",
        name: "Cyclonic Blades",
        description: "Blades circle you and cut through enemies",
        kind: WeaponKind::Orbital,
        stats: WeaponStats {
            damage: 5.0,
            cooldown: 0.0,
            count: 2.0,
            speed: 2.0,
            area: 1.0,
            ..WeaponStats::DEFAULT
        },
    },
];

/// Weapons granted at the start of every run.
pub const STARTING_LOADOUT: [&str; 2] = ["crossbow", "blade_orbit"];

pub fn template(id: &str) -> Option<&'static WeaponTemplate> {
    CATALOGUE.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, Default)]
pub struct EvolutionManager {
    weapons: Vec<Weapon>,
}

impl EvolutionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loadout with the starting weapons.
    pub fn init(&mut self) {
        self.weapons.clear();
        for id in STARTING_LOADOUT {
            self.add_weapon(id);
        }
    }

    /// Add a catalogue weapon. Unknown ids are ignored.
    pub fn add_weapon(&mut self, id: &str) -> bool {
        let Some(template) = template(id) else {
            return false;
        };
        self.weapons.push(Weapon::from_template(template));
        info!("added weapon: {}", template.name);
        true
    }

    pub fn has_weapon(&self, id: &str) -> bool {
        self.weapons.iter().any(|w| w.base().id == id)
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn weapons_mut(&mut self) -> &mut [Weapon] {
        &mut self.weapons
    }

    /// Advance every weapon. Returns `true` if any emitted a volley.
    pub fn update(&mut self, dt: f32, ctx: &mut WeaponContext<'_>) -> Result<bool, PoolError> {
        let mut fired = false;
        for weapon in &mut self.weapons {
            fired |= weapon.update(dt, ctx)?;
        }
        Ok(fired)
    }

    /// Level-up menu: heal, swiftness, might, then the first weapon not yet
    /// owned (or a sharpen-all when the catalogue is exhausted).
    pub fn get_upgrades(&self, n: usize) -> Vec<UpgradeOption> {
        let mut options = vec![
            UpgradeOption::new(
                "Second Wind",
                format!("Recover {HEAL_AMOUNT} HP"),
                UpgradeKind::Heal {
                    amount: HEAL_AMOUNT,
                },
            ),
            UpgradeOption::new(
                "Swiftness",
                "+10% movement speed",
                UpgradeKind::Swiftness {
                    multiplier: SWIFTNESS_MULTIPLIER,
                },
            ),
            UpgradeOption::new(
                "Might",
                "+10% damage on every weapon",
                UpgradeKind::Might {
                    multiplier: MIGHT_MULTIPLIER,
                },
            ),
        ];
        match CATALOGUE.iter().find(|t| !self.has_weapon(t.id)) {
            Some(t) => options.push(UpgradeOption::new(
                t.name,
                t.description,
                UpgradeKind::NewWeapon {
                    weapon_id: t.id.to_string(),
                },
            )),
            None => options.push(UpgradeOption::new(
                "Sharpen",
                "Upgrade every weapon",
                UpgradeKind::Sharpen,
            )),
        }
        options.truncate(n);
        options
    }

    pub fn apply_upgrade(&mut self, option: &UpgradeOption, player: &mut Player) {
        match &option.kind {
            UpgradeKind::Heal { amount } => player.heal(*amount),
            UpgradeKind::Swiftness { multiplier } => player.move_speed *= multiplier,
            UpgradeKind::Might { multiplier } => {
                for weapon in &mut self.weapons {
                    weapon.base_mut().current_stats.damage *= multiplier;
                }
            }
            UpgradeKind::Sharpen => {
                for weapon in &mut self.weapons {
                    weapon.base_mut().upgrade();
                }
            }
            UpgradeKind::NewWeapon { weapon_id } => {
                self.add_weapon(weapon_id);
            }
        }
        info!("applied upgrade: {}", option.name);
    }

    pub fn views(&self) -> Vec<WeaponView> {
        self.weapons.iter().map(|w| w.base().view()).collect()
    }
}
