//! Per-tick collision resolution.
//!
//! Overlaps are gathered in a read-only pass and applied afterwards; no
//! active list is mutated while it is being scanned.

use glam::Vec2;
use log::info;
use rand::Rng;

use swarmfall_core::constants::*;
use swarmfall_core::enums::PickupKind;
use swarmfall_core::events::AudioCue;
use swarmfall_core::types::Color;

use crate::error::PoolError;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Continue,
    /// An enemy touched the player. The rest of the tick is skipped.
    PlayerDied,
}

/// One projectile overlapping one enemy, by active-list index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub projectile: usize,
    pub enemy: usize,
}

pub fn run(
    world: &mut World,
    rng: &mut impl Rng,
    audio: &mut Vec<AudioCue>,
    hits: &mut Vec<Hit>,
) -> Result<CombatOutcome, PoolError> {
    // Player vs enemy: any contact ends the run.
    let player_pos = world.player.position;
    let player_radius = world.player.radius();
    let touching = world.enemies.iter().any(|e| {
        !e.marked_for_deletion && e.position.distance(player_pos) < player_radius + e.radius()
    });
    if touching {
        world.player.take_damage(world.player.health);
        return Ok(CombatOutcome::PlayerDied);
    }

    // Projectile vs enemy, gather.
    hits.clear();
    for (pi, projectile) in world.projectiles.iter().enumerate() {
        if projectile.marked_for_deletion {
            continue;
        }
        for (ei, enemy) in world.enemies.iter().enumerate() {
            if enemy.is_dead() || enemy.marked_for_deletion {
                continue;
            }
            if enemy.position.distance(projectile.position) < enemy.radius() + projectile.radius {
                hits.push(Hit {
                    projectile: pi,
                    enemy: ei,
                });
                // Linear bolts are spent on their first enemy; orbiters cut through.
                if !projectile.persistent {
                    break;
                }
            }
        }
    }

    // Apply.
    for &hit in hits.iter() {
        apply_hit(world, hit, rng, audio)?;
    }
    Ok(CombatOutcome::Continue)
}

fn apply_hit(
    world: &mut World,
    hit: Hit,
    rng: &mut impl Rng,
    audio: &mut Vec<AudioCue>,
) -> Result<(), PoolError> {
    let projectile = &mut world.projectiles[hit.projectile];
    let damage = projectile.damage;
    let persistent = projectile.persistent;
    if !persistent {
        projectile.marked_for_deletion = true;
    }

    let enemy = &mut world.enemies[hit.enemy];
    if enemy.marked_for_deletion {
        // Already struck by an earlier hit this tick.
        return Ok(());
    }
    // Any hit removes the enemy. Damage still applies to its health.
    let drained = enemy.take_damage(damage);
    enemy.marked_for_deletion = true;
    let at = enemy.position;
    let kind = enemy.kind;
    world.score.score += SCORE_PER_KILL;
    world.score.kills += 1;
    world.spawn_loot(at, PickupKind::Xp, KILL_XP_VALUE)?;
    if kind.is_boss() {
        info!("boss {} defeated", kind.name());
    }

    let jitter = Vec2::new(
        rng.gen_range(-FLOATING_TEXT_JITTER..FLOATING_TEXT_JITTER),
        rng.gen_range(-FLOATING_TEXT_JITTER..FLOATING_TEXT_JITTER),
    );
    let label = format!("{}", damage.round() as i64);
    world.spawn_text(at + jitter, &label, Color::WHITE)?;

    audio.push(AudioCue::Hit {
        kind,
        killed: drained,
    });
    Ok(())
}
