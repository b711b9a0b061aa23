//! Loot attraction and collection.

use log::debug;

use swarmfall_core::constants::PICKUP_SIZE;
use swarmfall_core::enums::PickupKind;

use crate::world::World;

/// Attract pickups toward the player and apply the ones collected.
/// Returns how many level-ups the collected XP caused.
pub fn run(world: &mut World, dt: f32) -> u32 {
    let player_pos = world.player.position;
    let pickup_radius = world.player.pickup_radius;
    let collect_distance = world.player.radius() + PICKUP_SIZE;

    let mut level_ups = 0;
    for pickup in &mut world.pickups {
        if !pickup.update(player_pos, pickup_radius, collect_distance, dt) {
            continue;
        }
        match pickup.kind {
            PickupKind::Xp => {
                if let Some(level) = world.player.gain_xp(pickup.value) {
                    debug!("reached level {level}");
                    level_ups += 1;
                }
            }
            PickupKind::Gold => world.score.gold += pickup.value,
            PickupKind::Health => world.player.heal(pickup.value as f32),
        }
    }
    level_ups
}
