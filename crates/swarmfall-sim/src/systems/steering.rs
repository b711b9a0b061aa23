//! Enemy steering: seek the player, plus separation from close neighbours.
//!
//! Separation compares every enemy against every other enemy, so a tick is
//! O(n²) in the active enemy count. That is fine for a few hundred agents;
//! thousands would need a spatial grid.

use glam::Vec2;

use swarmfall_core::constants::{SEPARATION_RADIUS, SEPARATION_WEIGHT};

use crate::world::World;

pub fn run(world: &mut World, dt: f32) {
    let target = world.player.position;
    // Neighbour positions are read from the start-of-pass snapshot so the
    // result does not depend on iteration order.
    let positions = &mut world.position_buffer;
    positions.clear();
    positions.extend(world.enemies.iter().map(|e| e.position));

    for (index, enemy) in world.enemies.iter_mut().enumerate() {
        if enemy.marked_for_deletion {
            continue;
        }
        enemy.position += separation(index, positions) * SEPARATION_WEIGHT;
        enemy.seek(target);
        enemy.advance_animation(dt);
    }
}

/// Sum of offsets away from every neighbour within the separation radius.
/// Coincident neighbours contribute a zero offset.
pub fn separation(index: usize, positions: &[Vec2]) -> Vec2 {
    let me = positions[index];
    let radius_sq = SEPARATION_RADIUS * SEPARATION_RADIUS;
    positions
        .iter()
        .enumerate()
        .filter(|(other, _)| *other != index)
        .map(|(_, p)| me - *p)
        .filter(|offset| offset.length_squared() < radius_sq)
        .fold(Vec2::ZERO, |acc, offset| acc + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_pushes_apart() {
        let positions = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(100.0, 0.0)];
        assert_eq!(separation(0, &positions), Vec2::new(-10.0, 0.0));
        assert_eq!(separation(1, &positions), Vec2::new(10.0, 0.0));
        assert_eq!(separation(2, &positions), Vec2::ZERO);
    }

    #[test]
    fn test_separation_accumulates() {
        let positions = [Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(0.0, 5.0)];
        assert_eq!(separation(0, &positions), Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_coincident_enemies_are_finite() {
        let positions = [Vec2::ONE, Vec2::ONE];
        let push = separation(0, &positions);
        assert_eq!(push, Vec2::ZERO);
        assert!(push.is_finite());
    }
}
