//! Cleanup system: returns deletion-flagged entities to their pools.
//!
//! Runs as its own pass after collision resolution. Surviving entities keep
//! their relative order.

use swarmfall_core::enums::PoolKind;

use crate::error::PoolError;
use crate::pool::{EntityPool, Poolable};
use crate::world::World;

/// Release every marked entity and compact the active lists.
/// Returns the number of entities released.
pub fn run(world: &mut World) -> Result<usize, PoolError> {
    let mut released = 0;
    released += sweep(
        &mut world.enemies,
        &mut world.enemy_pool,
        |e| e.marked_for_deletion,
        |e| e.pool_kind(),
    )?;
    released += sweep(
        &mut world.projectiles,
        &mut world.projectile_pool,
        |p| p.marked_for_deletion,
        |_| PoolKind::Projectile,
    )?;
    released += sweep(
        &mut world.pickups,
        &mut world.pickup_pool,
        |p| p.marked_for_deletion,
        |_| PoolKind::Pickup,
    )?;
    released += sweep(
        &mut world.texts,
        &mut world.text_pool,
        |t| t.marked_for_deletion,
        |_| PoolKind::FloatingText,
    )?;
    Ok(released)
}

/// Split the marked entities off in one pass, then hand them back. The
/// active list is fully compacted before any release can fail.
fn sweep<T: Poolable>(
    active: &mut Vec<T>,
    pool: &mut EntityPool<T>,
    is_marked: impl Fn(&T) -> bool,
    kind_of: impl Fn(&T) -> PoolKind,
) -> Result<usize, PoolError> {
    if !active.iter().any(&is_marked) {
        return Ok(0);
    }
    let (marked, kept): (Vec<T>, Vec<T>) = active.drain(..).partition(|item| is_marked(item));
    *active = kept;
    let released = marked.len();
    for item in marked {
        let kind = kind_of(&item);
        pool.release(kind, item)?;
    }
    Ok(released)
}
