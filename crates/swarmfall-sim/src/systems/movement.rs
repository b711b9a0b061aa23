//! Movement integration for projectiles and combat text.

use crate::world::World;

/// Advance every projectile along its motion and age linear ones.
pub fn run(world: &mut World, dt: f32) {
    let anchor = world.player.position;
    for projectile in &mut world.projectiles {
        projectile.update(anchor, dt);
    }
}

/// Drift and fade floating text.
pub fn update_texts(world: &mut World, dt: f32) {
    for text in &mut world.texts {
        text.update(dt);
    }
}
