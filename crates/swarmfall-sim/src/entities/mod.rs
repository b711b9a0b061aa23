//! Pooled entity types.

pub mod enemy;
pub mod floating_text;
pub mod pickup;
pub mod projectile;

pub use enemy::Enemy;
pub use floating_text::FloatingText;
pub use pickup::Pickup;
pub use projectile::{Motion, Projectile};
