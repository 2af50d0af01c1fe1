//! Kinematic integration system.
//!
//! Updates Position from Velocity for every mover: position += velocity * dt.
//! The player craft carries no Velocity; player_control moves it directly
//! from input intent.

use hecs::World;

use vanguard_core::types::{Position, Velocity};

/// Integrate all entities with Position + Velocity over `delta_ms`.
pub fn run(world: &mut World, delta_ms: f64) {
    let dt = delta_ms / 1000.0;
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}
