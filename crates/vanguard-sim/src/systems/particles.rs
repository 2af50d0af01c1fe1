//! Particle effects system: spawns explosion bursts and decays their life.
//! Purely cosmetic; nothing in gameplay reads particles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::components::Particle;
use vanguard_core::constants::*;
use vanguard_core::types::{Position, Velocity};

/// Emit `count` particles scattering from an impact point.
pub fn spawn_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    x: f64,
    y: f64,
    color: &str,
    count: u32,
) {
    for _ in 0..count {
        let vx = rng.gen_range(-PARTICLE_SCATTER_SPEED..PARTICLE_SCATTER_SPEED);
        let vy = rng.gen_range(-PARTICLE_SCATTER_SPEED..PARTICLE_SCATTER_SPEED);
        let radius = rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX);
        world.spawn((
            Particle {
                radius,
                color: color.to_owned(),
                life: 1.0,
                max_life: 1.0,
            },
            Position::new(x, y),
            Velocity::new(vx, vy),
        ));
    }
}

/// Decay particle life linearly over [`PARTICLE_LIFE_MS`] of simulated time
/// and mark expired particles for compaction.
pub fn run(world: &mut World, delta_ms: f64, despawn_buffer: &mut Vec<Entity>) {
    let decay = delta_ms / PARTICLE_LIFE_MS;
    for (entity, particle) in world.query_mut::<&mut Particle>() {
        particle.life -= decay;
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }
}
