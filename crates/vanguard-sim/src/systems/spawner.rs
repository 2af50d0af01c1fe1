//! Spawn scheduler: injects enemies and power-ups on accumulated simulated
//! time. Both cadences are pure functions of elapsed time, level, and the
//! seeded RNG stream. No host timers are involved.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use vanguard_core::constants::*;

use crate::world_setup;

/// Accumulators for the two independent spawn cadences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimers {
    enemy_accum_ms: f64,
    power_up_accum_ms: f64,
}

/// Interval between enemy spawns at the given level. Shortens as the level
/// climbs.
pub fn enemy_spawn_interval(level: u32) -> f64 {
    ENEMY_SPAWN_BASE_MS / (1.0 + level as f64 * SPAWN_RATE_LEVEL_FACTOR)
}

/// Accumulate `delta_ms` and spawn everything that came due. A long frame
/// can produce multiple spawns; none are lost.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut SpawnTimers,
    level: u32,
    now_ms: f64,
    delta_ms: f64,
) {
    timers.enemy_accum_ms += delta_ms;
    let interval = enemy_spawn_interval(level);
    while timers.enemy_accum_ms >= interval {
        timers.enemy_accum_ms -= interval;
        world_setup::spawn_enemy(world, rng, level, now_ms);
    }

    timers.power_up_accum_ms += delta_ms;
    while timers.power_up_accum_ms >= POWER_UP_SPAWN_MS {
        timers.power_up_accum_ms -= POWER_UP_SPAWN_MS;
        world_setup::spawn_power_up(world, rng);
    }
}
