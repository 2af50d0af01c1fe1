//! Entity spawn factories.
//!
//! Creates the player craft, enemies, and power-ups with appropriate
//! component bundles. Enemy parameters scale with the current level.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::components::*;
use vanguard_core::constants::*;
use vanguard_core::enums::*;
use vanguard_core::types::{Extent, Position, Velocity};

/// Spawn the player craft centered near the bottom of the play area.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Ship {
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            speed: PLAYER_SPEED,
            shield: false,
            invulnerable_timer_ms: 0.0,
            triple_shot_timer_ms: 0.0,
            last_shot_ms: None,
        },
        Position::new(
            (PLAY_AREA_WIDTH - PLAYER_SIZE) / 2.0,
            PLAY_AREA_HEIGHT - 100.0,
        ),
        Extent::square(PLAYER_SIZE),
    ))
}

/// Spawn an enemy of a randomly rolled kind at a random horizontal offset
/// above the visible area. The roll partitions [0,1) exhaustively.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, level: u32, now_ms: f64) -> hecs::Entity {
    let roll: f64 = rng.gen();
    let kind = if roll > HEAVY_SPAWN_THRESHOLD {
        EnemyKind::Heavy
    } else if roll > FAST_SPAWN_THRESHOLD {
        EnemyKind::Fast
    } else {
        EnemyKind::Basic
    };

    let x = rng.gen_range(0.0..(PLAY_AREA_WIDTH - ENEMY_SIZE));
    spawn_enemy_of_kind(world, kind, level, x, SPAWN_Y, now_ms)
}

/// Spawn a specific enemy kind at a specific position.
pub fn spawn_enemy_of_kind(
    world: &mut World,
    kind: EnemyKind,
    level: u32,
    x: f64,
    y: f64,
    now_ms: f64,
) -> hecs::Entity {
    let (health, speed, score_value) = enemy_stats(kind, level);

    world.spawn((
        Enemy {
            kind,
            health,
            max_health: health,
            speed,
            score_value,
            last_shot_ms: now_ms,
            shoot_interval_ms: enemy_shoot_interval(level),
        },
        Position::new(x, y),
        Velocity::new(0.0, speed),
        Extent::square(ENEMY_SIZE),
    ))
}

/// Spawn a power-up of an evenly rolled kind above the visible area.
pub fn spawn_power_up(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let kind = if rng.gen_bool(0.5) {
        PowerUpKind::TripleShot
    } else {
        PowerUpKind::Shield
    };
    let x = rng.gen_range(0.0..(PLAY_AREA_WIDTH - POWER_UP_SIZE));
    spawn_power_up_of_kind(world, kind, x, SPAWN_Y)
}

/// Spawn a specific power-up kind at a specific position.
pub fn spawn_power_up_of_kind(
    world: &mut World,
    kind: PowerUpKind,
    x: f64,
    y: f64,
) -> hecs::Entity {
    world.spawn((
        PowerUp {
            kind,
            speed: POWER_UP_SPEED,
        },
        Position::new(x, y),
        Velocity::new(0.0, POWER_UP_SPEED),
        Extent::square(POWER_UP_SIZE),
    ))
}

/// Level-scaled enemy parameters: (health, descent speed px/s, score value).
/// Heavies are slow but tough and worth the most; fast craft are fragile
/// but outscore basics.
pub fn enemy_stats(kind: EnemyKind, level: u32) -> (u32, f64, u32) {
    let level = level as f64;
    match kind {
        EnemyKind::Basic => (1, 120.0 + 12.0 * level, 100),
        EnemyKind::Fast => (1, 240.0 + 18.0 * level, 200),
        EnemyKind::Heavy => (3, 60.0 + 6.0 * level, 300),
    }
}

/// Enemy fire interval for the given level, floored so high levels cannot
/// drive it to zero or below.
pub fn enemy_shoot_interval(level: u32) -> f64 {
    (ENEMY_SHOOT_BASE_MS - level as f64 * ENEMY_SHOOT_LEVEL_STEP_MS).max(ENEMY_SHOOT_MIN_MS)
}
