//! Snapshot system: queries the ECS world and builds a complete
//! GameSnapshot. It never modifies the world, and the result shares no
//! storage with it.

use hecs::World;

use vanguard_core::components::*;
use vanguard_core::enums::GameState;
use vanguard_core::events::{AudioEvent, GameEvent};
use vanguard_core::state::*;
use vanguard_core::types::{Extent, Position, SimTime};

use crate::progress::Progress;

pub fn build(
    world: &World,
    time: SimTime,
    state: GameState,
    progress: &Progress,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time,
        state,
        player: build_player(world),
        bullets: build_bullets(world),
        enemies: build_enemies(world),
        power_ups: build_power_ups(world),
        particles: build_particles(world),
        stats: progress.stats.clone(),
        achievements: progress.achievements.clone(),
        notifications: progress.notifications.clone(),
        events,
        audio_events,
    }
}

fn build_player(world: &World) -> Option<ShipView> {
    let mut query = world.query::<(&Ship, &Position, &Extent)>();
    query.iter().next().map(|(_, (ship, pos, ext))| ShipView {
        position: *pos,
        extent: *ext,
        health: ship.health,
        max_health: ship.max_health,
        shield: ship.shield,
        invulnerable: ship.is_invulnerable(),
        invulnerable_remaining_ms: ship.invulnerable_timer_ms,
        triple_shot_remaining_ms: ship.triple_shot_timer_ms,
    })
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut query = world.query::<(&Bullet, &Position)>();
    query
        .iter()
        .map(|(_, (bullet, pos))| BulletView {
            position: *pos,
            radius: bullet.radius,
            color: bullet.color.clone(),
            owner: bullet.owner,
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut query = world.query::<(&Enemy, &Position, &Extent)>();
    query
        .iter()
        .map(|(_, (enemy, pos, ext))| EnemyView {
            kind: enemy.kind,
            position: *pos,
            extent: *ext,
            health: enemy.health,
            max_health: enemy.max_health,
            color: enemy.kind.color().to_owned(),
        })
        .collect()
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut query = world.query::<(&PowerUp, &Position, &Extent)>();
    query
        .iter()
        .map(|(_, (power_up, pos, ext))| PowerUpView {
            kind: power_up.kind,
            position: *pos,
            extent: *ext,
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut query = world.query::<(&Particle, &Position)>();
    query
        .iter()
        .map(|(_, (particle, pos))| ParticleView {
            position: *pos,
            radius: particle.radius,
            color: particle.color.clone(),
            life: particle.life.max(0.0),
        })
        .collect()
}
