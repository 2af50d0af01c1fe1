//! Collision detection and resolution.
//!
//! Runs once per frame, after movement and spawning, in this order:
//! enemy vs player, bullet vs enemy, player vs power-up, bullet vs player.
//! Every pair uses strict-inequality AABB overlap; bullets collide through
//! the square circumscribing their radius.
//!
//! Entities are never removed mid-iteration. Resolution marks them in the
//! shared despawn buffer (checked so each entity resolves at most once per
//! frame) and the cleanup system compacts the world afterward.

use std::collections::HashSet;

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use vanguard_core::components::{Bullet, Enemy, PowerUp, Ship};
use vanguard_core::constants::*;
use vanguard_core::enums::{BulletOwner, PowerUpKind};
use vanguard_core::events::{AudioEvent, GameEvent};
use vanguard_core::types::{aabb_overlap, Extent, Position};

use super::particles;

/// A bullet's hitbox captured before the pairwise passes.
struct Shot {
    entity: Entity,
    top_left: Position,
    extent: Extent,
    damage: u32,
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let Some((player, player_pos, player_ext)) = player_hull(world) else {
        return;
    };

    // ---- Enemy vs player ----
    // Collect all contacts first, then resolve sequentially so a hit that
    // opens the invulnerability window suppresses later contacts in the
    // same frame.
    let contacts: Vec<Entity> = {
        let mut query = world.query::<(&Enemy, &Position, &Extent)>();
        query
            .iter()
            .filter(|(_, (_, pos, ext))| aabb_overlap(pos, ext, &player_pos, &player_ext))
            .map(|(entity, _)| entity)
            .collect()
    };
    for enemy in contacts {
        let invulnerable = world
            .get::<&Ship>(player)
            .map(|s| s.is_invulnerable())
            .unwrap_or(true);
        if invulnerable {
            // No effect: the enemy passes through.
            continue;
        }
        if !mark(despawn_buffer, enemy) {
            continue;
        }
        // Contact always removes the enemy, lethal to the player or not,
        // and never awards kill score.
        resolve_ship_hit(world, rng, player, audio_events);
    }

    // ---- Bullet vs enemy ----
    // Player bullets are snapshotted in encounter order; each enemy takes
    // hits independently until it dies, at which point exactly one kill
    // event is recorded and remaining bullets pass through.
    let shots = collect_shots(world, BulletOwner::Player);
    let mut spent: HashSet<Entity> = HashSet::new();
    let mut kills: Vec<(Entity, Position, &'static str, u32)> = Vec::new();
    for (enemy_entity, (enemy, pos, ext)) in
        world.query_mut::<(&mut Enemy, &Position, &Extent)>()
    {
        if despawn_buffer.contains(&enemy_entity) {
            continue;
        }
        for shot in &shots {
            if spent.contains(&shot.entity) {
                continue;
            }
            if !aabb_overlap(&shot.top_left, &shot.extent, pos, ext) {
                continue;
            }
            spent.insert(shot.entity);
            enemy.health = enemy.health.saturating_sub(shot.damage);
            if enemy.health == 0 {
                kills.push((
                    enemy_entity,
                    Position::new(pos.x + ext.width / 2.0, pos.y + ext.height / 2.0),
                    enemy.kind.color(),
                    enemy.score_value,
                ));
                break;
            }
        }
    }
    for (entity, center, color, score_value) in kills {
        if !mark(despawn_buffer, entity) {
            continue;
        }
        audio_events.push(AudioEvent::Explosion);
        particles::spawn_burst(world, rng, center.x, center.y, color, EXPLOSION_PARTICLES);
        events.push(GameEvent::EnemyKilled { score_value });
    }
    // Marked in encounter order; set iteration order must not leak into
    // the despawn sequence.
    for shot in &shots {
        if spent.contains(&shot.entity) {
            mark(despawn_buffer, shot.entity);
        }
    }

    // ---- Player vs power-up ----
    let picked: Vec<(Entity, PowerUpKind)> = {
        let mut query = world.query::<(&PowerUp, &Position, &Extent)>();
        query
            .iter()
            .filter(|(_, (_, pos, ext))| aabb_overlap(&player_pos, &player_ext, pos, ext))
            .map(|(entity, (power_up, _, _))| (entity, power_up.kind))
            .collect()
    };
    for (entity, kind) in picked {
        if !mark(despawn_buffer, entity) {
            continue;
        }
        if let Ok(mut ship) = world.get::<&mut Ship>(player) {
            match kind {
                // Restart, not stack: reacquisition resets the window.
                PowerUpKind::TripleShot => ship.triple_shot_timer_ms = TRIPLE_SHOT_MS,
                // Idempotent while already shielded.
                PowerUpKind::Shield => ship.shield = true,
            }
        }
        events.push(GameEvent::PowerUpCollected { kind });
    }

    // ---- Bullet vs player ----
    let shots = collect_shots(world, BulletOwner::Enemy);
    for shot in shots {
        if despawn_buffer.contains(&shot.entity) {
            continue;
        }
        if !aabb_overlap(&shot.top_left, &shot.extent, &player_pos, &player_ext) {
            continue;
        }
        let invulnerable = world
            .get::<&Ship>(player)
            .map(|s| s.is_invulnerable())
            .unwrap_or(true);
        if invulnerable {
            continue;
        }
        mark(despawn_buffer, shot.entity);
        resolve_ship_hit(world, rng, player, audio_events);
    }
}

/// The player craft's entity and hull, if a run is active.
fn player_hull(world: &World) -> Option<(Entity, Position, Extent)> {
    let mut query = world.query::<(&Ship, &Position, &Extent)>();
    query
        .iter()
        .next()
        .map(|(entity, (_, pos, ext))| (entity, *pos, *ext))
}

/// Snapshot the hitboxes of all bullets with the given owner, in encounter
/// order.
fn collect_shots(world: &World, owner: BulletOwner) -> Vec<Shot> {
    let mut query = world.query::<(&Bullet, &Position)>();
    query
        .iter()
        .filter(|(_, (bullet, _))| bullet.owner == owner)
        .map(|(entity, (bullet, pos))| Shot {
            entity,
            top_left: Position::new(pos.x - bullet.radius, pos.y - bullet.radius),
            extent: Extent::square(bullet.radius * 2.0),
            damage: bullet.damage,
        })
        .collect()
}

/// Apply one hit to the player: the shield absorbs it, otherwise health
/// drops by 1 and (if the hit was survivable) the invulnerability window
/// opens. The terminal transition to GameOver is the engine's job; health
/// simply reaches 0 here.
fn resolve_ship_hit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    audio_events: &mut Vec<AudioEvent>,
) {
    let center = {
        let Ok(pos) = world.get::<&Position>(player) else {
            return;
        };
        let Ok(ext) = world.get::<&Extent>(player) else {
            return;
        };
        Position::new(pos.x + ext.width / 2.0, pos.y + ext.height / 2.0)
    };

    let burst_color = {
        let Ok(mut ship) = world.get::<&mut Ship>(player) else {
            return;
        };
        if ship.shield {
            ship.shield = false;
            SHIELD_BURST_COLOR
        } else {
            ship.health = ship.health.saturating_sub(1);
            if ship.health > 0 {
                ship.invulnerable_timer_ms = INVULNERABILITY_MS;
            }
            HULL_BURST_COLOR
        }
    };

    audio_events.push(AudioEvent::Explosion);
    particles::spawn_burst(
        world,
        rng,
        center.x,
        center.y,
        burst_color,
        PLAYER_HIT_PARTICLES,
    );
}

/// Mark an entity for removal. Returns false if it was already marked this
/// frame, so no entity is resolved twice.
fn mark(despawn_buffer: &mut Vec<Entity>, entity: Entity) -> bool {
    if despawn_buffer.contains(&entity) {
        return false;
    }
    despawn_buffer.push(entity);
    true
}
