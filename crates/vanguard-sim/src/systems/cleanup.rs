//! Cleanup system: marks out-of-bounds entities, emits escape events, and
//! compacts everything doomed this frame in a single despawn pass.

use hecs::{Entity, World};

use vanguard_core::components::{Bullet, Enemy, PowerUp};
use vanguard_core::constants::*;
use vanguard_core::events::GameEvent;
use vanguard_core::types::Position;

/// Remove entities that left the play area, then drain the despawn buffer.
/// Collision marks from earlier in the frame are compacted here too.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>, despawn_buffer: &mut Vec<Entity>) {
    // Enemies past the bottom edge escape; the score penalty is applied
    // downstream by the tracker. Enemies already doomed (killed or rammed
    // this frame) do not also escape.
    for (entity, (_enemy, pos)) in world.query_mut::<(&Enemy, &Position)>() {
        if pos.y > PLAY_AREA_HEIGHT && !despawn_buffer.contains(&entity) {
            despawn_buffer.push(entity);
            events.push(GameEvent::EnemyEscaped {
                penalty: ESCAPE_PENALTY,
            });
        }
    }

    // Bullets beyond the extended margins.
    for (entity, (_bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        if (pos.y < -BULLET_CULL_MARGIN || pos.y > PLAY_AREA_HEIGHT + BULLET_CULL_MARGIN)
            && !despawn_buffer.contains(&entity)
        {
            despawn_buffer.push(entity);
        }
    }

    // Power-ups that fell past the bottom edge, silently.
    for (entity, (_power_up, pos)) in world.query_mut::<(&PowerUp, &Position)>() {
        if pos.y > PLAY_AREA_HEIGHT && !despawn_buffer.contains(&entity) {
            despawn_buffer.push(entity);
        }
    }

    // Compact. A stale id (already despawned) is a no-op.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
