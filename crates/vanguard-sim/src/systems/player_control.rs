//! Player control system: movement from input intent, boundary clamping,
//! power-up/invulnerability timer decay, and fire control.

use hecs::World;

use vanguard_core::components::{Bullet, Ship};
use vanguard_core::constants::*;
use vanguard_core::enums::BulletOwner;
use vanguard_core::events::AudioEvent;
use vanguard_core::types::{Extent, Position, Velocity};

use crate::engine::InputState;

/// Run player movement, timers, and firing for one frame.
pub fn run(
    world: &mut World,
    input: &InputState,
    now_ms: f64,
    delta_ms: f64,
    audio_events: &mut Vec<AudioEvent>,
) {
    let dt = delta_ms / 1000.0;

    // (muzzle x, muzzle y, triple shot active)
    let mut volley: Option<(f64, f64, bool)> = None;

    for (_entity, (ship, pos, ext)) in world.query_mut::<(&mut Ship, &mut Position, &Extent)>() {
        // Keyboard-style direction vector.
        pos.x += input.move_dx * ship.speed * dt;
        pos.y += input.move_dy * ship.speed * dt;

        // Pointer steering: head toward the target at boosted speed, with a
        // small dead zone to avoid jitter around the cursor.
        if let Some(target) = input.pointer {
            let dx = target.x - (pos.x + ext.width / 2.0);
            let dy = target.y - (pos.y + ext.height / 2.0);
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > POINTER_DEADZONE {
                let step = (ship.speed * POINTER_SPEED_FACTOR * dt).min(dist);
                pos.x += dx / dist * step;
                pos.y += dy / dist * step;
            }
        }

        // The player never leaves the play area.
        pos.x = pos.x.clamp(0.0, PLAY_AREA_WIDTH - ext.width);
        pos.y = pos.y.clamp(0.0, PLAY_AREA_HEIGHT - ext.height);

        // Timers decay toward zero and stop there.
        ship.invulnerable_timer_ms = (ship.invulnerable_timer_ms - delta_ms).max(0.0);
        ship.triple_shot_timer_ms = (ship.triple_shot_timer_ms - delta_ms).max(0.0);

        // Fire control: held fire key or active pointer both shoot.
        let wants_fire = input.firing || input.pointer.is_some();
        if wants_fire {
            let ready = match ship.last_shot_ms {
                None => true,
                Some(last) => now_ms - last > FIRE_COOLDOWN_MS,
            };
            if ready {
                ship.last_shot_ms = Some(now_ms);
                volley = Some((pos.x + ext.width / 2.0, pos.y, ship.triple_shot_active()));
            }
        }
    }

    if let Some((x, y, triple)) = volley {
        audio_events.push(AudioEvent::Shoot);
        if triple {
            spawn_player_bullet(world, x, y, 0.0, BULLET_COLOR_TRIPLE);
            spawn_player_bullet(world, x, y, -TRIPLE_SPREAD_SPEED, BULLET_COLOR_TRIPLE);
            spawn_player_bullet(world, x, y, TRIPLE_SPREAD_SPEED, BULLET_COLOR_TRIPLE);
        } else {
            spawn_player_bullet(world, x, y, 0.0, BULLET_COLOR_PLAYER);
        }
    }
}

fn spawn_player_bullet(world: &mut World, x: f64, y: f64, vx: f64, color: &str) {
    world.spawn((
        Bullet {
            radius: BULLET_RADIUS,
            color: color.to_owned(),
            damage: BULLET_DAMAGE,
            owner: BulletOwner::Player,
        },
        Position::new(x, y),
        Velocity::new(vx, -BULLET_SPEED),
    ));
}
