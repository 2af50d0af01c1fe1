//! Enemy fire system: each enemy shoots a straight-down bullet when its
//! fire interval elapses.

use hecs::World;

use vanguard_core::components::{Bullet, Enemy};
use vanguard_core::constants::*;
use vanguard_core::enums::BulletOwner;
use vanguard_core::types::{Extent, Position, Velocity};

pub fn run(world: &mut World, now_ms: f64) {
    let mut muzzles: Vec<(f64, f64)> = Vec::new();

    for (_entity, (enemy, pos, ext)) in world.query_mut::<(&mut Enemy, &Position, &Extent)>() {
        if now_ms - enemy.last_shot_ms > enemy.shoot_interval_ms {
            enemy.last_shot_ms = now_ms;
            muzzles.push((pos.x + ext.width / 2.0, pos.y + ext.height));
        }
    }

    for (x, y) in muzzles {
        world.spawn((
            Bullet {
                radius: BULLET_RADIUS,
                color: BULLET_COLOR_ENEMY.to_owned(),
                damage: BULLET_DAMAGE,
                owner: BulletOwner::Enemy,
            },
            Position::new(x, y),
            Velocity::new(0.0, ENEMY_BULLET_SPEED),
        ));
    }
}
