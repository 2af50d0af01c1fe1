//! Per-frame simulation systems, run in a fixed order by the engine:
//! player control, enemy fire, movement, particle decay, spawning,
//! collision, cleanup.

pub mod cleanup;
pub mod collision;
pub mod enemy_fire;
pub mod movement;
pub mod particles;
pub mod player_control;
pub mod snapshot;
pub mod spawner;
