//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; systems own all
//! behavior. Every entity carries `Position`; movers carry `Velocity`;
//! rectangular entities carry `Extent`.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// The player craft. Exactly one entity carries this component while a run
/// is active; it is recreated on every (re)start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Current health, in [0, max_health]. Never stored negative.
    pub health: u32,
    pub max_health: u32,
    /// Movement speed (px/s).
    pub speed: f64,
    /// One-hit shield. Setting it again while active is a no-op.
    pub shield: bool,
    /// Remaining invulnerability window (ms), clamped at 0.
    pub invulnerable_timer_ms: f64,
    /// Remaining triple-shot window (ms), clamped at 0.
    pub triple_shot_timer_ms: f64,
    /// Simulated time of the last volley, if any.
    pub last_shot_ms: Option<f64>,
}

/// A projectile in flight. Position is the bullet's center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub radius: f64,
    /// Visual only; gameplay ignores it.
    pub color: String,
    pub damage: u32,
    pub owner: BulletOwner,
}

/// An enemy craft descending through the play area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: u32,
    pub max_health: u32,
    /// Descent speed (px/s). Mirrored in the entity's `Velocity`.
    pub speed: f64,
    /// Score awarded on kill.
    pub score_value: u32,
    /// Simulated time of the last shot (ms).
    pub last_shot_ms: f64,
    /// Interval between shots (ms).
    pub shoot_interval_ms: f64,
}

/// A falling power-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Fall speed (px/s).
    pub speed: f64,
}

/// A cosmetic explosion particle. No gameplay interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub radius: f64,
    pub color: String,
    /// Remaining life fraction in (0, 1]; removed at 0.
    pub life: f64,
    pub max_life: f64,
}

impl Ship {
    /// Whether the invulnerability window is still open.
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_timer_ms > 0.0
    }

    /// Whether triple-shot fire is active.
    pub fn triple_shot_active(&self) -> bool {
        self.triple_shot_timer_ms > 0.0
    }
}
