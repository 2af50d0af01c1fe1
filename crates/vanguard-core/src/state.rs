//! Game state snapshot: the complete visible state handed to the
//! rendering and UI layers after each frame.

use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::enums::*;
use crate::events::{AudioEvent, GameEvent, Notification};
use crate::types::{Extent, Position, SimTime};

/// Running statistics for the current run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStats {
    /// Never goes below 0; escape penalties saturate.
    pub score: u32,
    /// Starts at 1, monotonically non-decreasing within a run.
    pub level: u32,
    pub enemies_killed: u32,
    pub enemies_escaped: u32,
    pub power_ups_collected: u32,
    /// Simulated time (ms) at which the run started.
    pub start_ms: f64,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            enemies_killed: 0,
            enemies_escaped: 0,
            power_ups_collected: 0,
            start_ms: 0.0,
        }
    }
}

/// Complete read-only state for one frame. Built after all systems have
/// run; never aliases live world storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub state: GameState,
    /// Absent outside an active run (menu before the first start).
    pub player: Option<ShipView>,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
    pub stats: GameStats,
    pub achievements: Vec<Achievement>,
    /// Live (unexpired) notifications.
    pub notifications: Vec<Notification>,
    /// Gameplay events that occurred this frame.
    pub events: Vec<GameEvent>,
    /// Audio cues that occurred this frame.
    pub audio_events: Vec<AudioEvent>,
}

/// Player craft view, including derived HUD values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub extent: Extent,
    pub health: u32,
    pub max_health: u32,
    pub shield: bool,
    pub invulnerable: bool,
    pub invulnerable_remaining_ms: f64,
    pub triple_shot_remaining_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    /// Bullet center.
    pub position: Position,
    pub radius: f64,
    pub color: String,
    pub owner: BulletOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub extent: Extent,
    pub health: u32,
    pub max_health: u32,
    /// Accent color for fallback-shape rendering.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub position: Position,
    pub extent: Extent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub radius: f64,
    pub color: String,
    /// Remaining life fraction, usable directly as render alpha.
    pub life: f64,
}
