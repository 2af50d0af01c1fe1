//! Events emitted by the simulation for the UI, achievement, and audio
//! layers. All are fire-and-forget: the simulation never waits on a
//! consumer.

use serde::{Deserialize, Serialize};

use crate::achievements::AchievementId;
use crate::enums::PowerUpKind;

/// Discrete gameplay events produced during a single frame. Kills, escapes,
/// and pickups are emitted by collision/cleanup; level-ups and unlocks are
/// derived from them by the score tracker in the same frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy was destroyed by player fire. Emitted exactly once per
    /// enemy death.
    EnemyKilled { score_value: u32 },
    /// An enemy crossed the bottom edge uncontested.
    EnemyEscaped { penalty: u32 },
    /// The player picked up a power-up.
    PowerUpCollected { kind: PowerUpKind },
    /// Cumulative kills crossed a level threshold; the live wave was
    /// cleared.
    LevelUp { level: u32 },
    /// An achievement latched from locked to unlocked.
    AchievementUnlocked { id: AchievementId },
}

/// Audio cues for the host sound system. The audio layer may no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    Shoot,
    Explosion,
}

/// What a transient on-screen notification announces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NotificationKind {
    AchievementUnlocked { id: AchievementId },
    LevelUp { level: u32 },
    EnemyEscaped { penalty: u32 },
}

/// A timed notification. Queued with an absolute expiry in simulated time
/// and pruned each frame, so tests can step time deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Simulated time (ms) at which this notification disappears.
    pub expires_at_ms: f64,
}
