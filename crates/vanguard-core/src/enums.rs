//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game state. Transitions:
/// Start/GameOver -> Playing (StartGame), Playing <-> Paused (TogglePause),
/// Playing -> GameOver (player health reaches 0),
/// Paused/GameOver -> Start (QuitToMenu).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Enemy craft category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline craft: average speed, 1 hull point.
    #[default]
    Basic,
    /// Fragile but quick, worth double.
    Fast,
    /// Slow, 3 hull points, worth triple.
    Heavy,
}

/// Power-up category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Three-way spread fire for a fixed duration; reacquiring restarts
    /// the timer rather than stacking.
    TripleShot,
    /// Absorbs exactly one hit from any source.
    Shield,
}

/// Which side fired a bullet; determines its target set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl EnemyKind {
    /// Accent color used for fallback rendering and explosion particles.
    pub fn color(&self) -> &'static str {
        match self {
            EnemyKind::Basic => "#3b82f6",
            EnemyKind::Fast => "#fbbf24",
            EnemyKind::Heavy => "#ef4444",
        }
    }
}
