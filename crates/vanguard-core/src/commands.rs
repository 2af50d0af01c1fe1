//! Player commands sent from the host shell to the simulation.
//!
//! Commands are queued and processed at the next frame boundary, before any
//! system runs. The input layer is expected to pre-normalize raw
//! keyboard/mouse/touch state into these intents.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new run from the menu or the game-over screen. Reinitializes
    /// entities and stats; session achievements persist.
    StartGame,
    /// Toggle Playing <-> Paused. Edge-triggered; ignored elsewhere.
    TogglePause,
    /// Return to the menu from Paused or GameOver.
    QuitToMenu,
    /// Set the movement direction. Components are expected in [-1, 1];
    /// they are clamped on receipt.
    SetMovement { dx: f64, dy: f64 },
    /// Set whether the fire control is held.
    SetFiring { firing: bool },
    /// Steer toward a pointer position in play-area coordinates. Positions
    /// are clamped to the overscan margin around the play area.
    SetPointer { x: f64, y: f64 },
    /// Release pointer steering (touch lifted, cursor left the area).
    ClearPointer,
}
