//! Fundamental geometric and simulation-time types.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_FRAME_DELTA_MS;

/// 2D position in play-area space (pixels). x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in play-area space (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Rectangular extent of an entity (pixels). Position is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames processed while in the PLAYING state.
    pub frame: u64,
    /// Elapsed simulated time in milliseconds.
    pub elapsed_ms: f64,
}

/// Converts raw host frame timestamps into bounded time steps.
///
/// The first observed frame yields a zero delta, and every delta is clamped
/// to [`MAX_FRAME_DELTA_MS`] so a backgrounded host cannot produce a step
/// large enough to tunnel entities through collision checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimClock {
    last_ms: Option<f64>,
    time: SimTime,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (px/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Extent {
    pub fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Axis-aligned bounding-box overlap with strict inequality on all four
/// edges. Touching rectangles do not overlap.
pub fn aabb_overlap(a_pos: &Position, a_ext: &Extent, b_pos: &Position, b_ext: &Extent) -> bool {
    a_pos.x < b_pos.x + b_ext.width
        && a_pos.x + a_ext.width > b_pos.x
        && a_pos.y < b_pos.y + b_ext.height
        && a_pos.y + a_ext.height > b_pos.y
}

impl SimClock {
    /// Observe a frame timestamp while the simulation is running.
    /// Returns the bounded delta and accumulates it into elapsed time.
    pub fn observe(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.time.frame += 1;
        self.time.elapsed_ms += delta;
        delta
    }

    /// Observe a frame timestamp while the simulation is frozen (paused,
    /// menu, game over). Updates the reference point without accumulating
    /// time, so resuming does not replay the frozen span.
    pub fn sync(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.time.elapsed_ms
    }
}
