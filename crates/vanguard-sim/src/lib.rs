//! Simulation engine for VANGUARD.
//!
//! Owns the hecs ECS world, runs systems once per host frame with a bounded
//! time step, and produces GameSnapshots for the presentation layers.

pub mod engine;
pub mod progress;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use vanguard_core as core;
