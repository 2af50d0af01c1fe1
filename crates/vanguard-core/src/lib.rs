//! Core types and definitions for the VANGUARD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, achievements, and
//! constants. It has no dependency on any runtime or rendering framework.

pub mod achievements;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
