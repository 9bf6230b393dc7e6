//! SUBSPACE headless launcher.
//!
//! Wires the simulation crates to a fixed-rate game loop thread and a
//! scripted autopilot standing in for keyboard input.

pub mod autopilot;
pub mod game_loop;
pub mod launcher;
pub mod state;

pub use subspace_core as core;
