//! Simulation engine for SUBSPACE.
//!
//! Owns the hecs ECS world, runs systems in a fixed order each tick,
//! and produces GameStateSnapshots for the render collaborator.

pub mod component;
pub mod craft;
pub mod crew;
pub mod engine;
pub mod particles;
pub mod projectile;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use subspace_core as core;
