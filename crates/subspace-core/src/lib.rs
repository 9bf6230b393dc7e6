//! Core types and definitions for the SUBSPACE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the component catalog, geometry and grid transforms, commands,
//! events, state snapshots, configuration and constants.
//! It has no dependency on the ECS, the RNG or any runtime framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod grid;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
