//! ECS marker components for hecs entities.
//!
//! Markers are plain data with no methods. The craft and projectile
//! aggregates themselves live in `subspace-sim`.

use serde::{Deserialize, Serialize};

/// Marks the craft flown by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an AI-controlled craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Adversary;
