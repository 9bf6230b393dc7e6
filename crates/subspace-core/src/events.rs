//! Events emitted by the simulation for effects, audio and UI feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::CraftId;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A weapon component emitted a projectile.
    WeaponFired {
        craft: CraftId,
        kind: ProjectileKind,
        position: DVec2,
        angle: f64,
    },
    /// An engine cell produced thrust this tick.
    EngineThrust {
        craft: CraftId,
        position: DVec2,
        angle: f64,
        power: f64,
    },
    /// A projectile struck a craft.
    ProjectileHit {
        target: CraftId,
        owner: CraftId,
        position: DVec2,
        damage: u32,
        /// Kind of the component knocked out by the hit, if any.
        destroyed_component: Option<ComponentKind>,
    },
    /// A craft lost its last core.
    CraftDestroyed {
        craft: CraftId,
        position: DVec2,
        player: bool,
    },
    /// A fresh adversary wave entered the field.
    WaveSpawned { wave: u32, count: u32 },
    /// The player craft was destroyed.
    GameOver,
}
