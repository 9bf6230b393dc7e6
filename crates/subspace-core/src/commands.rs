//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and drained at the next tick boundary. Flight
//! intents apply to that tick only; the input layer re-sends them every
//! frame a key is held.

use serde::{Deserialize, Serialize};

use crate::enums::ComponentKind;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Flight (per tick) ---
    /// Fire the engines along the current heading.
    MoveForward,
    /// Spin counter-clockwise.
    RotateLeft,
    /// Spin clockwise.
    RotateRight,
    /// Fire every ready weapon.
    Fire,

    // --- Simulation control ---
    /// Pause, or resume a paused simulation.
    TogglePause,
    /// Switch between play and build mode.
    ToggleBuildMode,
    /// Discard the current world and start over.
    ResetGame,

    // --- Ship builder ---
    /// Choose the component kind the builder places.
    SelectComponentKind { kind: ComponentKind },
    /// Place the selected kind at a player grid cell.
    BuilderPlace { grid_x: i32, grid_y: i32 },
    /// Remove whatever occupies a player grid cell.
    BuilderRemove { grid_x: i32, grid_y: i32 },
}
