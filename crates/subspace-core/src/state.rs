//! Game state snapshot: the complete visible state handed to the renderer each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Color, CraftId, CraftStats, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub camera: CameraView,
    pub player: Option<CraftView>,
    pub adversaries: Vec<CraftView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub builder: BuilderView,
    pub wave: u32,
    pub score: ScoreView,
    pub events: Vec<SimEvent>,
}

/// What the camera follows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    /// World point at the centre of the screen (the player's position).
    pub position: DVec2,
    /// Elapsed simulation time, for background animation.
    pub elapsed_secs: f64,
}

/// A craft as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftView {
    pub id: CraftId,
    pub player: bool,
    pub position: DVec2,
    pub heading: f64,
    pub velocity: DVec2,
    pub stats: CraftStats,
    pub pursuit: PursuitPhase,
    pub destroyed: bool,
    pub components: Vec<ComponentView>,
    pub crew: Vec<CrewView>,
}

/// One component cell as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentView {
    pub kind: ComponentKind,
    pub grid_x: i32,
    pub grid_y: i32,
    /// Health / max health, 0.0 - 1.0.
    pub health_ratio: f64,
    pub glyph: Glyph,
    /// Catalog colour darkened by damage.
    pub color: Color,
}

/// A crew member as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewView {
    pub id: u32,
    pub position: DVec2,
    pub state: CrewState,
}

/// A projectile as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec2,
    pub kind: ProjectileKind,
    pub angle: f64,
}

/// A particle as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: DVec2,
    pub radius: f64,
    pub color: Color,
    /// 0 - 255.
    pub alpha: u8,
}

/// Ship builder state for the palette overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderView {
    pub selected: ComponentKind,
    pub palette: Vec<ComponentKind>,
}

impl Default for BuilderView {
    fn default() -> Self {
        Self {
            selected: ComponentKind::Armor,
            palette: ComponentKind::BUILDER_PALETTE.to_vec(),
        }
    }
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub adversaries_destroyed: u32,
    pub projectiles_fired: u32,
}
