//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Kind of a grid-placed craft component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Command core. A craft without one is destroyed.
    Core,
    Engine,
    WeaponLaser,
    WeaponCannon,
    Armor,
    /// Reactor.
    Power,
    Shield,
}

impl ComponentKind {
    /// Every kind, in catalog order.
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Core,
        ComponentKind::Engine,
        ComponentKind::WeaponLaser,
        ComponentKind::WeaponCannon,
        ComponentKind::Armor,
        ComponentKind::Power,
        ComponentKind::Shield,
    ];

    /// Kinds offered by the ship builder. Cores cannot be placed by hand.
    pub const BUILDER_PALETTE: [ComponentKind; 6] = [
        ComponentKind::Armor,
        ComponentKind::Engine,
        ComponentKind::WeaponLaser,
        ComponentKind::WeaponCannon,
        ComponentKind::Power,
        ComponentKind::Shield,
    ];

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Core => "core",
            ComponentKind::Engine => "engine",
            ComponentKind::WeaponLaser => "weapon_laser",
            ComponentKind::WeaponCannon => "weapon_cannon",
            ComponentKind::Armor => "armor",
            ComponentKind::Power => "power",
            ComponentKind::Shield => "shield",
        }
    }

    /// Parse a snake_case name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<ComponentKind> {
        ComponentKind::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn is_weapon(self) -> bool {
        matches!(self, ComponentKind::WeaponLaser | ComponentKind::WeaponCannon)
    }

    /// Whether the builder palette offers this kind.
    pub fn is_buildable(self) -> bool {
        self != ComponentKind::Core
    }
}

/// Projectile type fired by a weapon component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileKind {
    Laser,
    Cannon,
}

/// Explosion size tier for the particle engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplosionSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Shape drawn inside a component cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// Plain cell, no marker.
    None,
    /// Filled circle (core).
    Circle,
    /// Nozzle triangle (engine).
    Triangle,
    /// Dot with a forward barrel (weapons).
    Barrel,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// Player craft destroyed; only a reset leaves this phase.
    GameOver,
}

/// Interaction mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Play,
    /// Component placement replaces combat controls.
    Build,
}

/// Adversary pursuit state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PursuitPhase {
    /// No target.
    #[default]
    Idle,
    /// Turning toward the target.
    Turning,
    /// Facing the target and closing in.
    Closing,
    /// Facing the target inside the standoff distance.
    Holding,
}

/// What a crew member is doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrewState {
    #[default]
    Idle,
    Walking,
    Working,
}
