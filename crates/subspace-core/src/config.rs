//! Simulation configuration.
//!
//! Every tunable the simulation math reads lives here and is passed in
//! explicitly. Values can be loaded from a TOML file; missing keys fall
//! back to the defaults in [`crate::constants`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::grid::GridSpec;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Per-craft grid and physics settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub grid_cell_size: f64,
    pub max_velocity: f64,
    /// Multiplier applied to linear and angular velocity every tick.
    pub drag: f64,
    /// Angular acceleration from rotation input (rad/s²).
    pub rotation_rate: f64,
    /// Lifetime of projectiles this craft fires (seconds).
    pub projectile_lifetime: f64,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            grid_cell_size: GRID_CELL_SIZE,
            max_velocity: MAX_VELOCITY,
            drag: DRAG,
            rotation_rate: ROTATION_RATE,
            projectile_lifetime: PROJECTILE_LIFETIME,
        }
    }
}

impl CraftConfig {
    pub fn grid(&self) -> GridSpec {
        GridSpec::new(self.grid_width, self.grid_height, self.grid_cell_size)
    }
}

/// Adversary, wave and crew settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Chance per tick that an adversary fires.
    pub adversary_fire_chance: f64,
    pub wave_size: u32,
    pub wave_spawn_half_extent: f64,
    pub player_crew: u32,
    pub adversary_crew: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            adversary_fire_chance: ADVERSARY_FIRE_CHANCE,
            wave_size: WAVE_SIZE,
            wave_spawn_half_extent: WAVE_SPAWN_HALF_EXTENT,
            player_crew: PLAYER_CREW,
            adversary_crew: ADVERSARY_CREW,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Largest `dt` integrated by a single tick.
    pub max_dt: f64,
    pub craft: CraftConfig,
    pub combat: CombatConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_dt: MAX_DT,
            craft: CraftConfig::default(),
            combat: CombatConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject values the simulation math cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.craft;
        if c.grid_width <= 0 || c.grid_height <= 0 {
            return Err(ConfigError::Invalid {
                field: "craft.grid_width/grid_height",
                reason: "grid must have at least one cell",
            });
        }
        positive("craft.grid_cell_size", c.grid_cell_size)?;
        positive("craft.max_velocity", c.max_velocity)?;
        if !(c.drag > 0.0 && c.drag <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "craft.drag",
                reason: "must be in (0, 1]",
            });
        }
        if !(c.rotation_rate.is_finite() && c.rotation_rate >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "craft.rotation_rate",
                reason: "must be finite and non-negative",
            });
        }
        positive("craft.projectile_lifetime", c.projectile_lifetime)?;
        positive("max_dt", self.max_dt)?;

        let combat = &self.combat;
        if !(0.0..=1.0).contains(&combat.adversary_fire_chance) {
            return Err(ConfigError::Invalid {
                field: "combat.adversary_fire_chance",
                reason: "must be a probability",
            });
        }
        if combat.wave_size == 0 {
            return Err(ConfigError::Invalid {
                field: "combat.wave_size",
                reason: "a wave needs at least one adversary",
            });
        }
        if !(combat.wave_spawn_half_extent.is_finite() && combat.wave_spawn_half_extent >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "combat.wave_spawn_half_extent",
                reason: "must be finite and non-negative",
            });
        }
        Ok(())
    }
}

/// Finite and strictly positive; NaN fails both checks.
fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite and positive",
        })
    }
}
