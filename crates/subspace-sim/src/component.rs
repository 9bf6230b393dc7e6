//! A single grid-placed component instance.

use subspace_core::catalog::{stats_for, ComponentStats};
use subspace_core::enums::ComponentKind;

/// One functional cell of a craft. Health and cooldown change during play;
/// everything else comes from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: ComponentKind,
    grid_x: i32,
    grid_y: i32,
    health: u32,
    cooldown: f64,
}

impl Component {
    /// A fresh component at full health with no cooldown pending.
    pub fn new(kind: ComponentKind, grid_x: i32, grid_y: i32) -> Self {
        Self {
            kind,
            grid_x,
            grid_y,
            health: stats_for(kind).max_health,
            cooldown: 0.0,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn grid_x(&self) -> i32 {
        self.grid_x
    }

    pub fn grid_y(&self) -> i32 {
        self.grid_y
    }

    pub fn cell(&self) -> (i32, i32) {
        (self.grid_x, self.grid_y)
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Seconds until this weapon may fire again.
    pub fn cooldown(&self) -> f64 {
        self.cooldown
    }

    pub fn stats(&self) -> &'static ComponentStats {
        stats_for(self.kind)
    }

    /// Remaining health as a fraction of max, for tinting.
    pub fn health_ratio(&self) -> f64 {
        let max = self.stats().max_health;
        if max == 0 {
            return 0.0;
        }
        self.health as f64 / max as f64
    }

    /// Subtract `amount` from health, clamping at zero.
    /// Returns true once the component is destroyed.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.is_destroyed()
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn can_fire(&self) -> bool {
        self.kind.is_weapon() && self.cooldown <= 0.0 && self.health > 0
    }

    /// Start the weapon cooldown.
    pub fn fire(&mut self) {
        self.cooldown = self.stats().base_cooldown;
    }

    pub fn tick(&mut self, dt: f64) {
        self.cooldown = (self.cooldown - dt).max(0.0);
    }
}
