//! The craft aggregate: components on a grid plus physics state.
//!
//! A craft owns its components, crew and pursuit state. Derived stats are
//! recomputed after every mutation so they always equal the sum over the
//! current components.

use glam::DVec2;

use subspace_ai::profile::AdversaryProfile;
use subspace_ai::pursuit::{self, PursuitContext};
use subspace_core::config::CraftConfig;
use subspace_core::enums::{ComponentKind, PursuitPhase};
use subspace_core::types::{heading_vector, local_to_world, wrap_angle, Bounds, CraftId, CraftStats};

use crate::component::Component;
use crate::crew::CrewRoster;
use crate::projectile::Projectile;

/// Why a component could not be placed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },

    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },
}

/// Result of a hit at a world point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The point mapped to an empty or out-of-grid cell.
    Absorbed,
    Damaged { kind: ComponentKind },
    Destroyed { kind: ComponentKind },
}

impl DamageOutcome {
    /// Kind of the component removed by this hit, if any.
    pub fn destroyed_kind(self) -> Option<ComponentKind> {
        match self {
            DamageOutcome::Destroyed { kind } => Some(kind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Craft {
    id: CraftId,
    player: bool,
    pub position: DVec2,
    pub velocity: DVec2,
    heading: f64,
    pub angular_velocity: f64,
    components: Vec<Component>,
    stats: CraftStats,
    config: CraftConfig,
    profile: AdversaryProfile,
    pursuit: PursuitPhase,
    crew: CrewRoster,
}

impl Craft {
    /// An empty craft at rest, facing +x.
    pub fn new(id: CraftId, player: bool, position: DVec2, config: CraftConfig, crew: u32) -> Self {
        Self {
            id,
            player,
            position,
            velocity: DVec2::ZERO,
            heading: 0.0,
            angular_velocity: 0.0,
            components: Vec::new(),
            stats: CraftStats::default(),
            config,
            profile: AdversaryProfile::default(),
            pursuit: PursuitPhase::default(),
            crew: CrewRoster::with_members(crew),
        }
    }

    pub fn id(&self) -> CraftId {
        self.id
    }

    pub fn is_player(&self) -> bool {
        self.player
    }

    /// Facing angle in [0, 2π).
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = wrap_angle(heading);
    }

    pub fn stats(&self) -> &CraftStats {
        &self.stats
    }

    pub fn config(&self) -> &CraftConfig {
        &self.config
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn crew(&self) -> &CrewRoster {
        &self.crew
    }

    pub fn pursuit(&self) -> PursuitPhase {
        self.pursuit
    }

    pub fn component_at(&self, grid_x: i32, grid_y: i32) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.cell() == (grid_x, grid_y))
    }

    /// Place a component on a free in-grid cell.
    pub fn add_component(&mut self, component: Component) -> Result<(), PlacementError> {
        let (x, y) = component.cell();
        if !self.config.grid().contains(x, y) {
            return Err(PlacementError::OutOfBounds { x, y });
        }
        if self.component_at(x, y).is_some() {
            return Err(PlacementError::Occupied { x, y });
        }
        self.components.push(component);
        self.recalculate_stats();
        Ok(())
    }

    pub fn remove_component_at(&mut self, grid_x: i32, grid_y: i32) -> Option<Component> {
        let index = self
            .components
            .iter()
            .position(|c| c.cell() == (grid_x, grid_y))?;
        let removed = self.components.remove(index);
        self.recalculate_stats();
        Some(removed)
    }

    pub fn recalculate_stats(&mut self) {
        let mut stats = CraftStats::default();
        for component in &self.components {
            let base = component.stats();
            stats.total_health += component.health();
            stats.max_health += base.max_health;
            stats.power_available += base.power_generation;
            stats.power_used += base.power_consumption;
            stats.total_thrust += base.thrust;
        }
        self.stats = stats;
    }

    /// Push along the heading. Needs engines and enough power.
    /// Returns whether thrust was applied.
    pub fn apply_thrust(&mut self, dt: f64) -> bool {
        if self.stats.total_thrust <= 0.0 || !self.stats.is_powered() {
            return false;
        }
        self.velocity += heading_vector(self.heading) * self.stats.total_thrust * dt;
        true
    }

    /// Spin up toward `direction` (negative = counter-clockwise on screen).
    pub fn rotate(&mut self, direction: i32, dt: f64) {
        self.angular_velocity += direction.signum() as f64 * self.config.rotation_rate * dt;
    }

    /// Drag, speed clamp, then advance position and heading.
    pub fn integrate(&mut self, dt: f64) {
        self.velocity *= self.config.drag;
        self.angular_velocity *= self.config.drag;
        self.velocity = self.velocity.clamp_length_max(self.config.max_velocity);

        self.position += self.velocity * dt;
        self.heading = wrap_angle(self.heading + self.angular_velocity * dt);

        self.recalculate_stats();
    }

    pub fn tick_cooldowns(&mut self, dt: f64) {
        for component in &mut self.components {
            component.tick(dt);
        }
    }

    /// Fire every ready weapon once. Nothing fires while power is short.
    pub fn fire_weapons(&mut self) -> Vec<Projectile> {
        if !self.stats.is_powered() {
            return Vec::new();
        }
        let grid = self.config.grid();
        let mut fired = Vec::new();
        for component in self.components.iter_mut().filter(|c| c.can_fire()) {
            let Some(weapon) = component.kind().weapon() else {
                continue;
            };
            component.fire();
            let (gx, gy) = component.cell();
            let spawn = grid.cell_to_world(gx, gy, self.position, self.heading);
            fired.push(Projectile::new(
                spawn,
                self.heading,
                weapon,
                self.id,
                self.config.projectile_lifetime,
            ));
        }
        fired
    }

    /// Apply a hit at a world point to the component under it.
    pub fn take_damage(&mut self, amount: u32, point: DVec2) -> DamageOutcome {
        let index = self
            .config
            .grid()
            .world_to_cell(point, self.position, self.heading)
            .and_then(|cell| self.components.iter().position(|c| c.cell() == cell));

        let outcome = match index {
            None => DamageOutcome::Absorbed,
            Some(index) => {
                let kind = self.components[index].kind();
                if self.components[index].take_damage(amount) {
                    self.components.remove(index);
                    DamageOutcome::Destroyed { kind }
                } else {
                    DamageOutcome::Damaged { kind }
                }
            }
        };
        self.recalculate_stats();
        outcome
    }

    /// A craft without a core is destroyed.
    pub fn is_destroyed(&self) -> bool {
        !self
            .components
            .iter()
            .any(|c| c.kind() == ComponentKind::Core)
    }

    /// World-space box around every occupied cell, rotated with the craft.
    pub fn bounds(&self) -> Bounds {
        let grid = self.config.grid();
        let corners = self.components.iter().flat_map(|c| {
            grid.cell_corners(c.grid_x(), c.grid_y())
                .map(|corner| local_to_world(corner, self.position, self.heading))
        });
        Bounds::enclosing(corners).unwrap_or_else(|| Bounds::unit_at(self.position))
    }

    /// Steer toward `target` with the pursuit controller.
    /// Returns whether the engines fired.
    pub fn update_ai(&mut self, dt: f64, target: Option<DVec2>) -> bool {
        let update = pursuit::evaluate(
            &PursuitContext {
                position: self.position,
                heading: self.heading,
                target,
            },
            &self.profile,
        );
        self.pursuit = update.phase;
        if let Some(angular_velocity) = update.angular_velocity {
            self.angular_velocity = angular_velocity;
        }
        update.thrust && self.apply_thrust(dt)
    }

    /// World positions of live engine cells.
    pub fn engine_positions(&self) -> Vec<DVec2> {
        let grid = self.config.grid();
        self.components
            .iter()
            .filter(|c| c.kind() == ComponentKind::Engine && !c.is_destroyed())
            .map(|c| grid.cell_to_world(c.grid_x(), c.grid_y(), self.position, self.heading))
            .collect()
    }

    pub fn update_crew(&mut self, dt: f64) {
        let grid = self.config.grid();
        self.crew.update(dt, &self.components, &grid);
    }
}
