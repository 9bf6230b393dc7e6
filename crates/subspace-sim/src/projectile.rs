//! Projectiles in flight.

use glam::DVec2;

use subspace_core::catalog::WeaponProfile;
use subspace_core::enums::ProjectileKind;
use subspace_core::types::{heading_vector, Bounds, CraftId};

/// A projectile fired by a craft. Velocity is fixed at launch.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    position: DVec2,
    velocity: DVec2,
    angle: f64,
    kind: ProjectileKind,
    damage: u32,
    owner: CraftId,
    lifetime: f64,
    alive: bool,
}

impl Projectile {
    pub fn new(
        position: DVec2,
        angle: f64,
        weapon: WeaponProfile,
        owner: CraftId,
        lifetime: f64,
    ) -> Self {
        Self {
            position,
            velocity: heading_vector(angle) * weapon.speed,
            angle,
            kind: weapon.projectile,
            damage: weapon.damage,
            owner,
            lifetime,
            alive: true,
        }
    }

    /// Advance along the launch velocity and age the projectile.
    pub fn update(&mut self, dt: f64) {
        if !self.alive {
            return;
        }
        self.position += self.velocity * dt;
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.alive = false;
        }
    }

    /// Inclusive point-in-rectangle test against a craft's bounds.
    pub fn check_collision(&self, bounds: &Bounds) -> bool {
        self.alive && bounds.contains(self.position)
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn kind(&self) -> ProjectileKind {
        self.kind
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn owner(&self) -> CraftId {
        self.owner
    }

    /// Seconds of flight left.
    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }
}
