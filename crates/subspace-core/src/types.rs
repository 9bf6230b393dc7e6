//! Fundamental geometric and simulation types.
//!
//! World space is 2D, x to the right and y down (screen convention), and
//! headings are radians measured from +x toward +y.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Identity of a craft. Projectiles carry their owner's id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CraftId(pub u32);

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Darken toward 30% brightness as `ratio` goes from 1 to 0.
    /// Used to tint damaged components.
    pub fn damaged(self, ratio: f64) -> Self {
        let k = 0.3 + 0.7 * ratio.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f64 * k) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Aggregate stats derived from a craft's current components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CraftStats {
    pub total_health: u32,
    pub max_health: u32,
    pub power_available: u32,
    pub power_used: u32,
    pub total_thrust: f64,
}

impl CraftStats {
    /// Whether generation covers consumption.
    pub fn is_powered(&self) -> bool {
        self.power_available >= self.power_used
    }
}

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Smallest rectangle enclosing all points. `None` for no points.
    pub fn enclosing(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    /// Unit box anchored at `p`.
    pub fn unit_at(p: DVec2) -> Self {
        Self {
            min: p,
            max: p + DVec2::ONE,
        }
    }

    /// Inclusive point-in-rectangle test.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

/// Simulation time tracking. `dt` is variable, so elapsed time is summed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that advanced the simulation.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Wrap an angle into [0, 2π).
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Normalize an angle difference into [-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = wrap_angle(angle);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Unit vector pointing along `angle`.
pub fn heading_vector(angle: f64) -> DVec2 {
    DVec2::from_angle(angle)
}

/// Transform a ship-local offset into world space.
pub fn local_to_world(local: DVec2, origin: DVec2, heading: f64) -> DVec2 {
    origin + DVec2::from_angle(heading).rotate(local)
}

/// Transform a world point into the ship-local frame. Inverse of [`local_to_world`].
pub fn world_to_local(world: DVec2, origin: DVec2, heading: f64) -> DVec2 {
    DVec2::from_angle(-heading).rotate(world - origin)
}
