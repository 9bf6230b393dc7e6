//! Craft grid ↔ ship-local mapping.
//!
//! Cell (gx, gy) covers the local square
//! `[(gx - w/2) * s, (gx - w/2 + 1) * s) × [(gy - h/2) * s, (gy - h/2 + 1) * s)`
//! where `w/2` and `h/2` are integer halves. Cell centres map back to the
//! same cell, so firing, damage, bounds and the builder stay consistent.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::types::{local_to_world, world_to_local};

/// Dimensions of a craft grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub width: i32,
    pub height: i32,
    pub cell_size: f64,
}

impl GridSpec {
    pub fn new(width: i32, height: i32, cell_size: f64) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn contains(&self, gx: i32, gy: i32) -> bool {
        (0..self.width).contains(&gx) && (0..self.height).contains(&gy)
    }

    /// Local offset of a cell's minimum corner.
    pub fn cell_origin(&self, gx: i32, gy: i32) -> DVec2 {
        DVec2::new(
            (gx - self.width / 2) as f64 * self.cell_size,
            (gy - self.height / 2) as f64 * self.cell_size,
        )
    }

    /// Local offset of a cell's centre.
    pub fn cell_center(&self, gx: i32, gy: i32) -> DVec2 {
        self.cell_origin(gx, gy) + DVec2::splat(self.cell_size * 0.5)
    }

    /// The four local corners of a cell.
    pub fn cell_corners(&self, gx: i32, gy: i32) -> [DVec2; 4] {
        let o = self.cell_origin(gx, gy);
        let s = self.cell_size;
        [
            o,
            o + DVec2::new(s, 0.0),
            o + DVec2::new(0.0, s),
            o + DVec2::new(s, s),
        ]
    }

    /// Cell containing a local point, or `None` outside the grid.
    pub fn cell_at(&self, local: DVec2) -> Option<(i32, i32)> {
        let gx = (local.x / self.cell_size).floor() + (self.width / 2) as f64;
        let gy = (local.y / self.cell_size).floor() + (self.height / 2) as f64;
        if !gx.is_finite() || !gy.is_finite() {
            return None;
        }
        let (gx, gy) = (gx as i32, gy as i32);
        self.contains(gx, gy).then_some((gx, gy))
    }

    /// World position of a cell centre for a craft at `origin` facing `heading`.
    pub fn cell_to_world(&self, gx: i32, gy: i32, origin: DVec2, heading: f64) -> DVec2 {
        local_to_world(self.cell_center(gx, gy), origin, heading)
    }

    /// Cell under a world point for a craft at `origin` facing `heading`.
    pub fn world_to_cell(&self, world: DVec2, origin: DVec2, heading: f64) -> Option<(i32, i32)> {
        self.cell_at(world_to_local(world, origin, heading))
    }
}
