//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use glam::DVec2;
use hecs::World;

use subspace_core::components::{Adversary, Player};
use subspace_core::enums::{ComponentKind, GameMode, GamePhase};
use subspace_core::events::SimEvent;
use subspace_core::state::*;
use subspace_core::types::{local_to_world, SimTime};

use crate::craft::Craft;
use crate::particles::ParticleSystem;
use crate::projectile::Projectile;

/// Engine-side state the snapshot reports alongside the world.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub camera: DVec2,
    pub particles: &'a ParticleSystem,
    pub builder_selected: ComponentKind,
    pub wave: u32,
    pub score: ScoreView,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: SnapshotContext<'_>,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        mode: ctx.mode,
        camera: CameraView {
            position: ctx.camera,
            elapsed_secs: ctx.time.elapsed_secs,
        },
        player: build_player(world),
        adversaries: build_adversaries(world),
        projectiles: build_projectiles(world),
        particles: build_particles(ctx.particles),
        builder: BuilderView {
            selected: ctx.builder_selected,
            ..BuilderView::default()
        },
        wave: ctx.wave,
        score: ctx.score,
        events,
    }
}

/// Render view of a single craft.
pub fn craft_view(craft: &Craft) -> CraftView {
    let components = craft
        .components()
        .iter()
        .map(|c| {
            let stats = c.stats();
            let health_ratio = c.health_ratio();
            ComponentView {
                kind: c.kind(),
                grid_x: c.grid_x(),
                grid_y: c.grid_y(),
                health_ratio,
                glyph: stats.glyph,
                color: stats.color.damaged(health_ratio),
            }
        })
        .collect();

    let crew = craft
        .crew()
        .members()
        .iter()
        .map(|m| CrewView {
            id: m.id,
            position: local_to_world(m.position, craft.position, craft.heading()),
            state: m.state,
        })
        .collect();

    CraftView {
        id: craft.id(),
        player: craft.is_player(),
        position: craft.position,
        heading: craft.heading(),
        velocity: craft.velocity,
        stats: *craft.stats(),
        pursuit: craft.pursuit(),
        destroyed: craft.is_destroyed(),
        components,
        crew,
    }
}

fn build_player(world: &World) -> Option<CraftView> {
    world
        .query::<(&Craft, &Player)>()
        .iter()
        .next()
        .map(|(_, (craft, _))| craft_view(craft))
}

/// Adversaries sorted by id for stable output.
fn build_adversaries(world: &World) -> Vec<CraftView> {
    let mut views: Vec<CraftView> = world
        .query::<(&Craft, &Adversary)>()
        .iter()
        .map(|(_, (craft, _))| craft_view(craft))
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.is_alive())
        .map(|(_, p)| ProjectileView {
            position: p.position(),
            kind: p.kind(),
            angle: p.angle(),
        })
        .collect()
}

fn build_particles(particles: &ParticleSystem) -> Vec<ParticleView> {
    particles
        .iter()
        .map(|p| ParticleView {
            position: p.position,
            radius: p.render_radius(),
            color: p.color,
            alpha: p.alpha(),
        })
        .collect()
}
