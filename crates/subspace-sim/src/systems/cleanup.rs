//! Cleanup system: removes dead projectiles and destroyed adversaries.

use hecs::{Entity, World};

use subspace_core::components::{Adversary, Player};
use subspace_core::events::SimEvent;

use crate::craft::Craft;
use crate::projectile::Projectile;

/// What cleanup found this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub adversaries_destroyed: u32,
    pub adversaries_remaining: u32,
    pub player_destroyed: bool,
}

/// Despawn dead projectiles and destroyed adversaries in one pass.
/// The player craft is never despawned; the engine handles its loss.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> CleanupReport {
    despawn_buffer.clear();
    let mut report = CleanupReport::default();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.is_alive() {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (craft, _adversary)) in world.query_mut::<(&Craft, &Adversary)>() {
        if !craft.is_destroyed() {
            report.adversaries_remaining += 1;
            continue;
        }
        log::info!("adversary {} destroyed", craft.id().0);
        events.push(SimEvent::CraftDestroyed {
            craft: craft.id(),
            position: craft.position,
            player: false,
        });
        report.adversaries_destroyed += 1;
        despawn_buffer.push(entity);
    }

    for (_entity, (craft, _player)) in world.query_mut::<(&Craft, &Player)>() {
        if craft.is_destroyed() {
            report.player_destroyed = true;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    report
}
