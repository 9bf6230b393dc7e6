//! Wave spawning system: refills the field once every adversary is gone.

use glam::DVec2;
use hecs::World;
use rand::Rng;

use subspace_core::config::SimConfig;
use subspace_core::events::SimEvent;

use crate::world_setup;

/// Spawn the next wave around `center` and announce it.
/// `wave` is the number of the wave being replaced.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    config: &SimConfig,
    center: DVec2,
    wave: &mut u32,
    next_craft_id: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    *wave += 1;
    let count = world_setup::spawn_wave(world, rng, center, next_craft_id, config);
    log::info!("wave {} spawned with {count} adversaries", *wave);
    events.push(SimEvent::WaveSpawned { wave: *wave, count });
}
