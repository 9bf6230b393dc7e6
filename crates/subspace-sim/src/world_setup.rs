//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player craft and adversary crafts with their default
//! component layouts.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;

use subspace_core::components::{Adversary, Player};
use subspace_core::config::SimConfig;
use subspace_core::constants::*;
use subspace_core::enums::ComponentKind;
use subspace_core::types::CraftId;

use crate::component::Component;
use crate::craft::Craft;

/// Give up looking for a clear spawn point after this many draws.
const MAX_SPAWN_ATTEMPTS: usize = 32;

/// Player layout: core, twin engines aft, two lasers and a cannon forward,
/// two reactors and three armor plates around the core.
pub const PLAYER_LAYOUT: [(ComponentKind, i32, i32); 11] = [
    (ComponentKind::Core, 4, 4),
    (ComponentKind::Engine, 4, 6),
    (ComponentKind::Engine, 4, 7),
    (ComponentKind::WeaponLaser, 3, 3),
    (ComponentKind::WeaponLaser, 5, 3),
    (ComponentKind::WeaponCannon, 4, 2),
    (ComponentKind::Power, 3, 5),
    (ComponentKind::Power, 5, 5),
    (ComponentKind::Armor, 3, 4),
    (ComponentKind::Armor, 5, 4),
    (ComponentKind::Armor, 4, 5),
];

/// Smaller adversary layout.
pub const ADVERSARY_LAYOUT: [(ComponentKind, i32, i32); 5] = [
    (ComponentKind::Core, 4, 4),
    (ComponentKind::Engine, 4, 6),
    (ComponentKind::WeaponLaser, 4, 3),
    (ComponentKind::Power, 3, 4),
    (ComponentKind::Armor, 5, 4),
];

/// Build a craft from a layout. Layout cells are unique and in-grid for
/// any grid of at least 8x8; cells that do not fit are skipped.
pub fn build_craft(
    id: CraftId,
    player: bool,
    position: DVec2,
    config: &SimConfig,
    layout: &[(ComponentKind, i32, i32)],
) -> Craft {
    let crew = if player {
        config.combat.player_crew
    } else {
        config.combat.adversary_crew
    };
    let mut craft = Craft::new(id, player, position, config.craft, crew);
    for &(kind, gx, gy) in layout {
        if let Err(e) = craft.add_component(Component::new(kind, gx, gy)) {
            log::debug!("layout cell skipped for craft {}: {e}", id.0);
        }
    }
    craft
}

/// Centre of the arena, where the player starts.
pub fn arena_center() -> DVec2 {
    DVec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)
}

/// Spawn the player craft.
pub fn spawn_player(world: &mut World, id: CraftId, position: DVec2, config: &SimConfig) -> Entity {
    let craft = build_craft(id, true, position, config, &PLAYER_LAYOUT);
    world.spawn((craft, Player))
}

/// Spawn one adversary craft.
pub fn spawn_adversary(
    world: &mut World,
    id: CraftId,
    position: DVec2,
    config: &SimConfig,
) -> Entity {
    let craft = build_craft(id, false, position, config, &ADVERSARY_LAYOUT);
    world.spawn((craft, Adversary))
}

/// Draw spawn points until one is at least `min_distance` from `avoid`.
/// Falls back to the last draw when the area is too crowded.
fn pick_spawn_point<R: Rng + ?Sized>(
    rng: &mut R,
    avoid: DVec2,
    min_distance: f64,
    mut sample: impl FnMut(&mut R) -> DVec2,
) -> DVec2 {
    let mut candidate = sample(rng);
    for _ in 1..MAX_SPAWN_ATTEMPTS {
        if candidate.distance(avoid) >= min_distance {
            break;
        }
        candidate = sample(rng);
    }
    candidate
}

/// Opening wave: adversaries scattered over the arena, clear of the player.
/// Returns the number spawned.
pub fn spawn_opening_wave<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    player_position: DVec2,
    next_craft_id: &mut u32,
    config: &SimConfig,
) -> u32 {
    let count = config.combat.wave_size;
    for _ in 0..count {
        let position = pick_spawn_point(rng, player_position, INITIAL_SPAWN_MIN_DISTANCE, |rng| {
            DVec2::new(
                rng.gen_range(ARENA_SPAWN_MARGIN..ARENA_WIDTH - ARENA_SPAWN_MARGIN),
                rng.gen_range(ARENA_SPAWN_MARGIN..ARENA_HEIGHT - ARENA_SPAWN_MARGIN),
            )
        });
        spawn_adversary(world, CraftId(*next_craft_id), position, config);
        *next_craft_id += 1;
    }
    count
}

/// Follow-up wave: adversaries in a square around `center`, clear of it.
/// Returns the number spawned.
pub fn spawn_wave<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    center: DVec2,
    next_craft_id: &mut u32,
    config: &SimConfig,
) -> u32 {
    let count = config.combat.wave_size;
    let half = config.combat.wave_spawn_half_extent;
    for _ in 0..count {
        let position = pick_spawn_point(rng, center, INITIAL_SPAWN_MIN_DISTANCE, |rng| {
            let offset = DVec2::new(rng.gen::<f64>(), rng.gen::<f64>()) * 2.0 - DVec2::ONE;
            center + offset * half
        });
        spawn_adversary(world, CraftId(*next_craft_id), position, config);
        *next_craft_id += 1;
    }
    count
}
