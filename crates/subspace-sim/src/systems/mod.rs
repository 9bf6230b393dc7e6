//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; crafts and projectiles live in the world and
//! everything else is passed in by the engine.

pub mod cleanup;
pub mod collision;
pub mod controls;
pub mod crafts;
pub mod effects;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;

use subspace_core::constants::ENGINE_FX_THRUST_SCALE;
use subspace_core::events::SimEvent;

use crate::craft::Craft;
use crate::projectile::Projectile;

/// One `EngineThrust` event per live engine cell.
pub(crate) fn emit_thrust(craft: &Craft, events: &mut Vec<SimEvent>) {
    let power = craft.stats().total_thrust / ENGINE_FX_THRUST_SCALE;
    for position in craft.engine_positions() {
        events.push(SimEvent::EngineThrust {
            craft: craft.id(),
            position,
            angle: craft.heading(),
            power,
        });
    }
}

/// Record freshly fired projectiles and queue them for spawning.
pub(crate) fn emit_fired(
    craft: &Craft,
    shots: Vec<Projectile>,
    events: &mut Vec<SimEvent>,
    launched: &mut Vec<Projectile>,
) {
    for shot in &shots {
        events.push(SimEvent::WeaponFired {
            craft: craft.id(),
            kind: shot.kind(),
            position: shot.position(),
            angle: shot.angle(),
        });
    }
    launched.extend(shots);
}
