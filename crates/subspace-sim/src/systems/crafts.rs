//! Per-tick craft updates: cooldowns, integration, adversary AI and crew.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;

use subspace_core::components::Adversary;
use subspace_core::events::SimEvent;

use crate::craft::Craft;
use crate::projectile::Projectile;

/// Advance the player craft.
pub fn update_player(world: &mut World, player: Option<Entity>, dt: f64) {
    let Some(player) = player else {
        return;
    };
    if let Ok(mut craft) = world.get::<&mut Craft>(player) {
        craft.tick_cooldowns(dt);
        craft.integrate(dt);
        craft.update_crew(dt);
        craft.recalculate_stats();
    }
}

/// Advance every live adversary toward `target`, rolling `fire_chance`
/// once per craft per tick.
pub fn update_adversaries<R: Rng + ?Sized>(
    world: &mut World,
    target: Option<DVec2>,
    dt: f64,
    fire_chance: f64,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
    launched: &mut Vec<Projectile>,
) {
    for (_entity, (craft, _adversary)) in world.query_mut::<(&mut Craft, &Adversary)>() {
        if craft.is_destroyed() {
            continue;
        }
        if craft.update_ai(dt, target) {
            super::emit_thrust(craft, events);
        }
        craft.tick_cooldowns(dt);
        craft.integrate(dt);

        if rng.gen::<f64>() < fire_chance {
            let shots = craft.fire_weapons();
            super::emit_fired(craft, shots, events, launched);
        }

        craft.update_crew(dt);
        craft.recalculate_stats();
    }
}
