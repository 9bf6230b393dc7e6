//! Collision system: projectiles against craft bounds.

use hecs::{Entity, World};

use subspace_core::events::SimEvent;

use crate::craft::Craft;
use crate::projectile::Projectile;

/// Test each live projectile against every other craft. The first hit
/// applies damage and kills the projectile. Crafts destroyed earlier in
/// the pass are skipped.
pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    let projectiles: Vec<Entity> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.is_alive())
        .map(|(entity, _)| entity)
        .collect();
    let crafts: Vec<Entity> = world
        .query::<&Craft>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for projectile_entity in projectiles {
        let Ok(mut projectile) = world.get::<&mut Projectile>(projectile_entity) else {
            continue;
        };
        for &craft_entity in &crafts {
            let Ok(mut craft) = world.get::<&mut Craft>(craft_entity) else {
                continue;
            };
            if craft.id() == projectile.owner() || craft.is_destroyed() {
                continue;
            }
            if !projectile.check_collision(&craft.bounds()) {
                continue;
            }

            let outcome = craft.take_damage(projectile.damage(), projectile.position());
            events.push(SimEvent::ProjectileHit {
                target: craft.id(),
                owner: projectile.owner(),
                position: projectile.position(),
                damage: projectile.damage(),
                destroyed_component: outcome.destroyed_kind(),
            });
            projectile.kill();
            break;
        }
    }
}
