//! Projectile spawning and flight.

use hecs::World;

use crate::projectile::Projectile;

/// Move this tick's launches into the world.
pub fn spawn_launched(world: &mut World, launched: &mut Vec<Projectile>) {
    for projectile in launched.drain(..) {
        world.spawn((projectile,));
    }
}

/// Advance every projectile. Expired ones stay in the world, dead, until cleanup.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.update(dt);
    }
}
