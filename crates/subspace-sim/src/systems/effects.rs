//! Effects system: turns the tick's events into particles.

use rand::Rng;

use subspace_core::enums::ExplosionSize;
use subspace_core::events::SimEvent;

use crate::particles::ParticleSystem;

/// Feed recipes from `events`, then age the whole pool by `dt`.
pub fn run<R: Rng + ?Sized>(
    particles: &mut ParticleSystem,
    rng: &mut R,
    events: &[SimEvent],
    dt: f64,
) {
    for event in events {
        match *event {
            SimEvent::WeaponFired {
                kind,
                position,
                angle,
                ..
            } => particles.weapon_fire(rng, position, angle, kind),
            SimEvent::EngineThrust {
                position,
                angle,
                power,
                ..
            } => particles.engine_thrust(rng, position, angle, power),
            SimEvent::ProjectileHit {
                position,
                destroyed_component,
                ..
            } => {
                particles.damage_sparks(rng, position);
                if destroyed_component.is_some() {
                    particles.explosion(rng, position, ExplosionSize::Small);
                }
            }
            SimEvent::CraftDestroyed { position, .. } => {
                particles.explosion(rng, position, ExplosionSize::Large);
            }
            SimEvent::WaveSpawned { .. } | SimEvent::GameOver => {}
        }
    }
    particles.update(dt);
}
