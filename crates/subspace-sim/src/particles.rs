//! Particle effects: short-lived visual sprites spawned from sim events.
//!
//! Particles never feed back into gameplay. The pool is a flat `Vec`
//! compacted once per update.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use rand::Rng;

use subspace_core::constants::{PARTICLE_DRAG, PARTICLE_MIN_RADIUS};
use subspace_core::enums::{ExplosionSize, ProjectileKind};
use subspace_core::types::{heading_vector, Color};

const LASER_FLASH: [Color; 3] = [
    Color::rgb(255, 100, 100),
    Color::rgb(255, 150, 150),
    Color::rgb(255, 200, 200),
];
const CANNON_FIRE: [Color; 3] = [
    Color::rgb(255, 200, 0),
    Color::rgb(255, 150, 0),
    Color::rgb(255, 100, 0),
];
const CANNON_SMOKE: [Color; 2] = [Color::rgb(100, 100, 100), Color::rgb(150, 150, 150)];
const EXPLOSION_FIRE: [Color; 5] = [
    Color::rgb(255, 200, 0),
    Color::rgb(255, 150, 0),
    Color::rgb(255, 100, 0),
    Color::rgb(255, 50, 0),
    Color::rgb(200, 200, 200),
];
const EXPLOSION_SMOKE: [Color; 3] = [
    Color::rgb(80, 80, 80),
    Color::rgb(100, 100, 100),
    Color::rgb(120, 120, 120),
];
const ENGINE_GLOW: [Color; 3] = [
    Color::rgb(100, 150, 255),
    Color::rgb(150, 200, 255),
    Color::rgb(200, 220, 255),
];
const SPARKS: [Color; 3] = [
    Color::rgb(255, 255, 0),
    Color::rgb(255, 200, 0),
    Color::rgb(255, 255, 255),
];

/// Spread of an explosion tier.
struct ExplosionTier {
    count: usize,
    speed: (f64, f64),
    size: (f64, f64),
    lifetime: (f64, f64),
}

impl ExplosionTier {
    fn for_size(size: ExplosionSize) -> Self {
        match size {
            ExplosionSize::Small => Self {
                count: 20,
                speed: (50.0, 150.0),
                size: (2.0, 5.0),
                lifetime: (0.3, 0.6),
            },
            ExplosionSize::Medium => Self {
                count: 35,
                speed: (60.0, 200.0),
                size: (3.0, 7.0),
                lifetime: (0.4, 0.8),
            },
            ExplosionSize::Large => Self {
                count: 50,
                speed: (80.0, 250.0),
                size: (4.0, 10.0),
                lifetime: (0.5, 1.0),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Seconds left to live.
    pub lifetime: f64,
    pub max_lifetime: f64,
    pub size: f64,
    pub color: Color,
    /// Alpha follows remaining lifetime.
    pub fade: bool,
    /// Radius follows remaining lifetime.
    pub shrink: bool,
    /// Downward acceleration (+y).
    pub gravity: f64,
}

impl Particle {
    /// A fading, non-shrinking particle without gravity.
    pub fn new(position: DVec2, velocity: DVec2, lifetime: f64, size: f64, color: Color) -> Self {
        Self {
            position,
            velocity,
            lifetime,
            max_lifetime: lifetime,
            size,
            color,
            fade: true,
            shrink: false,
            gravity: 0.0,
        }
    }

    pub fn shrinking(mut self) -> Self {
        self.shrink = true;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Measure fade and shrink against a fixed span instead of the starting
    /// lifetime, so short-lived particles start partly faded.
    pub fn with_max_lifetime(mut self, max_lifetime: f64) -> Self {
        self.max_lifetime = max_lifetime.max(self.lifetime);
        self
    }

    fn life_ratio(&self) -> f64 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }

    /// Opacity 0-255.
    pub fn alpha(&self) -> u8 {
        if self.fade {
            (self.life_ratio() * 255.0).round() as u8
        } else {
            u8::MAX
        }
    }

    pub fn render_radius(&self) -> f64 {
        if self.shrink {
            (self.size * self.life_ratio()).max(PARTICLE_MIN_RADIUS)
        } else {
            self.size
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

fn between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[Color]) -> Color {
    palette[rng.gen_range(0..palette.len())]
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn spawn(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Age every particle, then integrate and compact the survivors.
    pub fn update(&mut self, dt: f64) {
        for p in &mut self.particles {
            p.lifetime -= dt;
            if p.lifetime <= 0.0 {
                continue;
            }
            p.position += p.velocity * dt;
            if p.gravity != 0.0 {
                p.velocity.y += p.gravity * dt;
            }
            p.velocity *= PARTICLE_DRAG;
        }
        self.particles.retain(|p| p.lifetime > 0.0);
    }

    /// Muzzle flash at a weapon that just fired.
    pub fn weapon_fire<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        position: DVec2,
        angle: f64,
        kind: ProjectileKind,
    ) {
        match kind {
            ProjectileKind::Laser => {
                for _ in 0..8 {
                    let speed = between(rng, 30.0, 60.0);
                    let direction = angle + between(rng, -0.3, 0.3);
                    let color = pick(rng, &LASER_FLASH);
                    let size = between(rng, 2.0, 4.0);
                    self.spawn(
                        Particle::new(position, heading_vector(direction) * speed, 0.2, size, color)
                            .shrinking(),
                    );
                }
            }
            ProjectileKind::Cannon => {
                for _ in 0..15 {
                    let speed = between(rng, 20.0, 50.0);
                    let direction = angle + between(rng, -0.5, 0.5);
                    let color = if rng.gen::<f64>() < 0.6 {
                        pick(rng, &CANNON_FIRE)
                    } else {
                        pick(rng, &CANNON_SMOKE)
                    };
                    let lifetime = between(rng, 0.3, 0.5);
                    let size = between(rng, 3.0, 6.0);
                    self.spawn(
                        Particle::new(position, heading_vector(direction) * speed, lifetime, size, color)
                            .with_max_lifetime(0.5),
                    );
                }
            }
        }
    }

    /// Fireball plus half as many slower smoke puffs.
    pub fn explosion<R: Rng + ?Sized>(&mut self, rng: &mut R, position: DVec2, size: ExplosionSize) {
        let tier = ExplosionTier::for_size(size);
        for _ in 0..tier.count {
            let direction = rng.gen::<f64>() * TAU;
            let speed = between(rng, tier.speed.0, tier.speed.1);
            let color = pick(rng, &EXPLOSION_FIRE);
            let lifetime = between(rng, tier.lifetime.0, tier.lifetime.1);
            let radius = between(rng, tier.size.0, tier.size.1);
            self.spawn(
                Particle::new(position, heading_vector(direction) * speed, lifetime, radius, color)
                    .shrinking(),
            );
        }
        for _ in 0..tier.count / 2 {
            let direction = rng.gen::<f64>() * TAU;
            let speed = between(rng, 20.0, 80.0);
            let color = pick(rng, &EXPLOSION_SMOKE);
            let lifetime = between(rng, 0.5, 1.2);
            let radius = between(rng, 4.0, 8.0);
            self.spawn(
                Particle::new(position, heading_vector(direction) * speed, lifetime, radius, color)
                    .with_gravity(20.0),
            );
        }
    }

    /// Exhaust behind an engine cell. `power` scales the exhaust speed.
    pub fn engine_thrust<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        position: DVec2,
        angle: f64,
        power: f64,
    ) {
        let count = rng.gen_range(2..=3);
        for _ in 0..count {
            let direction = angle + PI + between(rng, -0.2, 0.2);
            let speed = between(rng, 80.0, 150.0) * power;
            let color = pick(rng, &ENGINE_GLOW);
            let lifetime = between(rng, 0.1, 0.3);
            let size = between(rng, 2.0, 4.0);
            self.spawn(
                Particle::new(position, heading_vector(direction) * speed, lifetime, size, color)
                    .shrinking()
                    .with_max_lifetime(0.3),
            );
        }
    }

    /// Sparks thrown off at a projectile impact.
    pub fn damage_sparks<R: Rng + ?Sized>(&mut self, rng: &mut R, position: DVec2) {
        for _ in 0..10 {
            let direction = rng.gen::<f64>() * TAU;
            let speed = between(rng, 80.0, 150.0);
            let color = pick(rng, &SPARKS);
            let lifetime = between(rng, 0.2, 0.4);
            let size = between(rng, 1.0, 3.0);
            self.spawn(
                Particle::new(position, heading_vector(direction) * speed, lifetime, size, color)
                    .shrinking()
                    .with_gravity(200.0)
                    .with_max_lifetime(0.4),
            );
        }
    }
}
