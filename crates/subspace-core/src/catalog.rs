//! Static component catalog.
//!
//! One immutable stat row per `ComponentKind`. Weapon behaviour, render
//! glyph and colour are data here rather than branches at call sites.

use crate::enums::{ComponentKind, Glyph, ProjectileKind};
use crate::types::Color;

/// Projectile payload of a weapon component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    pub projectile: ProjectileKind,
    pub damage: u32,
    /// Muzzle speed (world units per second).
    pub speed: f64,
}

/// Base stats of a component kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentStats {
    pub name: &'static str,
    pub max_health: u32,
    pub power_consumption: u32,
    pub power_generation: u32,
    pub thrust: f64,
    /// Seconds between shots. Zero for non-weapons.
    pub base_cooldown: f64,
    pub weapon: Option<WeaponProfile>,
    pub glyph: Glyph,
    pub color: Color,
}

const LASER: WeaponProfile = WeaponProfile {
    projectile: ProjectileKind::Laser,
    damage: 10,
    speed: 500.0,
};

const CANNON: WeaponProfile = WeaponProfile {
    projectile: ProjectileKind::Cannon,
    damage: 25,
    speed: 350.0,
};

const CORE: ComponentStats = ComponentStats {
    name: "Core",
    max_health: 200,
    power_consumption: 0,
    power_generation: 50,
    thrust: 0.0,
    base_cooldown: 0.0,
    weapon: None,
    glyph: Glyph::Circle,
    color: Color::rgb(255, 200, 0),
};

const ENGINE: ComponentStats = ComponentStats {
    name: "Engine",
    max_health: 50,
    power_consumption: 10,
    power_generation: 0,
    thrust: 200.0,
    base_cooldown: 0.0,
    weapon: None,
    glyph: Glyph::Triangle,
    color: Color::rgb(0, 150, 255),
};

const WEAPON_LASER: ComponentStats = ComponentStats {
    name: "Laser",
    max_health: 40,
    power_consumption: 15,
    power_generation: 0,
    thrust: 0.0,
    base_cooldown: 0.5,
    weapon: Some(LASER),
    glyph: Glyph::Barrel,
    color: Color::rgb(255, 0, 0),
};

const WEAPON_CANNON: ComponentStats = ComponentStats {
    name: "Cannon",
    max_health: 60,
    power_consumption: 20,
    power_generation: 0,
    thrust: 0.0,
    base_cooldown: 1.5,
    weapon: Some(CANNON),
    glyph: Glyph::Barrel,
    color: Color::rgb(150, 150, 0),
};

const ARMOR: ComponentStats = ComponentStats {
    name: "Armor",
    max_health: 150,
    power_consumption: 0,
    power_generation: 0,
    thrust: 0.0,
    base_cooldown: 0.0,
    weapon: None,
    glyph: Glyph::None,
    color: Color::rgb(150, 150, 150),
};

const POWER: ComponentStats = ComponentStats {
    name: "Reactor",
    max_health: 80,
    power_consumption: 0,
    power_generation: 100,
    thrust: 0.0,
    base_cooldown: 0.0,
    weapon: None,
    glyph: Glyph::None,
    color: Color::rgb(0, 255, 100),
};

const SHIELD: ComponentStats = ComponentStats {
    name: "Shield",
    max_health: 30,
    power_consumption: 25,
    power_generation: 0,
    thrust: 0.0,
    base_cooldown: 0.0,
    weapon: None,
    glyph: Glyph::None,
    color: Color::rgb(100, 200, 255),
};

/// Generic low-stat row returned for names outside the catalog.
pub const FALLBACK_STATS: ComponentStats = ComponentStats {
    name: "Unknown",
    max_health: 50,
    power_consumption: 0,
    power_generation: 0,
    thrust: 0.0,
    base_cooldown: 0.0,
    weapon: None,
    glyph: Glyph::None,
    color: Color::rgb(100, 100, 100),
};

/// Base stats of a component kind.
pub fn stats_for(kind: ComponentKind) -> &'static ComponentStats {
    match kind {
        ComponentKind::Core => &CORE,
        ComponentKind::Engine => &ENGINE,
        ComponentKind::WeaponLaser => &WEAPON_LASER,
        ComponentKind::WeaponCannon => &WEAPON_CANNON,
        ComponentKind::Armor => &ARMOR,
        ComponentKind::Power => &POWER,
        ComponentKind::Shield => &SHIELD,
    }
}

/// Stats by snake_case kind name. Unknown names get [`FALLBACK_STATS`].
pub fn stats_for_name(name: &str) -> &'static ComponentStats {
    ComponentKind::from_name(name)
        .map(stats_for)
        .unwrap_or(&FALLBACK_STATS)
}

impl ComponentKind {
    pub fn stats(self) -> &'static ComponentStats {
        stats_for(self)
    }

    pub fn weapon(self) -> Option<WeaponProfile> {
        stats_for(self).weapon
    }
}
