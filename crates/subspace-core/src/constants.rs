//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `SimConfig`; simulation math reads the
//! config, never these constants directly.

/// Nominal frame rate of the launcher loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal frame rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest `dt` a single tick will integrate (seconds).
pub const MAX_DT: f64 = 0.1;

// --- Craft grid ---

/// Grid width in cells.
pub const GRID_WIDTH: i32 = 10;

/// Grid height in cells.
pub const GRID_HEIGHT: i32 = 10;

/// Edge length of one grid cell in world units.
pub const GRID_CELL_SIZE: f64 = 32.0;

// --- Craft physics ---

/// Speed clamp (world units per second).
pub const MAX_VELOCITY: f64 = 300.0;

/// Multiplicative drag applied to linear and angular velocity every tick.
pub const DRAG: f64 = 0.98;

/// Angular acceleration of player rotation input (rad/s per second held).
pub const ROTATION_RATE: f64 = 3.0;

// --- Projectiles ---

/// Projectile lifetime in seconds.
pub const PROJECTILE_LIFETIME: f64 = 3.0;

// --- Adversaries ---

/// Chance per tick that an adversary pulls the trigger.
pub const ADVERSARY_FIRE_CHANCE: f64 = 0.02;

/// Adversaries per wave.
pub const WAVE_SIZE: u32 = 3;

/// Half extent of the square around the player in which a wave spawns.
pub const WAVE_SPAWN_HALF_EXTENT: f64 = 500.0;

/// Minimum distance between the player and a freshly spawned adversary
/// in the opening wave.
pub const INITIAL_SPAWN_MIN_DISTANCE: f64 = 300.0;

/// Play field used for the opening layout.
pub const ARENA_WIDTH: f64 = 1280.0;
pub const ARENA_HEIGHT: f64 = 720.0;

/// Margin kept between opening-wave spawns and the arena edge.
pub const ARENA_SPAWN_MARGIN: f64 = 100.0;

// --- Crew ---

/// Crew carried by the player craft.
pub const PLAYER_CREW: u32 = 5;

/// Crew carried by each adversary craft.
pub const ADVERSARY_CREW: u32 = 3;

/// Walking speed of crew inside a craft (world units per second).
pub const CREW_WALK_SPEED: f64 = 50.0;

/// Distance at which a walking crew member counts as arrived.
pub const CREW_ARRIVE_DISTANCE: f64 = 5.0;

// --- Particles ---

/// Velocity multiplier applied to every particle each update.
pub const PARTICLE_DRAG: f64 = 0.98;

/// Smallest radius a shrinking particle is drawn with.
pub const PARTICLE_MIN_RADIUS: f64 = 0.5;

/// Engine-thrust particle power scale: power = total thrust / this.
pub const ENGINE_FX_THRUST_SCALE: f64 = 1000.0;

/// XOR mask deriving the effects RNG stream from the gameplay seed.
pub const EFFECTS_STREAM: u64 = 0x5EED_EFFE_C7;
