//! Player flight controls.
//!
//! Flight intents arrive as commands and latch for the current tick only.

use hecs::{Entity, World};

use subspace_core::commands::PlayerCommand;
use subspace_core::events::SimEvent;

use crate::craft::Craft;
use crate::projectile::Projectile;

/// Flight intents held for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
}

impl ControlState {
    /// Latch a flight intent. Returns false for non-flight commands.
    pub fn latch(&mut self, command: &PlayerCommand) -> bool {
        match command {
            PlayerCommand::MoveForward => self.thrust = true,
            PlayerCommand::RotateLeft => self.rotate_left = true,
            PlayerCommand::RotateRight => self.rotate_right = true,
            PlayerCommand::Fire => self.fire = true,
            _ => return false,
        }
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Apply the latched controls to the player craft.
/// Returns the number of projectiles fired.
pub fn run(
    world: &mut World,
    player: Option<Entity>,
    controls: &ControlState,
    dt: f64,
    events: &mut Vec<SimEvent>,
    launched: &mut Vec<Projectile>,
) -> u32 {
    let Some(player) = player else {
        return 0;
    };
    let Ok(mut craft) = world.get::<&mut Craft>(player) else {
        return 0;
    };
    if craft.is_destroyed() {
        return 0;
    }

    if controls.thrust && craft.apply_thrust(dt) {
        super::emit_thrust(&craft, events);
    }
    if controls.rotate_left {
        craft.rotate(-1, dt);
    }
    if controls.rotate_right {
        craft.rotate(1, dt);
    }
    if !controls.fire {
        return 0;
    }
    let shots = craft.fire_weapons();
    let fired = shots.len() as u32;
    super::emit_fired(&craft, shots, events, launched);
    fired
}
