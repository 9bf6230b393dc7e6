//! Scripted pilot for headless runs.
//!
//! Reads the latest snapshot and emits the flight commands a player
//! holding keys would send: turn toward the nearest adversary, close in,
//! and fire once roughly on target.

use glam::DVec2;

use subspace_ai::pursuit::bearing_error;
use subspace_core::commands::PlayerCommand;
use subspace_core::enums::{GameMode, GamePhase};
use subspace_core::state::{CraftView, GameStateSnapshot};

/// Steering thresholds for the scripted pilot.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Bearing error below which no turn is commanded (radians).
    pub turn_deadband: f64,
    /// Bearing error below which weapons fire (radians).
    pub fire_cone: f64,
    /// Thrust while farther than this from the target.
    pub standoff: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            turn_deadband: 0.08,
            fire_cone: 0.25,
            standoff: 220.0,
        }
    }
}

impl Autopilot {
    /// Commands for the next tick. Empty when there is nothing to fly.
    pub fn decide(&self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if snapshot.phase != GamePhase::Active || snapshot.mode != GameMode::Play {
            return Vec::new();
        }
        let Some(player) = snapshot.player.as_ref() else {
            return Vec::new();
        };
        let Some(target) = nearest_adversary(player.position, &snapshot.adversaries) else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        let error = bearing_error(player.position, player.heading, target.position);
        if error > self.turn_deadband {
            commands.push(PlayerCommand::RotateRight);
        } else if error < -self.turn_deadband {
            commands.push(PlayerCommand::RotateLeft);
        }

        if error.abs() < self.fire_cone {
            commands.push(PlayerCommand::Fire);
            if player.position.distance(target.position) > self.standoff {
                commands.push(PlayerCommand::MoveForward);
            }
        }
        commands
    }
}

fn nearest_adversary(from: DVec2, adversaries: &[CraftView]) -> Option<&CraftView> {
    adversaries
        .iter()
        .filter(|a| !a.destroyed)
        .min_by(|a, b| {
            from.distance_squared(a.position)
                .total_cmp(&from.distance_squared(b.position))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use subspace_core::config::SimConfig;
    use subspace_core::constants::DT;
    use subspace_sim::SimulationEngine;

    fn snapshot_with_target(offset: DVec2) -> GameStateSnapshot {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let mut snap = engine.tick(DT);
        let player = snap.player.clone().unwrap();
        snap.adversaries.truncate(1);
        snap.adversaries[0].position =
            player.position + DVec2::from_angle(player.heading).rotate(offset);
        snap
    }

    #[test]
    fn test_fires_and_closes_on_target_ahead() {
        let snap = snapshot_with_target(DVec2::new(500.0, 0.0));
        let cmds = Autopilot::default().decide(&snap);
        assert!(cmds.contains(&PlayerCommand::Fire));
        assert!(cmds.contains(&PlayerCommand::MoveForward));
        assert!(!cmds.contains(&PlayerCommand::RotateLeft));
        assert!(!cmds.contains(&PlayerCommand::RotateRight));
    }

    #[test]
    fn test_holds_standoff_distance() {
        let snap = snapshot_with_target(DVec2::new(100.0, 0.0));
        let cmds = Autopilot::default().decide(&snap);
        assert!(cmds.contains(&PlayerCommand::Fire));
        assert!(!cmds.contains(&PlayerCommand::MoveForward));
    }

    #[test]
    fn test_turns_toward_target() {
        // Positive local y is a positive bearing error.
        let snap = snapshot_with_target(DVec2::new(0.0, 300.0));
        let cmds = Autopilot::default().decide(&snap);
        assert_eq!(cmds, vec![PlayerCommand::RotateRight]);

        let snap = snapshot_with_target(DVec2::new(0.0, -300.0));
        let cmds = Autopilot::default().decide(&snap);
        assert_eq!(cmds, vec![PlayerCommand::RotateLeft]);
    }

    #[test]
    fn test_idle_when_not_flying() {
        let mut snap = snapshot_with_target(DVec2::new(500.0, 0.0));
        snap.phase = GamePhase::Paused;
        assert!(Autopilot::default().decide(&snap).is_empty());

        let mut snap = snapshot_with_target(DVec2::new(500.0, 0.0));
        snap.adversaries.clear();
        assert!(Autopilot::default().decide(&snap).is_empty());
    }

    #[test]
    fn test_picks_nearest_live_adversary() {
        let snap = snapshot_with_target(DVec2::ZERO);
        let mut far = snap.adversaries[0].clone();
        far.position = DVec2::new(900.0, 0.0);
        let mut near = far.clone();
        near.position = DVec2::new(100.0, 0.0);
        let mut wreck = far.clone();
        wreck.position = DVec2::new(10.0, 0.0);
        wreck.destroyed = true;

        let fleet = vec![far, near, wreck];
        let picked = nearest_adversary(DVec2::ZERO, &fleet).unwrap();
        assert_eq!(picked.position, DVec2::new(100.0, 0.0));
    }
}
