//! Pursuit-and-hold-range controller.
//!
//! Pure function of the pilot's situation. No ECS dependency and no
//! memory between ticks: the craft applies the returned steering.

use glam::DVec2;

use subspace_core::enums::PursuitPhase;
use subspace_core::types::normalize_angle;

use crate::profile::AdversaryProfile;

/// Input to the controller for one craft.
#[derive(Debug, Clone, Copy)]
pub struct PursuitContext {
    pub position: DVec2,
    pub heading: f64,
    /// Target position, `None` when the target is gone.
    pub target: Option<DVec2>,
}

/// Steering decision for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitUpdate {
    pub phase: PursuitPhase,
    /// Replacement angular velocity; `None` leaves it untouched.
    pub angular_velocity: Option<f64>,
    /// Whether to fire the engines this tick.
    pub thrust: bool,
}

impl PursuitUpdate {
    fn idle() -> Self {
        Self {
            phase: PursuitPhase::Idle,
            angular_velocity: None,
            thrust: false,
        }
    }
}

/// Signed heading error toward `target`, in [-π, π].
pub fn bearing_error(position: DVec2, heading: f64, target: DVec2) -> f64 {
    let to_target = target - position;
    let bearing = to_target.y.atan2(to_target.x);
    normalize_angle(bearing - heading)
}

/// Evaluate the controller for one craft.
pub fn evaluate(ctx: &PursuitContext, profile: &AdversaryProfile) -> PursuitUpdate {
    let Some(target) = ctx.target else {
        return PursuitUpdate::idle();
    };

    let distance = ctx.position.distance(target);
    if !distance.is_finite() || distance < profile.min_engage_distance {
        return PursuitUpdate::idle();
    }

    let error = bearing_error(ctx.position, ctx.heading, target);

    let angular_velocity = if error.abs() > profile.facing_tolerance {
        (error * profile.turn_gain).clamp(-profile.max_turn_rate, profile.max_turn_rate)
    } else {
        0.0
    };

    let facing = error.abs() < profile.thrust_tolerance;
    let beyond_standoff = distance > profile.standoff_distance;

    let phase = match (facing, beyond_standoff) {
        (false, _) => PursuitPhase::Turning,
        (true, true) => PursuitPhase::Closing,
        (true, false) => PursuitPhase::Holding,
    };

    PursuitUpdate {
        phase,
        angular_velocity: Some(angular_velocity),
        thrust: facing && beyond_standoff,
    }
}
