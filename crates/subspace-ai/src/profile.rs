//! Behavioural profile for adversary pilots.

/// Tuning for the pursuit controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdversaryProfile {
    /// Angular velocity per radian of heading error (1/s).
    pub turn_gain: f64,
    /// Angular velocity cap (rad/s).
    pub max_turn_rate: f64,
    /// Heading error below which the pilot stops turning (rad).
    pub facing_tolerance: f64,
    /// Heading error below which the pilot may thrust (rad).
    pub thrust_tolerance: f64,
    /// Preferred distance to the target; no thrust inside it.
    pub standoff_distance: f64,
    /// Targets closer than this are ignored entirely.
    pub min_engage_distance: f64,
}

impl Default for AdversaryProfile {
    fn default() -> Self {
        Self {
            turn_gain: 4.0,
            max_turn_rate: 2.0,
            facing_tolerance: 0.1,
            thrust_tolerance: 0.5,
            standoff_distance: 300.0,
            min_engage_distance: 10.0,
        }
    }
}
