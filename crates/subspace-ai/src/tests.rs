#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    use subspace_core::enums::PursuitPhase;

    use crate::profile::AdversaryProfile;
    use crate::pursuit::{bearing_error, evaluate, PursuitContext};

    fn make_context(heading: f64, target: Option<DVec2>) -> PursuitContext {
        PursuitContext {
            position: DVec2::ZERO,
            heading,
            target,
        }
    }

    #[test]
    fn test_no_target_is_noop() {
        let update = evaluate(&make_context(1.0, None), &AdversaryProfile::default());
        assert_eq!(update.phase, PursuitPhase::Idle);
        assert_eq!(update.angular_velocity, None);
        assert!(!update.thrust);
    }

    #[test]
    fn test_target_too_close_is_noop() {
        let update = evaluate(
            &make_context(0.0, Some(DVec2::new(5.0, 0.0))),
            &AdversaryProfile::default(),
        );
        assert_eq!(update.phase, PursuitPhase::Idle);
        assert_eq!(update.angular_velocity, None);
    }

    #[test]
    fn test_facing_far_target_closes_in() {
        let update = evaluate(
            &make_context(0.0, Some(DVec2::new(1000.0, 0.0))),
            &AdversaryProfile::default(),
        );
        assert_eq!(update.phase, PursuitPhase::Closing);
        assert_eq!(update.angular_velocity, Some(0.0));
        assert!(update.thrust);
    }

    #[test]
    fn test_facing_near_target_holds_range() {
        let update = evaluate(
            &make_context(0.0, Some(DVec2::new(200.0, 0.0))),
            &AdversaryProfile::default(),
        );
        assert_eq!(update.phase, PursuitPhase::Holding);
        assert!(!update.thrust);
    }

    #[test]
    fn test_turns_toward_target_without_thrust() {
        // Target straight "down" (+y) while facing +x: turn positive.
        let update = evaluate(
            &make_context(0.0, Some(DVec2::new(0.0, 1000.0))),
            &AdversaryProfile::default(),
        );
        assert_eq!(update.phase, PursuitPhase::Turning);
        assert_eq!(update.angular_velocity, Some(2.0));
        assert!(!update.thrust);

        // Target straight "up" (-y): turn negative.
        let update = evaluate(
            &make_context(0.0, Some(DVec2::new(0.0, -1000.0))),
            &AdversaryProfile::default(),
        );
        assert_eq!(update.angular_velocity, Some(-2.0));
    }

    #[test]
    fn test_turn_rate_proportional_inside_saturation() {
        let profile = AdversaryProfile::default();
        // Error of 0.3 rad: 0.3 * 4.0 = 1.2 rad/s, below the 2.0 cap.
        let target = DVec2::from_angle(0.3) * 1000.0;
        let update = evaluate(&make_context(0.0, Some(target)), &profile);
        assert_abs_diff_eq!(update.angular_velocity.unwrap(), 1.2, epsilon = 1e-9);
        assert!(update.thrust, "0.3 rad is inside the thrust tolerance");
    }

    #[test]
    fn test_wraparound_takes_short_way() {
        // Heading just below 2π, target just above 0: error is small and positive.
        let heading = 2.0 * PI - 0.2;
        let target = DVec2::from_angle(0.2) * 1000.0;
        let error = bearing_error(DVec2::ZERO, heading, target);
        assert_abs_diff_eq!(error, 0.4, epsilon = 1e-9);

        let update = evaluate(&make_context(heading, Some(target)), &AdversaryProfile::default());
        assert!(update.angular_velocity.unwrap() > 0.0);
        assert!(update.thrust);
    }

    #[test]
    fn test_bearing_error_behind() {
        let error = bearing_error(DVec2::ZERO, FRAC_PI_2, DVec2::new(0.0, -50.0));
        assert_abs_diff_eq!(error.abs(), PI, epsilon = 1e-9);
    }
}
