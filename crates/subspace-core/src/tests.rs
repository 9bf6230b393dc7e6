#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    use crate::catalog::*;
    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, SimConfig};
    use crate::enums::*;
    use crate::grid::GridSpec;
    use crate::types::*;

    // ---- Catalog ----

    #[test]
    fn test_weapon_profiles() {
        let laser = ComponentKind::WeaponLaser.weapon().unwrap();
        assert_eq!(laser.projectile, ProjectileKind::Laser);
        assert_eq!(laser.damage, 10);
        assert_eq!(laser.speed, 500.0);
        assert_eq!(stats_for(ComponentKind::WeaponLaser).base_cooldown, 0.5);

        let cannon = ComponentKind::WeaponCannon.weapon().unwrap();
        assert_eq!(cannon.projectile, ProjectileKind::Cannon);
        assert_eq!(cannon.damage, 25);
        assert_eq!(cannon.speed, 350.0);
        assert_eq!(stats_for(ComponentKind::WeaponCannon).base_cooldown, 1.5);
    }

    #[test]
    fn test_only_weapons_have_profiles() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.weapon().is_some(), kind.is_weapon(), "{kind:?}");
        }
    }

    #[test]
    fn test_power_sources() {
        assert_eq!(stats_for(ComponentKind::Core).power_generation, 50);
        assert_eq!(stats_for(ComponentKind::Power).power_generation, 100);
        assert_eq!(stats_for(ComponentKind::Shield).power_consumption, 25);
        assert_eq!(stats_for(ComponentKind::Engine).thrust, 200.0);
    }

    #[test]
    fn test_stats_for_name_falls_back() {
        assert_eq!(stats_for_name("armor").max_health, 150);
        let unknown = stats_for_name("warp_drive");
        assert_eq!(unknown, &FALLBACK_STATS);
        assert_eq!(unknown.max_health, 50);
        assert!(unknown.weapon.is_none());
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ComponentKind::from_name("CORE"), None);
    }

    #[test]
    fn test_core_not_in_builder_palette() {
        assert!(!ComponentKind::BUILDER_PALETTE.contains(&ComponentKind::Core));
        assert!(!ComponentKind::Core.is_buildable());
        assert!(ComponentKind::Shield.is_buildable());
    }

    // ---- Angles and transforms ----

    #[test]
    fn test_wrap_angle_range() {
        for a in [-10.0, -TAU, -PI, -1e-17, 0.0, 1.0, TAU, 3.0 * TAU + 0.5, 100.0] {
            let w = wrap_angle(a);
            assert!((0.0..TAU).contains(&w), "wrap_angle({a}) = {w}");
        }
        assert_abs_diff_eq!(wrap_angle(TAU + 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_angle() {
        assert_abs_diff_eq!(normalize_angle(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(-1.5 * PI), 0.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(0.3), 0.3, epsilon = 1e-12);
        for a in [-20.0, -4.0, 4.0, 20.0] {
            let n = normalize_angle(a);
            assert!((-PI..=PI).contains(&n));
        }
    }

    #[test]
    fn test_local_to_world_rotates_with_heading() {
        let origin = DVec2::new(100.0, 50.0);
        let p = local_to_world(DVec2::new(10.0, 0.0), origin, FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transforms_are_inverse() {
        let origin = DVec2::new(-37.0, 812.5);
        for heading in [0.0, 0.4, 2.0, 4.5, 6.1] {
            for local in [DVec2::new(3.0, -7.0), DVec2::new(-120.0, 64.0), DVec2::ZERO] {
                let back = world_to_local(local_to_world(local, origin, heading), origin, heading);
                assert_abs_diff_eq!(back.x, local.x, epsilon = 1e-9);
                assert_abs_diff_eq!(back.y, local.y, epsilon = 1e-9);
            }
        }
    }

    // ---- Grid ----

    #[test]
    fn test_cell_centers_map_back_to_their_cell() {
        let grid = GridSpec::new(10, 10, 32.0);
        let origin = DVec2::new(640.0, 360.0);
        for heading in [0.0, 1.0, 3.5] {
            for gx in 0..10 {
                for gy in 0..10 {
                    let world = grid.cell_to_world(gx, gy, origin, heading);
                    assert_eq!(grid.world_to_cell(world, origin, heading), Some((gx, gy)));
                }
            }
        }
    }

    #[test]
    fn test_cell_at_handles_negative_offsets() {
        let grid = GridSpec::new(10, 10, 32.0);
        // Just left of the grid centre lies in column 4, not 5.
        assert_eq!(grid.cell_at(DVec2::new(-0.5, 0.5)), Some((4, 5)));
        assert_eq!(grid.cell_at(DVec2::new(0.5, 0.5)), Some((5, 5)));
        assert_eq!(grid.cell_at(DVec2::new(-161.0, 0.0)), None);
        assert_eq!(grid.cell_at(DVec2::new(160.0, 0.0)), None);
        assert_eq!(grid.cell_at(DVec2::new(f64::NAN, 0.0)), None);
    }

    #[test]
    fn test_grid_contains() {
        let grid = GridSpec::new(10, 10, 32.0);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(9, 9));
        assert!(!grid.contains(10, 0));
        assert!(!grid.contains(0, -1));
    }

    // ---- Bounds ----

    #[test]
    fn test_bounds_enclosing_and_contains() {
        let b = Bounds::enclosing([
            DVec2::new(1.0, 5.0),
            DVec2::new(-3.0, 2.0),
            DVec2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(b.min, DVec2::new(-3.0, -1.0));
        assert_eq!(b.max, DVec2::new(4.0, 5.0));
        assert!(b.contains(DVec2::new(4.0, 5.0)));
        assert!(b.contains(DVec2::new(0.0, 0.0)));
        assert!(!b.contains(DVec2::new(4.01, 0.0)));
        assert!(Bounds::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_damaged_color_darkens() {
        let c = Color::rgb(200, 100, 0);
        assert_eq!(c.damaged(1.0), c);
        assert_eq!(c.damaged(0.0), Color::rgb(60, 30, 0));
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.craft.grid_width, 10);
        assert_eq!(config.craft.grid_cell_size, 32.0);
        assert_eq!(config.craft.max_velocity, 300.0);
        assert_eq!(config.craft.drag, 0.98);
        assert_eq!(config.craft.rotation_rate, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_toml() {
        let config = SimConfig::from_toml_str(
            r#"
            seed = 7

            [craft]
            max_velocity = 450.0

            [combat]
            wave_size = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.craft.max_velocity, 450.0);
        assert_eq!(config.craft.drag, 0.98);
        assert_eq!(config.combat.wave_size, 5);
        assert_eq!(config.craft.projectile_lifetime, 3.0);
    }

    #[test]
    fn test_config_rejects_bad_drag() {
        let err = SimConfig::from_toml_str("[craft]\ndrag = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "craft.drag", .. }));
    }

    #[test]
    fn test_config_rejects_empty_waves() {
        let err = SimConfig::from_toml_str("[combat]\nwave_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "combat.wave_size", .. }));
    }

    #[test]
    fn test_config_rejects_non_finite_floats() {
        let err = SimConfig::from_toml_str("[craft]\nrotation_rate = nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "craft.rotation_rate", .. }));

        let err = SimConfig::from_toml_str("[craft]\nrotation_rate = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "craft.rotation_rate", .. }));

        let err = SimConfig::from_toml_str("[craft]\nprojectile_lifetime = inf\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "craft.projectile_lifetime", .. }));

        let err = SimConfig::from_toml_str("max_dt = inf\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_dt", .. }));

        let err = SimConfig::from_toml_str("[craft]\nmax_velocity = nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "craft.max_velocity", .. }));
    }

    #[test]
    fn test_config_rejects_malformed_toml() {
        let err = SimConfig::from_toml_str("seed = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file() {
        let err = SimConfig::load_from_file("/nonexistent/subspace.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Commands ----

    #[test]
    fn test_player_command_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::BuilderPlace {
            grid_x: 2,
            grid_y: 3,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"BuilderPlace","grid_x":2,"grid_y":3}"#);

        let back: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectComponentKind","kind":"weapon_cannon"}"#)
                .unwrap();
        assert_eq!(
            back,
            PlayerCommand::SelectComponentKind {
                kind: ComponentKind::WeaponCannon
            }
        );
    }
}
