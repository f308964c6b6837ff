#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, EntitySpecs, SimConfig};
    use crate::enums::*;
    use crate::events::EpisodeEvent;
    use crate::state::EpisodeSnapshot;
    use crate::types::{Bounds, SimTime};
    use crate::vector;

    // ---- Vector math ----

    #[test]
    fn test_norm_unit_length() {
        let v = vector::norm(DVec2::new(3.0, 4.0));
        assert!((vector::mag(v) - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_norm_zero_stays_zero() {
        assert_eq!(vector::norm(DVec2::ZERO), DVec2::ZERO);
    }

    #[test]
    fn test_rotate_half_turn_reverses() {
        let v = vector::rotate(DVec2::new(0.0, 1.0), std::f64::consts::PI);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_keeps_unit_length() {
        let mut v = DVec2::new(1.0, 0.0);
        for i in 0..1000 {
            v = vector::rotate(v, 0.37 * i as f64);
        }
        assert!((vector::mag(v) - 1.0).abs() < 1e-12);
    }

    // ---- Bounds ----

    #[test]
    fn test_bounds_are_inclusive() {
        let b = Bounds::new(500.0, 400.0);
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(500.0, 400.0));
        assert!(!b.contains(-0.001, 10.0));
        assert!(!b.contains(10.0, 400.001));
        assert_eq!(b.center(), DVec2::new(250.0, 200.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(0.25);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.75).abs() < 1e-12);
    }

    // ---- Config ----

    #[test]
    fn test_default_sizes() {
        let config = SimConfig::default();
        assert_eq!(config.state_size(), 2 + 4 * (10 + 4));
        assert_eq!(config.action_count(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let json = r#"{ "seed": 7, "target_count": 3, "arena": { "width": 800 } }"#;
        let config = SimConfig::from_json_str(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.target_count, 3);
        assert_eq!(config.arena.width, 800.0);
        assert_eq!(config.arena.height, 500.0);
        assert_eq!(config.obstacle_count, 4);
        assert_eq!(config.goal_edge, ArenaEdge::Top);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let zero_targets = SimConfig::from_json_str(r#"{ "target_count": 0 }"#);
        assert!(matches!(zero_targets, Err(ConfigError::Invalid(_))));

        let bad_arena = SimConfig::from_json_str(r#"{ "arena": { "width": -1 } }"#);
        assert!(matches!(bad_arena, Err(ConfigError::Invalid(_))));

        let bad_speed = SimConfig::from_json_str(r#"{ "speed_multiplier": 0 }"#);
        assert!(matches!(bad_speed, Err(ConfigError::Invalid(_))));

        let garbage = SimConfig::from_json_str("{ not json");
        assert!(matches!(garbage, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SimConfig::from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_entity_specs_scale_with_arena() {
        let specs = EntitySpecs::derive(&SimConfig::default());
        assert!((specs.interceptor.radius - 12.75).abs() < 1e-9);
        assert!((specs.target.radius - 4.25).abs() < 1e-9);
        assert!((specs.obstacle.radius - 6.375).abs() < 1e-9);
        assert!((specs.target.ring_radius - 25.0).abs() < 1e-9);
        assert!((specs.obstacle.orbit_radius - 125.0).abs() < 1e-9);
        assert!((specs.target.speed - 0.0165 * 500.0 * 2.3).abs() < 1e-9);
        assert!((specs.target.flip_interval - 20.0 / 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_magnet_range_is_radius_difference() {
        let specs = EntitySpecs::derive(&SimConfig::default());
        assert!((specs.magnet_range - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_orbit_period() {
        let specs = EntitySpecs::derive(&SimConfig::default());
        let expected = std::f64::consts::TAU * 125.0 / specs.obstacle.speed;
        assert!((specs.obstacle.orbit_period() - expected).abs() < 1e-9);
        let full_turn = specs.obstacle.orbit_rate() * specs.obstacle.orbit_period();
        assert!((full_turn - std::f64::consts::TAU).abs() < 1e-9);
    }

    // ---- Enums / serde ----

    #[test]
    fn test_terminal_cause_failure() {
        assert!(!TerminalCause::TargetsExhausted.is_failure());
        assert!(TerminalCause::InterceptorExited.is_failure());
        assert!(TerminalCause::ObstacleCollision.is_failure());
        assert!(TerminalCause::Timeout.is_failure());
    }

    #[test]
    fn test_edge_outward_directions() {
        assert_eq!(ArenaEdge::Top.outward(), DVec2::new(0.0, -1.0));
        assert_eq!(ArenaEdge::Bottom.outward(), DVec2::new(0.0, 1.0));
        assert_eq!(ArenaEdge::Left.outward(), DVec2::new(-1.0, 0.0));
        assert_eq!(ArenaEdge::Right.outward(), DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_command_serde_tagged() {
        let json = serde_json::to_string(&PlayerCommand::Steer { x: 1.0, y: 0.0 }).unwrap();
        assert!(json.contains(r#""type":"Steer""#));
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Reset"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::Reset));
        let mode: PlayerCommand =
            serde_json::from_str(r#"{"type":"SetControlMode","mode":"Manual"}"#).unwrap();
        assert!(matches!(
            mode,
            PlayerCommand::SetControlMode {
                mode: ControlMode::Manual
            }
        ));
    }

    #[test]
    fn test_event_serde() {
        let event = EpisodeEvent::TargetExited {
            slot: 3,
            edge: ArenaEdge::Top,
            outcome: ExitOutcome::Goal,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: EpisodeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = EpisodeSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
    }
}
