#[cfg(test)]
mod tests {
    use glam::DVec2;

    use iarc_core::enums::ArenaEdge;
    use iarc_core::types::Bounds;

    use crate::action::{action_count, Action};
    use crate::agent::{Agent, ChaseAgent, IdleAgent, RandomAgent};
    use crate::observation::ObservationLayout;
    use crate::reward::{distance_shaping, RewardBreakdown};

    // ---- Actions ----

    #[test]
    fn test_decode_basic_actions() {
        assert_eq!(Action::decode(Some(0), 10), Action::Noop);
        assert_eq!(Action::decode(Some(1), 10), Action::Magnet);
        assert_eq!(Action::decode(Some(2), 10), Action::Pursue(0));
        assert_eq!(Action::decode(Some(11), 10), Action::Pursue(9));
    }

    #[test]
    fn test_decode_invalid_is_noop() {
        assert_eq!(Action::decode(None, 10), Action::Noop);
        assert_eq!(Action::decode(Some(12), 10), Action::Noop);
        assert_eq!(Action::decode(Some(usize::MAX), 10), Action::Noop);
    }

    #[test]
    fn test_action_index_inverse() {
        for i in 0..action_count(5) {
            assert_eq!(Action::decode(Some(i), 5).index(), i);
        }
    }

    // ---- Layout ----

    #[test]
    fn test_layout_offsets() {
        let layout = ObservationLayout::new(10, 4);
        assert_eq!(layout.len(), 58);
        assert!(!layout.is_empty());
        // The interceptor pair is always present.
        assert_eq!(ObservationLayout::new(0, 0).len(), 2);
        assert!(!ObservationLayout::new(0, 0).is_empty());
        assert_eq!(layout.obstacle_offset(0), 2);
        assert_eq!(layout.obstacle_offset(3), 14);
        assert_eq!(layout.target_offset(0), 18);
        assert_eq!(layout.target_offset(9), 54);
    }

    #[test]
    fn test_layout_rejects_wrong_length() {
        let layout = ObservationLayout::new(2, 1);
        assert!(layout.interceptor(&[0.5, 0.5]).is_none());
        assert!(layout.target(&layout.blank(), 2).is_none());
        assert!(layout.target(&layout.blank(), 1).unwrap().is_sentinel());
    }

    #[test]
    fn test_layout_write_then_read() {
        let layout = ObservationLayout::new(2, 1);
        let mut state = layout.blank();
        ObservationLayout::write_entry(
            &mut state,
            layout.target_offset(1),
            DVec2::new(0.25, 0.75),
            DVec2::new(0.0, 1.0),
        );
        let entry = layout.target(&state, 1).unwrap();
        assert_eq!(entry.position, DVec2::new(0.25, 0.75));
        assert_eq!(entry.heading, DVec2::new(0.0, 1.0));
        assert!(layout.obstacle(&state, 0).unwrap().is_sentinel());
    }

    // ---- Reward ----

    #[test]
    fn test_shaping_is_zero_without_targets() {
        let bounds = Bounds::new(500.0, 500.0);
        let r = distance_shaping(DVec2::new(250.0, 250.0), Vec::new(), 10, &bounds);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_shaping_normalized() {
        let bounds = Bounds::new(300.0, 400.0);
        // Single target at the far corner: distance equals the diagonal.
        let r = distance_shaping(DVec2::ZERO, vec![DVec2::new(300.0, 400.0)], 1, &bounds);
        assert!((r + 1.0).abs() < 1e-12);
        let r = distance_shaping(DVec2::ZERO, vec![DVec2::new(300.0, 400.0)], 2, &bounds);
        assert!((r + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_terminal_override_replaces_total() {
        let mut breakdown = RewardBreakdown {
            exits: 10.0,
            magnet: 1.0,
            shaping: -0.2,
            terminal_override: None,
        };
        assert!((breakdown.total() - 10.8).abs() < 1e-12);
        breakdown.terminal_override = Some(-10.0);
        assert_eq!(breakdown.total(), -10.0);
    }

    // ---- Agents ----

    #[test]
    fn test_idle_agent() {
        let mut agent = IdleAgent::default();
        assert_eq!(agent.act(&[]), Some(0));
        agent.learn(1.5);
        agent.learn(-0.5);
        assert!((agent.total_reward - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_agent_in_range_and_seeded() {
        let mut a = RandomAgent::new(9, 3);
        let mut b = RandomAgent::new(9, 3);
        for _ in 0..200 {
            let x = a.act(&[]).unwrap();
            assert!(x < 5);
            assert_eq!(Some(x), b.act(&[]));
        }
    }

    fn chase_fixture(goal: ArenaEdge) -> (ObservationLayout, ChaseAgent) {
        let layout = ObservationLayout::new(2, 0);
        let agent = ChaseAgent::new(layout, Bounds::new(100.0, 100.0), 5.0, goal);
        (layout, agent)
    }

    /// Interceptor at the center, slot 0 two units to its right.
    fn target_in_range(layout: &ObservationLayout, heading: DVec2) -> Vec<f64> {
        let mut state = layout.blank();
        state[0] = 0.5;
        state[1] = 0.5;
        ObservationLayout::write_entry(
            &mut state,
            layout.target_offset(0),
            DVec2::new(0.52, 0.5),
            heading,
        );
        state
    }

    #[test]
    fn test_chase_pursues_nearest() {
        let (layout, mut agent) = chase_fixture(ArenaEdge::Top);
        let mut state = layout.blank();
        state[0] = 0.5;
        state[1] = 0.5;
        ObservationLayout::write_entry(
            &mut state,
            layout.target_offset(0),
            DVec2::new(0.9, 0.9),
            DVec2::X,
        );
        ObservationLayout::write_entry(
            &mut state,
            layout.target_offset(1),
            DVec2::new(0.6, 0.5),
            DVec2::X,
        );
        assert_eq!(agent.act(&state), Some(Action::Pursue(1).index()));
    }

    #[test]
    fn test_chase_magnets_downward_target_in_range() {
        let (layout, mut agent) = chase_fixture(ArenaEdge::Top);
        let mut state = layout.blank();
        state[0] = 0.5;
        state[1] = 0.5;
        ObservationLayout::write_entry(
            &mut state,
            layout.target_offset(0),
            DVec2::new(0.52, 0.5),
            DVec2::Y,
        );
        assert_eq!(agent.act(&state), Some(Action::Magnet.index()));

        // Turning target (zero heading) is left alone.
        ObservationLayout::write_entry(
            &mut state,
            layout.target_offset(0),
            DVec2::new(0.52, 0.5),
            DVec2::ZERO,
        );
        assert_eq!(agent.act(&state), Some(Action::Noop.index()));
    }

    #[test]
    fn test_chase_respects_bottom_goal() {
        let (layout, mut agent) = chase_fixture(ArenaEdge::Bottom);

        // Already bound for the goal: leave it alone.
        let state = target_in_range(&layout, DVec2::Y);
        assert_eq!(agent.act(&state), Some(Action::Noop.index()));

        let state = target_in_range(&layout, DVec2::NEG_Y);
        assert_eq!(agent.act(&state), Some(Action::Magnet.index()));
    }

    #[test]
    fn test_chase_magnets_sideways_target() {
        for goal in [ArenaEdge::Top, ArenaEdge::Bottom] {
            let (layout, mut agent) = chase_fixture(goal);
            let state = target_in_range(&layout, DVec2::X);
            assert_eq!(agent.act(&state), Some(Action::Magnet.index()), "{goal:?}");
        }
    }

    #[test]
    fn test_chase_without_targets_is_none() {
        let (layout, mut agent) = chase_fixture(ArenaEdge::Top);
        let mut state = layout.blank();
        state[0] = 0.5;
        assert_eq!(agent.act(&state), None);
    }
}
