//! The agent interface and the built-in agents.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use iarc_core::enums::ArenaEdge;
use iarc_core::types::Bounds;

use crate::action::{action_count, Action};
use crate::observation::ObservationLayout;

/// A pluggable decision maker.
///
/// The engine calls `act` once per tick with the current state vector and
/// then `learn` with the reward the chosen action earned. Returning `None`
/// from `act` is treated as a no-op.
pub trait Agent {
    fn act(&mut self, state: &[f64]) -> Option<usize>;

    fn learn(&mut self, reward: f64);
}

/// Always does nothing. Handy as a baseline and for manual play.
#[derive(Debug, Default)]
pub struct IdleAgent {
    /// Total reward seen so far.
    pub total_reward: f64,
}

impl Agent for IdleAgent {
    fn act(&mut self, _state: &[f64]) -> Option<usize> {
        Some(Action::Noop.index())
    }

    fn learn(&mut self, reward: f64) {
        self.total_reward += reward;
    }
}

/// Uniformly random actions from a seeded generator.
#[derive(Debug)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
    action_count: usize,
    pub total_reward: f64,
}

impl RandomAgent {
    pub fn new(seed: u64, target_capacity: usize) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            action_count: action_count(target_capacity),
            total_reward: 0.0,
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, _state: &[f64]) -> Option<usize> {
        Some(self.rng.gen_range(0..self.action_count))
    }

    fn learn(&mut self, reward: f64) {
        self.total_reward += reward;
    }
}

/// Greedy heuristic: chase the nearest target and magnet it whenever it is
/// in range and not already heading for the goal edge.
#[derive(Debug)]
pub struct ChaseAgent {
    layout: ObservationLayout,
    bounds: Bounds,
    magnet_range: f64,
    goal_edge: ArenaEdge,
    pub total_reward: f64,
}

impl ChaseAgent {
    pub fn new(
        layout: ObservationLayout,
        bounds: Bounds,
        magnet_range: f64,
        goal_edge: ArenaEdge,
    ) -> Self {
        Self {
            layout,
            bounds,
            magnet_range,
            goal_edge,
            total_reward: 0.0,
        }
    }

    fn to_world(&self, normalized: glam::DVec2) -> glam::DVec2 {
        glam::DVec2::new(normalized.x * self.bounds.width, normalized.y * self.bounds.height)
    }
}

impl Agent for ChaseAgent {
    fn act(&mut self, state: &[f64]) -> Option<usize> {
        let uav = self.to_world(self.layout.interceptor(state)?);

        let nearest = (0..self.layout.target_capacity)
            .filter_map(|slot| {
                let entry = self.layout.target(state, slot)?;
                if entry.is_sentinel() {
                    return None;
                }
                let pos = self.to_world(entry.position);
                Some((slot, pos.distance(uav), entry.heading))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let (slot, distance, heading) = nearest?;
        if distance > self.magnet_range {
            return Some(Action::Pursue(slot).index());
        }
        // Zero heading means the target is already turning.
        let turning = heading == glam::DVec2::ZERO;
        if turning || heading.dot(self.goal_edge.outward()) > 0.0 {
            return Some(Action::Noop.index());
        }
        Some(Action::Magnet.index())
    }

    fn learn(&mut self, reward: f64) {
        self.total_reward += reward;
    }
}
