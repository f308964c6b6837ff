//! Per-tick reward composition.

use glam::DVec2;

use iarc_core::types::Bounds;

/// Distance shaping term: minus the summed interceptor-to-target distance
/// over active targets, normalized by `capacity * arena diagonal`.
///
/// Always in `[-1, 0]` while every entity is inside the arena.
pub fn distance_shaping(
    interceptor: DVec2,
    active_targets: impl IntoIterator<Item = DVec2>,
    target_capacity: usize,
    bounds: &Bounds,
) -> f64 {
    let max_sum = target_capacity as f64 * bounds.diagonal();
    if max_sum <= 0.0 {
        return 0.0;
    }
    let total: f64 = active_targets
        .into_iter()
        .map(|p| p.distance(interceptor))
        .sum();
    -total / max_sum
}

/// The pieces of one tick's reward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RewardBreakdown {
    /// Sum of goal/miss rewards for targets that left this tick.
    pub exits: f64,
    /// Magnet reward if an activation succeeded.
    pub magnet: f64,
    pub shaping: f64,
    /// Replaces everything else when the tick ended the episode in failure.
    pub terminal_override: Option<f64>,
}

impl RewardBreakdown {
    /// The reward actually delivered to the agent.
    pub fn total(&self) -> f64 {
        match self.terminal_override {
            Some(terminal) => terminal,
            None => self.exits + self.magnet + self.shaping,
        }
    }
}
