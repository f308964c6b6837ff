//! Boundary system: classifies targets leaving the arena and removes them.

use glam::DVec2;
use tracing::debug;

use iarc_core::config::SimConfig;
use iarc_core::enums::{ArenaEdge, ExitOutcome};
use iarc_core::events::EpisodeEvent;
use iarc_core::types::Bounds;

use crate::episode::EpisodeState;

/// Edges a point lies beyond, in Top, Bottom, Left, Right order.
fn crossed_edges(pos: DVec2, bounds: &Bounds) -> impl Iterator<Item = ArenaEdge> {
    [
        (pos.y < 0.0, ArenaEdge::Top),
        (pos.y > bounds.height, ArenaEdge::Bottom),
        (pos.x < 0.0, ArenaEdge::Left),
        (pos.x > bounds.width, ArenaEdge::Right),
    ]
    .into_iter()
    .filter_map(|(crossed, edge)| crossed.then_some(edge))
}

/// Classify a position against the arena. `None` while inside (edges
/// inclusive). A point past a corner counts as a goal if one of the
/// crossed edges is the goal edge.
pub fn classify_exit(
    pos: DVec2,
    bounds: &Bounds,
    goal_edge: ArenaEdge,
) -> Option<(ArenaEdge, ExitOutcome)> {
    let mut first = None;
    for edge in crossed_edges(pos, bounds) {
        if edge == goal_edge {
            return Some((edge, ExitOutcome::Goal));
        }
        first.get_or_insert(edge);
    }
    first.map(|edge| (edge, ExitOutcome::Miss))
}

/// Remove every target that has left the arena, tally score, and return
/// the summed exit reward for this tick.
///
/// Slots are cleared in place while walking the slot table, so removing a
/// target never causes the next one to be skipped.
pub fn run(episode: &mut EpisodeState, config: &SimConfig) -> f64 {
    let bounds = config.bounds();
    let mut reward = 0.0;

    for slot in 0..episode.target_slots.len() {
        let Some(entity) = episode.target(slot) else {
            continue;
        };
        let Some(pos) = episode.position_of(entity) else {
            continue;
        };
        let Some((edge, outcome)) = classify_exit(pos, &bounds, config.goal_edge) else {
            continue;
        };

        match outcome {
            ExitOutcome::Goal => {
                episode.score.score += config.scoring.goal;
                episode.score.goals += 1;
                reward += config.rewards.goal;
            }
            ExitOutcome::Miss => {
                episode.score.score += config.scoring.miss;
                episode.score.misses += 1;
                reward += config.rewards.miss;
            }
        }
        debug!(slot, ?edge, ?outcome, "target left the arena");

        episode.deactivate_target(slot);
        episode
            .events
            .push(EpisodeEvent::TargetExited { slot, edge, outcome });
    }

    reward
}

/// True once the interceptor is outside the arena.
pub fn interceptor_outside(episode: &EpisodeState, bounds: &Bounds) -> bool {
    let pos = episode.interceptor_position();
    !bounds.contains(pos.x, pos.y)
}
