//! Snapshot system: reads the episode and builds an `EpisodeSnapshot`.
//!
//! Read-only: it never modifies the world.

use hecs::{Entity, World};

use iarc_core::components::*;
use iarc_core::enums::ControlMode;
use iarc_core::events::EpisodeEvent;
use iarc_core::state::*;
use iarc_core::types::DisplayTag;

use crate::episode::EpisodeState;

/// Build a complete snapshot from the current episode.
pub fn build_snapshot(
    episode: &EpisodeState,
    control: ControlMode,
    episode_number: u64,
    events: Vec<EpisodeEvent>,
) -> EpisodeSnapshot {
    let world = &episode.world;

    EpisodeSnapshot {
        time: episode.time,
        phase: episode.phase,
        terminal_cause: episode.terminal_cause,
        control,
        score: ScoreView {
            score: episode.score.score,
            cumulative_reward: episode.score.cumulative_reward,
            last_reward: episode.score.last_reward,
            active_targets: episode.active_target_count() as u32,
            goals: episode.score.goals,
            misses: episode.score.misses,
            magnet_activations: episode.score.magnet_activations,
            episode: episode_number,
        },
        interceptor: entity_view(world, episode.interceptor).unwrap_or_default(),
        targets: build_targets(episode),
        obstacles: episode
            .obstacles
            .iter()
            .filter_map(|&e| entity_view(world, e))
            .collect(),
        events,
    }
}

/// Drawable view of any entity with the shared components.
pub fn entity_view(world: &World, entity: Entity) -> Option<EntityView> {
    let mut query = world
        .query_one::<(&Position, &Heading, &Body, &DisplayTag)>(entity)
        .ok()?;
    let (pos, heading, body, tag) = query.get()?;
    Some(EntityView {
        position: pos.0,
        heading: heading.0,
        radius: body.radius,
        tag: *tag,
    })
}

fn build_targets(episode: &EpisodeState) -> Vec<TargetView> {
    episode
        .active_targets()
        .filter_map(|(slot, entity)| {
            let view = entity_view(&episode.world, entity)?;
            let queued_rotation = episode
                .world
                .get::<&Wander>(entity)
                .map(|w| w.queued_rotation)
                .unwrap_or_default();
            Some(TargetView {
                slot,
                entity: view,
                queued_rotation,
            })
        })
        .collect()
}
