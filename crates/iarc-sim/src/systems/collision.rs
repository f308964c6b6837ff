//! Collision resolver: pairwise overlap detection and type-specific response.
//!
//! Every live entity goes into one ordered list (targets by slot, then
//! obstacles by index, then the interceptor) and pairs are checked in
//! ascending index order. Responses mutate the world immediately, so later
//! pairs see the nudged positions. Overlap left over after one pass is
//! resolved on later ticks.

use glam::DVec2;
use hecs::{Entity, World};
use tracing::debug;

use iarc_core::components::*;
use iarc_core::constants::{
    COLLISION_NUDGE_DT, FLIP_ANGLE, OBSTACLE_SEPARATION_MARGIN, OBSTACLE_SHADOW_PER_DEFLECTION,
};
use iarc_core::enums::EntityKind;
use iarc_core::events::EpisodeEvent;
use iarc_core::vector;

use crate::episode::EpisodeState;
use crate::systems::movement::flip;

/// Result of a collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Clear,
    /// The interceptor touched an obstacle.
    InterceptorDestroyed,
}

/// Circles overlap iff the center distance is strictly less than the sum of
/// radii. Touching exactly does not count.
pub fn collides(a: DVec2, a_radius: f64, b: DVec2, b_radius: f64) -> bool {
    vector::distance(a, b) < a_radius + b_radius
}

#[derive(Debug, Clone, Copy)]
struct Collider {
    entity: Entity,
    kind: EntityKind,
    /// Slot for targets, index for obstacles.
    index: usize,
}

fn colliders(episode: &EpisodeState) -> Vec<Collider> {
    let targets = episode.active_targets().map(|(slot, entity)| Collider {
        entity,
        kind: EntityKind::Target,
        index: slot,
    });
    let obstacles = episode
        .obstacles
        .iter()
        .enumerate()
        .map(|(index, &entity)| Collider {
            entity,
            kind: EntityKind::Obstacle,
            index,
        });
    let interceptor = std::iter::once(Collider {
        entity: episode.interceptor,
        kind: EntityKind::Interceptor,
        index: 0,
    });
    targets.chain(obstacles).chain(interceptor).collect()
}

fn circle(world: &World, entity: Entity) -> Option<(DVec2, f64)> {
    let pos = world.get::<&Position>(entity).ok()?.0;
    let radius = world.get::<&Body>(entity).ok()?.radius;
    Some((pos, radius))
}

fn overlapping(world: &World, a: Entity, b: Entity) -> bool {
    match (circle(world, a), circle(world, b)) {
        (Some((pa, ra)), Some((pb, rb))) => collides(pa, ra, pb, rb),
        _ => false,
    }
}

/// Run one collision pass. Stops at the first interceptor-obstacle contact.
pub fn run(episode: &mut EpisodeState) -> CollisionOutcome {
    let list = colliders(episode);

    for i in 0..list.len() {
        for j in (i + 1)..list.len() {
            let (a, b) = (list[i], list[j]);
            if !overlapping(&episode.world, a.entity, b.entity) {
                continue;
            }

            match (a.kind, b.kind) {
                (EntityKind::Target, EntityKind::Target) => {
                    separate_target(&mut episode.world, a.entity);
                    separate_target(&mut episode.world, b.entity);
                    episode.events.push(EpisodeEvent::TargetsCollided {
                        a: a.index,
                        b: b.index,
                    });
                }
                (EntityKind::Target, EntityKind::Obstacle) => {
                    deflect_target(&mut episode.world, b.entity, a.entity);
                    episode.events.push(EpisodeEvent::TargetDeflected {
                        slot: a.index,
                        obstacle: b.index,
                    });
                }
                (EntityKind::Obstacle, EntityKind::Target) => {
                    deflect_target(&mut episode.world, a.entity, b.entity);
                    episode.events.push(EpisodeEvent::TargetDeflected {
                        slot: b.index,
                        obstacle: a.index,
                    });
                }
                (EntityKind::Interceptor, EntityKind::Obstacle)
                | (EntityKind::Obstacle, EntityKind::Interceptor) => {
                    debug!("interceptor struck an obstacle");
                    return CollisionOutcome::InterceptorDestroyed;
                }
                _ => {}
            }
        }
    }

    CollisionOutcome::Clear
}

/// Target-target response for one side: queue a flip, back off one fixed
/// nudge step along the reversed heading, then face forward again.
fn separate_target(world: &mut World, entity: Entity) {
    if let Ok((pos, heading, wander, body)) =
        world.query_one_mut::<(&mut Position, &mut Heading, &mut Wander, &Body)>(entity)
    {
        flip(wander);
        heading.0 = vector::rotate(heading.0, FLIP_ANGLE);
        pos.0 += heading.0 * body.speed * COLLISION_NUDGE_DT;
        heading.0 = vector::rotate(heading.0, FLIP_ANGLE);
    }
}

/// Target-obstacle response: push the target straight out of the obstacle
/// plus a margin, queue a flip, and pause the obstacle's orbit.
fn deflect_target(world: &mut World, obstacle: Entity, target: Entity) {
    let (Some((obstacle_pos, obstacle_radius)), Some((target_pos, target_radius))) =
        (circle(world, obstacle), circle(world, target))
    else {
        return;
    };

    let away = vector::norm(obstacle_pos - target_pos);
    let overlap = obstacle_radius + target_radius - obstacle_pos.distance(target_pos);
    let push = overlap + OBSTACLE_SEPARATION_MARGIN;

    if let Ok((pos, wander)) = world.query_one_mut::<(&mut Position, &mut Wander)>(target) {
        pos.0 -= away * push;
        flip(wander);
    }
    if let Ok(mut orbit) = world.get::<&mut Orbit>(obstacle) {
        orbit.shadow_rotation += OBSTACLE_SHADOW_PER_DEFLECTION;
    }
}
