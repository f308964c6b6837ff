//! Kinematic update rules for all three entity kinds.
//!
//! Targets wander on their own, obstacles follow a closed-form orbit, and
//! the interceptor only moves when commanded. All rates are per real second.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use iarc_core::components::*;
use iarc_core::config::{ObstacleSpec, TargetSpec};
use iarc_core::constants::FLIP_ANGLE;
use iarc_core::vector;

/// Add to a target's pending rotation. Overlapping requests merge modulo 2π.
pub fn queue_rotation(wander: &mut Wander, theta: f64) {
    wander.queued_rotation = (wander.queued_rotation + theta) % TAU;
}

/// Queue a half turn.
pub fn flip(wander: &mut Wander) {
    queue_rotation(wander, FLIP_ANGLE);
}

/// Advance one target by `dt`: turn off queued rotation or translate, then
/// run the wiggle and flip timers.
pub fn step_target(
    position: &mut Position,
    heading: &mut Heading,
    wander: &mut Wander,
    body: &Body,
    spec: &TargetSpec,
    rng: &mut ChaCha8Rng,
    dt: f64,
) {
    if wander.queued_rotation == 0.0 {
        position.0 += heading.0 * body.speed * dt;
    } else {
        let dtheta = (spec.angular_speed * dt).min(wander.queued_rotation);
        heading.0 = vector::rotate(heading.0, dtheta);
        wander.queued_rotation = (wander.queued_rotation - dtheta).max(0.0);
    }

    wander.time_since_wiggle += dt;
    if wander.time_since_wiggle > spec.wiggle_interval {
        wander.time_since_wiggle = 0.0;
        let half = spec.wiggle_magnitude / 2.0;
        let delta = rng.gen_range(-half..=half);
        heading.0 = vector::rotate(heading.0, delta);
    }

    wander.time_since_flip += dt;
    if wander.time_since_flip > spec.flip_interval {
        wander.time_since_flip = 0.0;
        flip(wander);
    }
}

/// Run the wander update for every target still in play.
///
/// Targets are visited in slot order so the shared RNG is consumed
/// deterministically.
pub fn run_targets(world: &mut World, spec: &TargetSpec, rng: &mut ChaCha8Rng, dt: f64) {
    let mut targets: Vec<_> = world
        .query_mut::<(&Target, &mut Position, &mut Heading, &mut Wander, &Body, &Slot)>()
        .into_iter()
        .map(|(_, (_, pos, heading, wander, body, slot))| (slot.0, pos, heading, wander, body))
        .collect();
    targets.sort_by_key(|t| t.0);

    for (_, pos, heading, wander, body) in targets {
        step_target(pos, heading, wander, body, spec, rng, dt);
    }
}

/// Advance one obstacle by `dt`. A pending shadow rotation holds it in
/// place while it drains; otherwise the orbital angle advances and the pose
/// is recomputed from it.
pub fn step_obstacle(
    position: &mut Position,
    heading: &mut Heading,
    orbit: &mut Orbit,
    spec: &ObstacleSpec,
    center: DVec2,
    dt: f64,
) {
    if orbit.shadow_rotation > 0.0 {
        orbit.shadow_rotation = (orbit.shadow_rotation - spec.angular_speed * dt).max(0.0);
        return;
    }
    orbit.angle = (orbit.angle + spec.orbit_rate() * dt).rem_euclid(TAU);
    let (new_pos, new_heading) = crate::world_setup::orbital_pose(center, orbit);
    position.0 = new_pos;
    heading.0 = new_heading;
}

pub fn run_obstacles(world: &mut World, spec: &ObstacleSpec, center: DVec2, dt: f64) {
    for (_entity, (_obstacle, pos, heading, orbit)) in
        world.query_mut::<(&Obstacle, &mut Position, &mut Heading, &mut Orbit)>()
    {
        step_obstacle(pos, heading, orbit, spec, center, dt);
    }
}

/// Move the interceptor along a requested heading. A zero request is a
/// no-op that leaves both position and heading untouched.
pub fn steer_interceptor(
    world: &mut World,
    interceptor: hecs::Entity,
    input: DVec2,
    dt: f64,
) -> bool {
    let direction = vector::norm(input);
    if direction == DVec2::ZERO {
        return false;
    }
    match world.query_one_mut::<(&mut Position, &mut Heading, &Body)>(interceptor) {
        Ok((pos, heading, body)) => {
            heading.0 = direction;
            pos.0 += direction * body.speed * dt;
            true
        }
        Err(_) => false,
    }
}

/// Move the interceptor toward the target in `slot`. No-op if the slot is
/// empty or the target sits exactly on the interceptor.
pub fn pursue_target(episode: &mut crate::episode::EpisodeState, slot: usize, dt: f64) -> bool {
    let Some(target) = episode.target(slot) else {
        return false;
    };
    let Some(target_pos) = episode.position_of(target) else {
        return false;
    };
    let toward = target_pos - episode.interceptor_position();
    let interceptor = episode.interceptor;
    steer_interceptor(&mut episode.world, interceptor, toward, dt)
}
