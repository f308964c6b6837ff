//! Entity spawn factories for setting up an episode.
//!
//! Interceptor at the arena center, targets evenly spaced on the inner ring
//! heading radially outward, obstacles evenly spaced on the outer ring
//! heading tangentially.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::{Entity, World};

use iarc_core::components::*;
use iarc_core::config::{EntitySpecs, SimConfig};
use iarc_core::enums::EpisodePhase;
use iarc_core::types::{DisplayTag, SimTime};
use iarc_core::vector;

use crate::episode::{EpisodeState, ScoreState};

/// Build a fresh episode in the `Running` phase.
pub fn setup_episode(config: &SimConfig, specs: &EntitySpecs) -> EpisodeState {
    let mut world = World::new();
    let center = config.bounds().center();

    let interceptor = spawn_interceptor(&mut world, specs, center);

    let target_slots = (0..config.target_count)
        .map(|slot| {
            let theta = slot as f64 * TAU / config.target_count as f64;
            let offset = vector::from_angle(theta) * specs.target.ring_radius;
            Some(spawn_target(
                &mut world,
                specs,
                slot,
                center + offset,
                vector::norm(offset),
            ))
        })
        .collect();

    let obstacles = (0..config.obstacle_count)
        .map(|index| {
            let theta = index as f64 * TAU / config.obstacle_count as f64;
            spawn_obstacle(&mut world, specs, index, center, theta)
        })
        .collect();

    EpisodeState {
        world,
        interceptor,
        target_slots,
        obstacles,
        time: SimTime::default(),
        phase: EpisodePhase::Running,
        terminal_cause: None,
        score: ScoreState {
            score: config.scoring.initial,
            ..Default::default()
        },
        events: Vec::new(),
    }
}

/// Spawn the interceptor, initially stationary.
pub fn spawn_interceptor(world: &mut World, specs: &EntitySpecs, position: DVec2) -> Entity {
    world.spawn((
        Interceptor,
        Position(position),
        Heading(DVec2::ZERO),
        Body {
            radius: specs.interceptor.radius,
            speed: specs.interceptor.speed,
        },
        DisplayTag::default(),
    ))
}

pub fn spawn_target(
    world: &mut World,
    specs: &EntitySpecs,
    slot: usize,
    position: DVec2,
    heading: DVec2,
) -> Entity {
    world.spawn((
        Target,
        Slot(slot),
        Position(position),
        Heading(heading),
        Body {
            radius: specs.target.radius,
            speed: specs.target.speed,
        },
        Wander::default(),
        DisplayTag::default(),
    ))
}

/// Spawn an obstacle at orbital angle `angle` around `center`.
pub fn spawn_obstacle(
    world: &mut World,
    specs: &EntitySpecs,
    index: usize,
    center: DVec2,
    angle: f64,
) -> Entity {
    let orbit = Orbit {
        angle,
        radius: specs.obstacle.orbit_radius,
        shadow_rotation: 0.0,
    };
    let (position, heading) = orbital_pose(center, &orbit);
    world.spawn((
        Obstacle,
        Slot(index),
        Position(position),
        Heading(heading),
        Body {
            radius: specs.obstacle.radius,
            speed: specs.obstacle.speed,
        },
        orbit,
        DisplayTag::default(),
    ))
}

/// Closed-form position and tangential heading for an orbital angle.
pub fn orbital_pose(center: DVec2, orbit: &Orbit) -> (DVec2, DVec2) {
    let (sin, cos) = orbit.angle.sin_cos();
    let position = center + DVec2::new(cos, sin) * orbit.radius;
    let heading = DVec2::new(-sin, cos);
    (position, heading)
}
