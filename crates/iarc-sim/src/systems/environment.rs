//! RL environment adapter.
//!
//! Once per tick: encode the state vector, ask the controller for an
//! action, apply it, compose the reward, and hand the reward back to the
//! agent. Terminal failures replace the tick reward with the configured
//! terminal penalty.

use glam::DVec2;
use hecs::World;
use tracing::{debug, trace};

use iarc_agent::action::Action;
use iarc_agent::agent::Agent;
use iarc_agent::observation::ObservationLayout;
use iarc_agent::reward::{distance_shaping, RewardBreakdown};
use iarc_core::components::{Heading, Orbit, Position, Wander};
use iarc_core::config::{EntitySpecs, SimConfig};
use iarc_core::constants::MAGNET_RANGE_TOLERANCE;
use iarc_core::enums::{ControlMode, TerminalCause};
use iarc_core::events::EpisodeEvent;

use crate::episode::EpisodeState;
use crate::systems::{boundary, movement};

/// Held input for manual control.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualInput {
    /// Direction to steer in; zero holds position.
    pub steer: DVec2,
    /// One-shot magnet request, cleared when consumed.
    pub magnet: bool,
}

/// Build the state vector. Positions are normalized to the arena; a heading
/// reads `[0, 0]` while its entity is turning off a queued or shadow
/// rotation; empty target slots read `[0, 0, 0, 0]`.
pub fn encode_state(
    episode: &EpisodeState,
    layout: &ObservationLayout,
    config: &SimConfig,
) -> Vec<f64> {
    let mut state = layout.blank();
    let scale = DVec2::new(config.arena.width, config.arena.height);

    let uav = episode.interceptor_position() / scale;
    state[0] = uav.x;
    state[1] = uav.y;

    for (index, &entity) in episode.obstacles.iter().enumerate().take(layout.obstacle_count) {
        if let Some((pos, heading)) = obstacle_entry(&episode.world, entity) {
            let offset = layout.obstacle_offset(index);
            ObservationLayout::write_entry(&mut state, offset, pos / scale, heading);
        }
    }

    for (slot, entity) in episode.active_targets() {
        if slot >= layout.target_capacity {
            continue;
        }
        if let Some((pos, heading)) = target_entry(&episode.world, entity) {
            let offset = layout.target_offset(slot);
            ObservationLayout::write_entry(&mut state, offset, pos / scale, heading);
        }
    }

    state
}

fn obstacle_entry(world: &World, entity: hecs::Entity) -> Option<(DVec2, DVec2)> {
    let pos = world.get::<&Position>(entity).ok()?.0;
    let heading = world.get::<&Heading>(entity).ok()?.0;
    let orbit = world.get::<&Orbit>(entity).ok()?;
    let heading = if orbit.shadow_rotation == 0.0 { heading } else { DVec2::ZERO };
    Some((pos, heading))
}

fn target_entry(world: &World, entity: hecs::Entity) -> Option<(DVec2, DVec2)> {
    let pos = world.get::<&Position>(entity).ok()?.0;
    let heading = world.get::<&Heading>(entity).ok()?.0;
    let wander = world.get::<&Wander>(entity).ok()?;
    let heading = if wander.queued_rotation == 0.0 { heading } else { DVec2::ZERO };
    Some((pos, heading))
}

/// Find the active target nearest the interceptor and, if it is within the
/// magnet range, queue the magnet rotation on it. Returns its slot.
pub fn attempt_magnet(episode: &mut EpisodeState, specs: &EntitySpecs) -> Option<usize> {
    let uav = episode.interceptor_position();

    let (slot, entity, distance) = episode
        .active_targets()
        .filter_map(|(slot, entity)| {
            let pos = episode.position_of(entity)?;
            Some((slot, entity, pos.distance(uav)))
        })
        .min_by(|a, b| a.2.total_cmp(&b.2))?;

    if distance > specs.magnet_range + MAGNET_RANGE_TOLERANCE {
        return None;
    }

    let mut wander = episode.world.get::<&mut Wander>(entity).ok()?;
    movement::queue_rotation(&mut wander, specs.target.magnet_rotation);
    drop(wander);

    episode.score.magnet_activations += 1;
    episode.events.push(EpisodeEvent::MagnetActivated { slot });
    debug!(slot, distance, "magnet activated");
    Some(slot)
}

/// Everything one RL step needs besides the episode itself.
pub struct StepContext<'a> {
    pub config: &'a SimConfig,
    pub specs: &'a EntitySpecs,
    pub layout: &'a ObservationLayout,
    pub control: ControlMode,
    /// Real seconds this tick.
    pub dt: f64,
}

/// Run the adapter step for one tick. `exit_reward` is what the boundary
/// system collected this tick.
pub fn step(
    episode: &mut EpisodeState,
    agent: &mut dyn Agent,
    manual: &mut ManualInput,
    ctx: &StepContext<'_>,
    exit_reward: f64,
) -> RewardBreakdown {
    let mut breakdown = RewardBreakdown {
        exits: exit_reward,
        ..Default::default()
    };

    // 1-3. State, action, effects.
    match ctx.control {
        ControlMode::Policy => {
            let state = encode_state(episode, ctx.layout, ctx.config);
            let action = Action::decode(agent.act(&state), ctx.config.target_count);
            match action {
                Action::Noop => {}
                Action::Magnet => {
                    if attempt_magnet(episode, ctx.specs).is_some() {
                        breakdown.magnet = ctx.config.rewards.magnet;
                    }
                }
                Action::Pursue(slot) => {
                    movement::pursue_target(episode, slot, ctx.dt);
                }
            }
        }
        ControlMode::Manual => {
            if std::mem::take(&mut manual.magnet) && attempt_magnet(episode, ctx.specs).is_some() {
                breakdown.magnet = ctx.config.rewards.magnet;
            }
            let interceptor = episode.interceptor;
            movement::steer_interceptor(&mut episode.world, interceptor, manual.steer, ctx.dt);
        }
    }

    if boundary::interceptor_outside(episode, &ctx.config.bounds()) {
        episode.end(TerminalCause::InterceptorExited);
    }

    // 4. Reward.
    let active: Vec<DVec2> = episode
        .active_targets()
        .filter_map(|(_, entity)| episode.position_of(entity))
        .collect();
    breakdown.shaping = distance_shaping(
        episode.interceptor_position(),
        active,
        ctx.config.target_count,
        &ctx.config.bounds(),
    );

    check_terminal(episode, ctx.config);
    if let Some(cause) = episode.terminal_cause {
        if cause.is_failure() {
            breakdown.terminal_override = Some(ctx.config.rewards.terminal);
        }
    }

    // 5. Deliver.
    let reward = breakdown.total();
    episode.score.last_reward = reward;
    episode.score.cumulative_reward += reward;
    trace!(
        exits = breakdown.exits,
        magnet = breakdown.magnet,
        shaping = breakdown.shaping,
        reward,
        "tick reward"
    );
    if ctx.control == ControlMode::Policy {
        agent.learn(reward);
    }

    breakdown
}

/// End-of-tick terminal checks that do not depend on the action.
fn check_terminal(episode: &mut EpisodeState, config: &SimConfig) {
    if episode.active_target_count() == 0 {
        episode.end(TerminalCause::TargetsExhausted);
    } else if episode.time.elapsed_secs > config.max_episode_secs {
        episode.end(TerminalCause::Timeout);
    }
}

/// Deliver the terminal penalty for a tick that ended before the adapter
/// step ran (interceptor-obstacle contact).
pub fn deliver_terminal(
    episode: &mut EpisodeState,
    agent: &mut dyn Agent,
    ctx: &StepContext<'_>,
) -> RewardBreakdown {
    let breakdown = RewardBreakdown {
        terminal_override: Some(ctx.config.rewards.terminal),
        ..Default::default()
    };
    let reward = breakdown.total();
    episode.score.last_reward = reward;
    episode.score.cumulative_reward += reward;
    if ctx.control == ControlMode::Policy {
        agent.learn(reward);
    }
    breakdown
}
