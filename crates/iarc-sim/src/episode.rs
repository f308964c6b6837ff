//! Episode state: everything that a reset throws away.
//!
//! Owned by `SimulationEngine`; systems borrow it for the duration of a
//! tick. Targets keep a fixed slot for the whole episode so the state
//! vector and action indices never shift when one leaves play.

use glam::DVec2;
use hecs::{Entity, World};
use tracing::info;

use iarc_core::components::Position;
#[cfg(any(test, feature = "test-support"))]
use iarc_core::components::{Heading, Wander};
use iarc_core::enums::{EpisodePhase, TerminalCause};
use iarc_core::events::EpisodeEvent;
use iarc_core::types::{DisplayTag, SimTime};

/// Running score and reward bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub score: f64,
    pub cumulative_reward: f64,
    pub last_reward: f64,
    pub goals: u32,
    pub misses: u32,
    pub magnet_activations: u32,
}

/// One episode's world and bookkeeping.
pub struct EpisodeState {
    pub world: World,
    pub interceptor: Entity,
    /// Target entity per slot; `None` once the target has left play.
    pub target_slots: Vec<Option<Entity>>,
    pub obstacles: Vec<Entity>,
    pub time: SimTime,
    pub phase: EpisodePhase,
    pub terminal_cause: Option<TerminalCause>,
    pub score: ScoreState,
    /// Events recorded since the last snapshot.
    pub events: Vec<EpisodeEvent>,
}

impl EpisodeState {
    pub fn is_running(&self) -> bool {
        self.phase == EpisodePhase::Running
    }

    /// Active targets in slot order.
    pub fn active_targets(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.target_slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entity)| entity.map(|e| (slot, e)))
    }

    pub fn active_target_count(&self) -> usize {
        self.target_slots.iter().flatten().count()
    }

    /// Entity in `slot`, if that target is still in play.
    pub fn target(&self, slot: usize) -> Option<Entity> {
        self.target_slots.get(slot).copied().flatten()
    }

    pub fn position_of(&self, entity: Entity) -> Option<DVec2> {
        self.world.get::<&Position>(entity).ok().map(|p| p.0)
    }

    pub fn interceptor_position(&self) -> DVec2 {
        self.position_of(self.interceptor).unwrap_or_default()
    }

    /// Remove a target from play. Its slot stays, empty.
    pub fn deactivate_target(&mut self, slot: usize) {
        if let Some(entity) = self.target_slots.get_mut(slot).and_then(Option::take) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Move to `Terminal`. Only the first cause of an episode sticks.
    pub fn end(&mut self, cause: TerminalCause) {
        if !self.is_running() {
            return;
        }
        self.phase = EpisodePhase::Terminal;
        self.terminal_cause = Some(cause);
        self.events.push(EpisodeEvent::EpisodeEnded {
            cause,
            score: self.score.score,
        });
        info!(
            ?cause,
            score = self.score.score,
            cumulative_reward = self.score.cumulative_reward,
            elapsed_secs = self.time.elapsed_secs,
            goals = self.score.goals,
            misses = self.score.misses,
            "episode ended"
        );
    }

    pub fn set_display_tag(&mut self, entity: Entity, tag: DisplayTag) -> bool {
        match self.world.get::<&mut DisplayTag>(entity) {
            Ok(mut current) => {
                *current = tag;
                true
            }
            Err(_) => false,
        }
    }
}

/// Scenario hooks for tests. Not part of the simulation API.
#[cfg(any(test, feature = "test-support"))]
impl EpisodeState {
    /// Teleport a target. Returns false if the slot is empty.
    pub fn place_target(&mut self, slot: usize, position: DVec2, heading: DVec2) -> bool {
        let Some(entity) = self.target(slot) else {
            return false;
        };
        match self
            .world
            .query_one_mut::<(&mut Position, &mut Heading, &mut Wander)>(entity)
        {
            Ok((pos, head, wander)) => {
                pos.0 = position;
                head.0 = iarc_core::vector::norm(heading);
                *wander = Wander::default();
                true
            }
            Err(_) => false,
        }
    }

    pub fn place_interceptor(&mut self, position: DVec2) {
        if let Ok(mut pos) = self.world.get::<&mut Position>(self.interceptor) {
            pos.0 = position;
        }
    }
}
