//! Episode snapshot: the complete visible state handed to the presentation
//! layer after each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::EpisodeEvent;
use crate::types::{DisplayTag, SimTime};

/// Complete episode state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeSnapshot {
    pub time: SimTime,
    pub phase: EpisodePhase,
    pub terminal_cause: Option<TerminalCause>,
    pub control: ControlMode,
    pub score: ScoreView,
    pub interceptor: EntityView,
    /// Active targets only, ordered by slot.
    pub targets: Vec<TargetView>,
    pub obstacles: Vec<EntityView>,
    pub events: Vec<EpisodeEvent>,
}

/// Drawable state shared by every entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub position: DVec2,
    pub heading: DVec2,
    pub radius: f64,
    pub tag: DisplayTag,
}

/// An active target with its fixed slot index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub slot: usize,
    pub entity: EntityView,
    /// Angle still to turn before the target moves again.
    pub queued_rotation: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: f64,
    pub cumulative_reward: f64,
    /// Reward delivered for the most recent tick.
    pub last_reward: f64,
    pub active_targets: u32,
    pub goals: u32,
    pub misses: u32,
    pub magnet_activations: u32,
    /// 1-based count of episodes started by this engine.
    pub episode: u64,
}
