//! Events emitted by the simulation for UI feedback and logging.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EpisodeEvent {
    /// A target crossed an arena edge and was removed from play.
    TargetExited {
        slot: usize,
        edge: ArenaEdge,
        outcome: ExitOutcome,
    },
    /// Two targets touched and flipped away from each other.
    TargetsCollided { a: usize, b: usize },
    /// An obstacle pushed a target away.
    TargetDeflected { slot: usize, obstacle: usize },
    /// The interceptor turned a target with its magnet.
    MagnetActivated { slot: usize },
    /// The episode reached a terminal condition.
    EpisodeEnded { cause: TerminalCause, score: f64 },
    /// A fresh episode was initialized.
    EpisodeReset { episode: u64 },
}
