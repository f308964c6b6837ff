//! Enumeration types used throughout the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The three kinds of agent in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The single externally controlled agent (UAV).
    Interceptor,
    /// A wandering agent (Roomba) to be herded toward the goal edge.
    Target,
    /// An agent orbiting the arena center.
    Obstacle,
}

/// Episode state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodePhase {
    #[default]
    Running,
    /// The engine no longer advances until a reset.
    Terminal,
}

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalCause {
    /// Every target has left the arena.
    TargetsExhausted,
    /// The interceptor left the arena.
    InterceptorExited,
    /// The interceptor touched an obstacle.
    ObstacleCollision,
    /// Simulated time passed the episode cap.
    Timeout,
}

impl TerminalCause {
    /// Failures replace the tick reward with the terminal penalty.
    pub fn is_failure(self) -> bool {
        !matches!(self, TerminalCause::TargetsExhausted)
    }
}

/// A side of the arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArenaEdge {
    /// y < 0
    #[default]
    Top,
    /// y > height
    Bottom,
    /// x < 0
    Left,
    /// x > width
    Right,
}

impl ArenaEdge {
    /// Unit vector from the arena interior toward this edge.
    pub fn outward(self) -> DVec2 {
        match self {
            ArenaEdge::Top => DVec2::NEG_Y,
            ArenaEdge::Bottom => DVec2::Y,
            ArenaEdge::Left => DVec2::NEG_X,
            ArenaEdge::Right => DVec2::X,
        }
    }
}

/// How a target left the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitOutcome {
    /// Crossed the goal edge.
    Goal,
    /// Crossed any other edge.
    Miss,
}

/// Who drives the interceptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// The injected agent chooses a discrete action every tick.
    #[default]
    Policy,
    /// Held steering input and one-shot magnet commands.
    Manual,
}
