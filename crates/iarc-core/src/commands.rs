//! Commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ControlMode;

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Discard the current episode and start a fresh one.
    Reset,
    /// Hold a direct heading input for the interceptor (manual control).
    /// A zero vector stops it.
    Steer { x: f64, y: f64 },
    /// Attempt a magnet activation on the next tick (manual control).
    ActivateMagnet,
    /// Switch between policy and manual control.
    SetControlMode { mode: ControlMode },
}
