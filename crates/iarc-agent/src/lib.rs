//! Decision-making boundary for the IARC simulation.
//!
//! Defines the `Agent` trait the engine queries every tick, the discrete
//! action space, the state vector layout, reward shaping, and a few
//! built-in agents. No ECS dependency; operates on plain data.

pub mod action;
pub mod agent;
pub mod observation;
pub mod reward;

pub use iarc_core as core;

pub use action::Action;
pub use agent::{Agent, ChaseAgent, IdleAgent, RandomAgent};
pub use observation::ObservationLayout;

#[cfg(test)]
mod tests;
