//! Simulation engine for the IARC herding arena.
//!
//! Owns the episode state (hecs world, target slots, score), runs the
//! kinematic, collision and boundary systems on every `tick(dt)`, drives the
//! agent through the RL adapter, and produces `EpisodeSnapshot`s for the
//! presentation layer.

pub mod engine;
pub mod episode;
pub mod systems;
pub mod world_setup;

pub use iarc_agent as agent;
pub use iarc_core as core;
pub use engine::SimulationEngine;
pub use episode::EpisodeState;
