//! Headless IARC runner.
//!
//! This crate wires the simulation engine to a built-in agent and an
//! external scheduler: a flat-out batch runner, or a game loop thread
//! paced against the wall clock.

pub mod cli;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod runner;
pub mod state;

pub use iarc_core as core;
