//! Core types and definitions for the IARC herding simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector math, components, commands, state snapshots, events, config and
//! constants. It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod vector;

#[cfg(test)]
mod tests;
