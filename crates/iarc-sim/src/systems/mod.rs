//! Systems that operate on the episode each tick.
//!
//! Systems are plain functions over the world (or the whole `EpisodeState`
//! when they touch the slot table or score). They do not own state.

pub mod boundary;
pub mod collision;
pub mod environment;
pub mod movement;
pub mod snapshot;
