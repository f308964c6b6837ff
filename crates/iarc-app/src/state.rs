//! State shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use iarc_core::commands::PlayerCommand;
use iarc_core::state::EpisodeSnapshot;

use crate::error::RunError;
use crate::runner::EpisodeSummary;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the loop thread after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<EpisodeSnapshot>>>;

/// Handle to a running game loop.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    pub(crate) thread: JoinHandle<Vec<EpisodeSummary>>,
}

impl LoopHandle {
    /// Forward a command to the engine. Returns false once the loop is gone.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Ask the loop to stop after its current tick.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
    }

    /// Copy of the most recent snapshot, if any tick has run.
    pub fn latest(&self) -> Option<EpisodeSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }

    /// Wait for the loop to finish and collect its episode summaries.
    pub fn join(self) -> Result<Vec<EpisodeSummary>, RunError> {
        self.thread.join().map_err(|_| RunError::LoopPanicked)
    }
}
