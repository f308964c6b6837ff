//! Game loop thread: the external scheduler for real-time runs.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership (agents need not be `Send`). Each tick's `dt` is the measured
//! wall-clock time since the previous tick. Commands arrive via `mpsc`.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

use iarc_core::commands::PlayerCommand;
use iarc_core::config::SimConfig;
use iarc_sim::SimulationEngine;

use crate::cli::AgentKind;
use crate::error::RunError;
use crate::runner::EpisodeSummary;
use crate::state::{GameLoopCommand, LoopHandle, SharedSnapshot};

/// How the loop runs.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Nominal duration of one tick.
    pub tick: Duration,
    /// Stop after this many finished episodes.
    pub episodes: u32,
}

impl LoopOptions {
    pub fn from_secs(dt: f64, episodes: u32) -> Result<Self, RunError> {
        let tick = Duration::try_from_secs_f64(dt).map_err(|_| RunError::InvalidDt(dt))?;
        if tick.is_zero() {
            return Err(RunError::InvalidDt(dt));
        }
        Ok(Self { tick, episodes })
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    agent: AgentKind,
    options: LoopOptions,
) -> Result<LoopHandle, RunError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("iarc-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config.clone(), agent.build(&config));
            run_game_loop(engine, options, cmd_rx, &shared)
        })
        .map_err(RunError::Spawn)?;

    Ok(LoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until enough episodes finish, a Shutdown command
/// arrives, or the channel disconnects.
fn run_game_loop(
    mut engine: SimulationEngine,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<iarc_core::state::EpisodeSnapshot>>,
) -> Vec<EpisodeSummary> {
    let mut summaries = Vec::new();
    if options.episodes == 0 {
        return summaries;
    }

    let mut last_tick = Instant::now();
    let mut next_tick_time = last_tick;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return summaries,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return summaries,
            }
        }

        // 2. Advance by the real time that actually passed
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;
        let snapshot = engine.tick(dt);

        // 3. Record finished episodes
        let finished = EpisodeSummary::from_snapshot(&snapshot);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if let Some(summary) = finished {
            summary.log();
            summaries.push(summary);
            if summaries.len() >= options.episodes as usize {
                return summaries;
            }
            engine.queue_command(PlayerCommand::Reset);
        }

        // 5. Sleep until next tick
        next_tick_time += options.tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > options.tick * 2 {
            // Too far behind, skip ahead instead of catching up
            debug!(behind = ?(now - next_tick_time), "game loop fell behind");
            next_tick_time = now;
        }
    }
}
