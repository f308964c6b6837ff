//! Flat-out episode runner.
//!
//! Ticks the engine at a fixed `dt` as fast as possible, records one
//! summary per finished episode and resets between episodes.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use iarc_core::commands::PlayerCommand;
use iarc_core::enums::{EpisodePhase, TerminalCause};
use iarc_core::state::EpisodeSnapshot;
use iarc_sim::SimulationEngine;

use crate::error::RunError;

/// Outcome of one finished episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: u64,
    pub cause: Option<TerminalCause>,
    pub score: f64,
    pub cumulative_reward: f64,
    pub goals: u32,
    pub misses: u32,
    pub magnet_activations: u32,
    pub elapsed_secs: f64,
    pub ticks: u64,
}

impl EpisodeSummary {
    /// Summarize a snapshot. `None` while the episode is still running.
    pub fn from_snapshot(snapshot: &EpisodeSnapshot) -> Option<Self> {
        if snapshot.phase != EpisodePhase::Terminal {
            return None;
        }
        Some(Self {
            episode: snapshot.score.episode,
            cause: snapshot.terminal_cause,
            score: snapshot.score.score,
            cumulative_reward: snapshot.score.cumulative_reward,
            goals: snapshot.score.goals,
            misses: snapshot.score.misses,
            magnet_activations: snapshot.score.magnet_activations,
            elapsed_secs: snapshot.time.elapsed_secs,
            ticks: snapshot.time.tick,
        })
    }

    pub fn log(&self) {
        info!(
            episode = self.episode,
            cause = ?self.cause,
            score = self.score,
            cumulative_reward = self.cumulative_reward,
            goals = self.goals,
            misses = self.misses,
            magnets = self.magnet_activations,
            elapsed_secs = self.elapsed_secs,
            "episode finished"
        );
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summaries: Vec<EpisodeSummary>,
    pub final_snapshot: EpisodeSnapshot,
}

impl RunReport {
    pub fn mean_score(&self) -> f64 {
        mean(self.summaries.iter().map(|s| s.score))
    }

    pub fn mean_reward(&self) -> f64 {
        mean(self.summaries.iter().map(|s| s.cumulative_reward))
    }

    /// Write the final snapshot as pretty JSON.
    pub fn dump_snapshot(&self, path: &Path) -> Result<(), RunError> {
        let json = serde_json::to_string_pretty(&self.final_snapshot)?;
        std::fs::write(path, json).map_err(|source| RunError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Run `episodes` episodes back to back with a fixed `dt`.
///
/// Every episode ends: the clock advances by `dt` each tick, so the
/// timeout is always reached eventually.
pub fn run_episodes(
    engine: &mut SimulationEngine,
    episodes: u32,
    dt: f64,
) -> Result<RunReport, RunError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(RunError::InvalidDt(dt));
    }

    let mut summaries = Vec::with_capacity(episodes as usize);
    let mut final_snapshot = engine.snapshot();

    while summaries.len() < episodes as usize {
        let snapshot = engine.tick(dt);
        if let Some(summary) = EpisodeSummary::from_snapshot(&snapshot) {
            summary.log();
            summaries.push(summary);
            if summaries.len() < episodes as usize {
                engine.queue_command(PlayerCommand::Reset);
            }
        }
        final_snapshot = snapshot;
    }

    Ok(RunReport {
        summaries,
        final_snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AgentKind;
    use iarc_core::config::SimConfig;

    fn short_config() -> SimConfig {
        SimConfig {
            max_episode_secs: 5.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_runs_requested_episodes() {
        let config = short_config();
        let agent = AgentKind::Idle.build(&config);
        let mut engine = SimulationEngine::new(config, agent);

        let report = run_episodes(&mut engine, 3, 0.1).unwrap();

        assert_eq!(report.summaries.len(), 3);
        let numbers: Vec<u64> = report.summaries.iter().map(|s| s.episode).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        for summary in &report.summaries {
            assert_eq!(summary.cause, Some(TerminalCause::Timeout));
            assert!(summary.elapsed_secs > 5.0);
        }
        assert_eq!(report.final_snapshot.phase, EpisodePhase::Terminal);
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = short_config();
        let run = |config: &SimConfig| {
            let agent = AgentKind::Chase.build(config);
            let mut engine = SimulationEngine::new(config.clone(), agent);
            run_episodes(&mut engine, 2, 1.0 / 30.0).unwrap().summaries
        };
        assert_eq!(run(&config), run(&config));
    }

    #[test]
    fn test_rejects_bad_dt() {
        let config = short_config();
        let mut engine = SimulationEngine::new(config.clone(), AgentKind::Idle.build(&config));
        assert!(matches!(
            run_episodes(&mut engine, 1, f64::NAN),
            Err(RunError::InvalidDt(_))
        ));
        assert!(matches!(run_episodes(&mut engine, 1, 0.0), Err(RunError::InvalidDt(_))));
    }

    #[test]
    fn test_mean_of_nothing_is_zero() {
        let config = short_config();
        let mut engine = SimulationEngine::new(config.clone(), AgentKind::Idle.build(&config));
        let report = run_episodes(&mut engine, 0, 0.1).unwrap();
        assert!(report.summaries.is_empty());
        assert_eq!(report.mean_score(), 0.0);
    }
}
