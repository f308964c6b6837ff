//! Command-line arguments and agent selection.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use iarc_agent::agent::{Agent, ChaseAgent, IdleAgent, RandomAgent};
use iarc_agent::observation::ObservationLayout;
use iarc_core::config::{EntitySpecs, SimConfig};

use crate::error::RunError;

/// Default tick length in real seconds (60 Hz).
pub const DEFAULT_TICK_SECS: f64 = 1.0 / 60.0;

/// Built-in agents selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Never acts.
    Idle,
    /// Uniform random actions, seeded from the config.
    Random,
    /// Chase the nearest target and magnet it when it drifts away from the goal.
    #[default]
    Chase,
}

impl AgentKind {
    pub fn build(self, config: &SimConfig) -> Box<dyn Agent> {
        match self {
            AgentKind::Idle => Box::new(IdleAgent::default()),
            AgentKind::Random => Box::new(RandomAgent::new(config.seed, config.target_count)),
            AgentKind::Chase => {
                let specs = EntitySpecs::derive(config);
                let layout = ObservationLayout::new(config.target_count, config.obstacle_count);
                Box::new(ChaseAgent::new(
                    layout,
                    config.bounds(),
                    specs.magnet_range,
                    config.goal_edge,
                ))
            }
        }
    }
}

/// Headless runner for the IARC herding simulation
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON config file. Missing fields take their defaults.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the config seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of episodes to run
    #[arg(short, long, default_value_t = 1)]
    pub episodes: u32,

    /// Agent driving the interceptor
    #[arg(short, long, value_enum, default_value_t = AgentKind::Chase)]
    pub agent: AgentKind,

    /// Real seconds per tick
    #[arg(long, default_value_t = DEFAULT_TICK_SECS)]
    pub dt: f64,

    /// Pace ticks against the wall clock on a loop thread
    #[arg(long)]
    pub realtime: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write the final snapshot as pretty JSON
    #[arg(long, value_name = "FILE")]
    pub dump_snapshot: Option<PathBuf>,
}

impl Args {
    /// Load the config file (or defaults) and apply CLI overrides.
    pub fn load_config(&self) -> Result<SimConfig, RunError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_file(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(RunError::InvalidDt(self.dt));
        }
        Ok(config)
    }
}
