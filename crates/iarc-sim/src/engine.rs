//! Simulation engine for the herding arena.
//!
//! `SimulationEngine` owns the episode (hecs world, slots, score), the agent
//! and the shared RNG. It processes queued commands, runs all systems once
//! per `tick(dt)`, and produces `EpisodeSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use iarc_agent::agent::Agent;
use iarc_agent::observation::ObservationLayout;
use iarc_core::commands::PlayerCommand;
use iarc_core::config::{EntitySpecs, SimConfig};
use iarc_core::enums::{ControlMode, EpisodePhase, TerminalCause};
use iarc_core::events::EpisodeEvent;
use iarc_core::state::EpisodeSnapshot;
use iarc_core::types::DisplayTag;

use crate::episode::EpisodeState;
use crate::systems;
use crate::systems::collision::CollisionOutcome;
use crate::systems::environment::{ManualInput, StepContext};
use crate::world_setup;

/// The simulation engine. Owns the episode, the agent and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    specs: EntitySpecs,
    layout: ObservationLayout,
    episode: EpisodeState,
    agent: Box<dyn Agent>,
    rng: ChaCha8Rng,
    control: ControlMode,
    manual: ManualInput,
    command_queue: VecDeque<PlayerCommand>,
    /// 1-based number of the current episode.
    episode_count: u64,
}

impl SimulationEngine {
    /// Create an engine and initialize the first episode.
    ///
    /// The RNG is seeded once here and keeps running across resets, so a
    /// given seed and `dt` sequence always replays the same run.
    pub fn new(config: SimConfig, agent: Box<dyn Agent>) -> Self {
        let specs = EntitySpecs::derive(&config);
        let layout = ObservationLayout::new(config.target_count, config.obstacle_count);
        let episode = world_setup::setup_episode(&config, &specs);
        debug!(
            targets = config.target_count,
            obstacles = config.obstacle_count,
            state_size = layout.len(),
            magnet_range = specs.magnet_range,
            "engine configured"
        );

        let mut engine = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            control: config.control,
            config,
            specs,
            layout,
            episode,
            agent,
            manual: ManualInput::default(),
            command_queue: VecDeque::new(),
            episode_count: 1,
        };
        engine
            .episode
            .events
            .push(EpisodeEvent::EpisodeReset { episode: 1 });
        info!(episode = 1, "episode started");
        engine
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance by `real_dt` wall-clock seconds and return the resulting
    /// snapshot. A terminal episode does not advance.
    pub fn tick(&mut self, real_dt: f64) -> EpisodeSnapshot {
        self.process_commands();

        if !self.episode.is_running() && self.config.auto_reset {
            self.reset();
        }

        if self.episode.is_running() {
            let dt = if real_dt.is_finite() && real_dt >= 0.0 {
                real_dt
            } else {
                warn!(real_dt, "ignoring invalid tick duration");
                0.0
            };
            self.run_systems(dt);
        }

        self.take_snapshot()
    }

    /// Discard the current episode and start a fresh one.
    pub fn reset(&mut self) {
        self.episode = world_setup::setup_episode(&self.config, &self.specs);
        self.manual = ManualInput::default();
        self.episode_count += 1;
        self.episode.events.push(EpisodeEvent::EpisodeReset {
            episode: self.episode_count,
        });
        info!(episode = self.episode_count, "episode reset");
    }

    /// Snapshot of the current state without advancing. Pending events are
    /// left for the next tick.
    pub fn snapshot(&self) -> EpisodeSnapshot {
        systems::snapshot::build_snapshot(
            &self.episode,
            self.control,
            self.episode_count,
            self.episode.events.clone(),
        )
    }

    pub fn phase(&self) -> EpisodePhase {
        self.episode.phase
    }

    pub fn terminal_cause(&self) -> Option<TerminalCause> {
        self.episode.terminal_cause
    }

    pub fn control(&self) -> ControlMode {
        self.control
    }

    pub fn episode_count(&self) -> u64 {
        self.episode_count
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn specs(&self) -> &EntitySpecs {
        &self.specs
    }

    /// Read-only access to the episode.
    pub fn episode(&self) -> &EpisodeState {
        &self.episode
    }

    /// Mutable access to the episode, for arranging scenarios.
    #[cfg(any(test, feature = "test-support"))]
    pub fn episode_mut(&mut self) -> &mut EpisodeState {
        &mut self.episode
    }

    /// The state vector the agent would see right now.
    pub fn state_vector(&self) -> Vec<f64> {
        systems::environment::encode_state(&self.episode, &self.layout, &self.config)
    }

    /// Attach an opaque display tag to an entity. The engine never reads it.
    pub fn set_display_tag(&mut self, entity: hecs::Entity, tag: DisplayTag) -> bool {
        self.episode.set_display_tag(entity, tag)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Reset => self.reset(),
            PlayerCommand::Steer { x, y } => {
                self.manual.steer = if x.is_finite() && y.is_finite() {
                    DVec2::new(x, y)
                } else {
                    DVec2::ZERO
                };
            }
            PlayerCommand::ActivateMagnet => {
                self.manual.magnet = true;
            }
            PlayerCommand::SetControlMode { mode } => {
                if mode != self.control {
                    debug!(?mode, "control mode changed");
                    self.control = mode;
                    self.manual = ManualInput::default();
                }
            }
        }
    }

    fn run_systems(&mut self, dt: f64) {
        let sim_dt = dt * self.config.speed_multiplier;
        self.episode.time.advance(sim_dt);
        self.episode.score.score +=
            sim_dt / 60.0 * self.config.scoring.living_penalty_per_minute;

        let center = self.config.bounds().center();
        let world = &mut self.episode.world;
        systems::movement::run_targets(world, &self.specs.target, &mut self.rng, dt);
        systems::movement::run_obstacles(world, &self.specs.obstacle, center, dt);

        let ctx = StepContext {
            config: &self.config,
            specs: &self.specs,
            layout: &self.layout,
            control: self.control,
            dt,
        };

        if systems::collision::run(&mut self.episode) == CollisionOutcome::InterceptorDestroyed {
            self.episode.score.score = 0.0;
            self.episode.end(TerminalCause::ObstacleCollision);
            systems::environment::deliver_terminal(&mut self.episode, self.agent.as_mut(), &ctx);
            return;
        }

        let exit_reward = systems::boundary::run(&mut self.episode, &self.config);

        systems::environment::step(
            &mut self.episode,
            self.agent.as_mut(),
            &mut self.manual,
            &ctx,
            exit_reward,
        );
    }

    fn take_snapshot(&mut self) -> EpisodeSnapshot {
        let events = std::mem::take(&mut self.episode.events);
        systems::snapshot::build_snapshot(&self.episode, self.control, self.episode_count, events)
    }
}
