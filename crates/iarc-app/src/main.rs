use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use iarc_app::cli::Args;
use iarc_app::error::RunError;
use iarc_app::game_loop::{self, LoopOptions};
use iarc_app::logging;
use iarc_app::runner::{self, RunReport};
use iarc_sim::SimulationEngine;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = logging::init_logging(&args.log_level) {
        eprintln!("{err}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let config = args.load_config()?;
    info!(
        seed = config.seed,
        agent = ?args.agent,
        episodes = args.episodes,
        dt = args.dt,
        realtime = args.realtime,
        "starting run"
    );

    let report = if args.realtime {
        let options = LoopOptions::from_secs(args.dt, args.episodes)?;
        let handle = game_loop::spawn_game_loop(config, args.agent, options)?;
        let latest = std::sync::Arc::clone(&handle.latest_snapshot);
        let summaries = handle.join()?;
        let final_snapshot = latest
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
            .unwrap_or_default();
        RunReport {
            summaries,
            final_snapshot,
        }
    } else {
        let agent = args.agent.build(&config);
        let mut engine = SimulationEngine::new(config, agent);
        runner::run_episodes(&mut engine, args.episodes, args.dt)?
    };

    for summary in &report.summaries {
        println!("{}", serde_json::to_string(summary)?);
    }
    info!(
        episodes = report.summaries.len(),
        mean_score = report.mean_score(),
        mean_reward = report.mean_reward(),
        "run complete"
    );

    if let Some(path) = &args.dump_snapshot {
        report.dump_snapshot(path)?;
        info!(path = %path.display(), "final snapshot written");
    }
    Ok(())
}
