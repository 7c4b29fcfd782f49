use agent_grid::prelude::*;
use agent_grid::world::parse_map;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Parse map and place agents
    let layout = parse_map(&args.map).map_err(|err| -> Box<dyn std::error::Error> {
        match err {
            ConfigError::Io(io) => format!("cannot read map file {}: {}", args.map.display(), io).into(),
            other => other.into(),
        }
    })?;
    let mut engine = SimulationEngine::from_layout(layout)?;
    info!(
        width = engine.world().grid().width(),
        height = engine.world().grid().height(),
        agents = engine.agents().len(),
        goals = engine.world().goals().len(),
        "map loaded"
    );

    // Run simulation
    let report = engine.run_simulation(args)?;

    // Print results
    engine.print_summary(&report);

    Ok(())
}
