use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the grid simulation
#[derive(Parser, Debug, Clone)]
#[command(name = "agent_grid", about = "Agents walking to their goals on a grid map")]
pub struct Args {
    /// Path to the map file
    pub map: PathBuf,

    /// Milliseconds between frames
    #[arg(default_value_t = 1000)]
    pub interval: u64,

    /// Do not draw frames
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Give up after this many ticks
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}
