pub mod engine;
pub mod oracle;
pub mod render;

pub use engine::{RunStatus, SimulationEngine, SimulationReport, TickOutcome, TickStats};
pub use oracle::find_direction;
pub use render::render_frame;
