//! # Agent Grid
//!
//! Agents walking across a bounded grid to their own goal cells.
//!
//! Each tick, every agent takes the first step of a shortest
//! obstacle-avoiding path towards its goal. Agents that bump into each other
//! record a blocker and try to step aside. The run ends when every agent is
//! next to its goal, or when a tick passes without anyone making direct
//! progress.

pub mod agent;
pub mod cli;
pub mod direction;
pub mod error;
pub mod simulation;
pub mod world;

pub use agent::{Agent, AgentState};
pub use cli::Args;
pub use direction::Direction;
pub use error::{ConfigError, Result};
pub use simulation::{SimulationEngine, TickOutcome};
pub use world::{Grid, Point, World};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Agent, AgentState, Args, ConfigError, Direction, Grid, Point, Result, SimulationEngine,
        TickOutcome, World,
    };
}
