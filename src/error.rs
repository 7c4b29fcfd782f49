use crate::world::Point;
use thiserror::Error;

/// Load-time errors: a map or agent layout the engine refuses to run
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("grid is {width}x{height}, the maximum is {max}x{max}")]
    GridTooLarge { width: usize, height: usize, max: usize },

    #[error("{count} agents configured, at most {max} are supported")]
    TooManyAgents { count: usize, max: usize },

    #[error("{count} goals configured, at most {max} are supported")]
    TooManyGoals { count: usize, max: usize },

    #[error("symbol '{symbol}' appears twice, at {first} and {second}")]
    DuplicateSymbol { symbol: char, first: Point, second: Point },

    #[error("agent '{0}' is missing")]
    MissingAgent(char),

    #[error("goal '{0}' is missing")]
    MissingGoal(char),

    #[error("'{symbol}' at {pos} lies outside the grid")]
    OutOfBounds { symbol: char, pos: Point },

    #[error("'{symbol}' at {pos} sits on an obstacle")]
    OnObstacle { symbol: char, pos: Point },

    #[error("agents '{first}' and '{second}' both start at {pos}")]
    Overlap { first: char, second: char, pos: Point },
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ConfigError>;
