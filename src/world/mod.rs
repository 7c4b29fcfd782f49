pub mod grid;
pub mod parser;
pub mod point;
pub mod world;

pub use grid::{Grid, MAX_GRID_SIZE};
pub use parser::{parse_map, parse_map_from_bytes, parse_map_from_str, MapLayout};
pub use point::Point;
pub use world::{goal_symbol, World, MAX_GOALS};
