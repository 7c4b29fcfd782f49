use crate::agent::{agent_symbol, Agent, MAX_AGENTS};
use crate::error::{ConfigError, Result};
use crate::world::grid::{Grid, MAX_GRID_SIZE};
use crate::world::point::Point;
use crate::world::world::{goal_symbol, World, MAX_GOALS};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Everything a map file describes, before validation against the engine rules
#[derive(Clone, Debug)]
pub struct MapLayout {
    pub grid: Grid,
    /// Start cell of agent `i`
    pub starts: Vec<Point>,
    /// Goal cell of agent `i`
    pub goals: Vec<Point>,
}

impl MapLayout {
    /// Freeze the layout into a world plus its agents
    pub fn into_world(self) -> Result<(World, Vec<Agent>)> {
        let world = World::new(self.grid, self.goals)?;
        let agents = world.create_agents(&self.starts)?;
        Ok((world, agents))
    }
}

/// Bytes taken from the reader per `read_until` call
const CHUNK: usize = MAX_GRID_SIZE + 2;

/// Parse a map from a file path
pub fn parse_map(path: impl AsRef<Path>) -> Result<MapLayout> {
    let file = File::open(path)?;
    parse_rows(read_rows(BufReader::new(file))?)
}

/// Parse a map directly from an in-memory string
pub fn parse_map_from_str(src: &str) -> Result<MapLayout> {
    parse_map_from_bytes(src.as_bytes())
}

/// Parse a map from raw bytes; only `#`, `1`..`9` and `A`..`I` mean anything
pub fn parse_map_from_bytes(src: &[u8]) -> Result<MapLayout> {
    parse_rows(read_rows(src)?)
}

/// Split input into rows with `\r` dropped, giving up as soon as a row is
/// wider, or there are more rows, than a grid may have
fn read_rows<R: BufRead>(mut reader: R) -> Result<Vec<Vec<u8>>> {
    let mut rows: Vec<Vec<u8>> = Vec::with_capacity(MAX_GRID_SIZE);
    let mut chunk: Vec<u8> = Vec::with_capacity(CHUNK);

    loop {
        let mut row: Vec<u8> = Vec::with_capacity(MAX_GRID_SIZE);
        let mut terminated = false;
        while !terminated {
            chunk.clear();
            if (&mut reader).take(CHUNK as u64).read_until(b'\n', &mut chunk)? == 0 {
                break;
            }
            terminated = chunk.last() == Some(&b'\n');
            row.extend(chunk.iter().filter(|&&b| b != b'\n' && b != b'\r'));
            if row.len() > MAX_GRID_SIZE {
                return Err(too_large(row.len(), rows.len() + 1));
            }
        }

        // end of input; a trailing newline does not open another row
        if !terminated && row.is_empty() {
            break;
        }
        rows.push(row);
        if rows.len() > MAX_GRID_SIZE {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            return Err(too_large(width, rows.len()));
        }
        if !terminated {
            break;
        }
    }
    Ok(rows)
}

fn too_large(width: usize, height: usize) -> ConfigError {
    ConfigError::GridTooLarge {
        width,
        height,
        max: MAX_GRID_SIZE,
    }
}

/// Rows are already within `MAX_GRID_SIZE` both ways
fn parse_rows(rows: Vec<Vec<u8>>) -> Result<MapLayout> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut grid = Grid::new(width, rows.len());
    let mut starts: [Option<Point>; MAX_AGENTS] = [None; MAX_AGENTS];
    let mut goals: [Option<Point>; MAX_GOALS] = [None; MAX_GOALS];

    for (y, row) in rows.iter().enumerate() {
        for (x, &b) in row.iter().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            match b {
                b'#' => grid.set_obstacle(pos),
                b'1'..=b'9' => place(&mut starts, usize::from(b - b'1'), b as char, pos)?,
                b'A'..=b'I' => place(&mut goals, usize::from(b - b'A'), b as char, pos)?,
                _ => {}
            }
        }
    }

    Ok(MapLayout {
        grid,
        starts: contiguous(&starts, agent_symbol, ConfigError::MissingAgent)?,
        goals: contiguous(&goals, goal_symbol, ConfigError::MissingGoal)?,
    })
}

fn place(slots: &mut [Option<Point>], idx: usize, symbol: char, pos: Point) -> Result<()> {
    match slots[idx] {
        Some(first) => Err(ConfigError::DuplicateSymbol {
            symbol,
            first,
            second: pos,
        }),
        None => {
            slots[idx] = Some(pos);
            Ok(())
        }
    }
}

/// Slots up to the highest symbol seen, refusing gaps
fn contiguous(
    slots: &[Option<Point>],
    symbol: fn(usize) -> char,
    missing: fn(char) -> ConfigError,
) -> Result<Vec<Point>> {
    let count = slots.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
    slots[..count]
        .iter()
        .enumerate()
        .map(|(i, &slot)| slot.ok_or_else(|| missing(symbol(i))))
        .collect()
}
