use crate::agent::{Agent, AgentState};
use crate::simulation::engine::SimulationEngine;
use crate::world::world::goal_symbol;
use crate::world::Point;
use colored::Colorize;
use std::io::{self, Write};

/// ANSI clear screen + cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// One line per grid row. Agents are drawn over goals, goals over walls.
pub fn render_frame(engine: &SimulationEngine, colorize: bool) -> String {
    let world = engine.world();
    let grid = world.grid();
    let mut frame = String::with_capacity((grid.width() + 1) * grid.height());

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Point::new(x, y);
            if let Some(agent) = engine.agents().iter().find(|a| a.pos() == pos) {
                push_agent(&mut frame, agent, colorize);
            } else if let Some(id) = world.goals().iter().position(|&g| g == pos) {
                push_cell(&mut frame, goal_symbol(id), colorize, |s| s.yellow());
            } else if grid.is_obstacle(pos) {
                push_cell(&mut frame, '#', colorize, |s| s.dimmed());
            } else {
                frame.push(' ');
            }
        }
        frame.push('\n');
    }
    frame
}

/// Clear the terminal and draw the current frame
pub fn draw<W: Write>(out: &mut W, engine: &SimulationEngine, colorize: bool) -> io::Result<()> {
    write!(out, "{}{}", CLEAR_SCREEN, render_frame(engine, colorize))?;
    out.flush()
}

#[inline]
fn push_agent(frame: &mut String, agent: &Agent, colorize: bool) {
    match agent.state() {
        AgentState::Finished => push_cell(frame, agent.symbol(), colorize, |s| s.green().bold()),
        AgentState::Blocked(_) => push_cell(frame, agent.symbol(), colorize, |s| s.red().bold()),
        AgentState::Seeking => push_cell(frame, agent.symbol(), colorize, |s| s.cyan().bold()),
    }
}

#[inline]
fn push_cell(
    frame: &mut String,
    symbol: char,
    colorize: bool,
    paint: impl Fn(&str) -> colored::ColoredString,
) {
    if colorize {
        let mut buf = [0u8; 4];
        frame.push_str(&paint(symbol.encode_utf8(&mut buf)).to_string());
    } else {
        frame.push(symbol);
    }
}
