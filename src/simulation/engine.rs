use crate::agent::{Agent, AgentState};
use crate::cli::Args;
use crate::direction::Direction;
use crate::error::{ConfigError, Result};
use crate::simulation::oracle::find_direction;
use crate::simulation::render;
use crate::world::world::goal_symbol;
use crate::world::{MapLayout, Point, World};
use colored::Colorize;
use std::collections::HashSet;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// What a single tick concluded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    InProgress,
    /// Every agent has reached its goal
    Success,
    /// Not everyone is done and nobody made a direct move this tick
    Deadlock,
}

impl TickOutcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TickOutcome::InProgress)
    }
}

/// Counters for the most recent tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub tick: u64,
    /// Full passes over the agents before the tick settled
    pub passes: u32,
    /// Goal-directed moves; only these keep a tick out of deadlock
    pub direct_moves: u32,
    /// Moves made escaping a blocker
    pub rotation_moves: u32,
    /// Direct moves refused because another agent held the cell
    pub blocked_events: u32,
    /// The passes started repeating and were cut short
    pub cycle_detected: bool,
}

/// How a driven run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Deadlock,
    TickLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    pub status: RunStatus,
    pub ticks: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MoveResult {
    Moved,
    /// Wall or edge of the grid
    Obstructed,
    Occupied(usize),
}

/// Owns the agents and resolves their movement one tick at a time
pub struct SimulationEngine {
    world: World,
    agents: Vec<Agent>,
    tick: u64,
    outcome: Option<TickOutcome>,
    last_stats: TickStats,
}

impl SimulationEngine {
    /// Create a new simulation engine; every agent needs a goal in `world`
    pub fn new(world: World, agents: Vec<Agent>) -> Result<Self> {
        if let Some(agent) = agents.iter().find(|a| world.goal(a.id).is_none()) {
            return Err(ConfigError::MissingGoal(goal_symbol(agent.id)));
        }
        Ok(Self {
            world,
            agents,
            tick: 0,
            outcome: None,
            last_stats: TickStats::default(),
        })
    }

    /// Validate a parsed map and build an engine from it
    pub fn from_layout(layout: MapLayout) -> Result<Self> {
        let (world, agents) = layout.into_world()?;
        Self::new(world, agents)
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Ticks run so far
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Terminal outcome, once one has been reached
    #[inline]
    pub fn outcome(&self) -> Option<TickOutcome> {
        self.outcome
    }

    #[inline]
    pub fn last_tick_stats(&self) -> &TickStats {
        &self.last_stats
    }

    /// Advance the simulation by one tick.
    ///
    /// Passes over all agents repeat until one makes no attempt worth
    /// retrying. In a pass, each agent that has not moved yet this tick either
    /// escapes its blocker by rotation or takes the oracle's step towards its
    /// goal. Each agent makes at most one direct move per tick.
    ///
    /// Once `Success` or `Deadlock` is returned, later calls return it again
    /// and leave the state untouched.
    pub fn run_tick(&mut self) -> TickOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        self.tick += 1;

        let mut stats = TickStats {
            tick: self.tick,
            ..TickStats::default()
        };
        let mut moved = vec![false; self.agents.len()];
        let mut seen: HashSet<(Vec<Agent>, Vec<bool>)> = HashSet::new();

        loop {
            // A pass is a pure function of this state; meeting it twice means
            // the loop would never settle.
            if !seen.insert((self.agents.clone(), moved.clone())) {
                stats.cycle_detected = true;
                warn!(tick = self.tick, passes = stats.passes, "agents are cycling, ending tick");
                break;
            }
            stats.passes += 1;

            let mut retry = false;
            for i in 0..self.agents.len() {
                let goal = self.goal_of(i);
                if self.agents[i].pos().is_adjacent(goal) {
                    self.agents[i].mark_finished();
                }
                if moved[i] {
                    continue;
                }

                match self.agents[i].state() {
                    AgentState::Finished => {}
                    AgentState::Blocked(dir) => {
                        if self.escape(i, dir) {
                            stats.rotation_moves += 1;
                            retry = true;
                        }
                    }
                    AgentState::Seeking => {
                        let pos = self.agents[i].pos();
                        let Some(dir) = find_direction(self.world.grid(), goal, pos) else {
                            continue;
                        };
                        match self.try_move(i, dir) {
                            MoveResult::Moved => {
                                stats.direct_moves += 1;
                                moved[i] = true;
                            }
                            MoveResult::Obstructed => retry = true,
                            MoveResult::Occupied(other) => {
                                trace!(
                                    agent = %self.agents[i].symbol(),
                                    by = %self.agents[other].symbol(),
                                    %dir,
                                    "blocked"
                                );
                                self.agents[i].set_blocker(dir);
                                stats.blocked_events += 1;
                                retry = true;
                            }
                        }
                    }
                }
            }

            if !retry {
                break;
            }
        }

        let outcome = if self.agents.iter().all(Agent::is_finished) {
            TickOutcome::Success
        } else if stats.direct_moves == 0 {
            // escaping by rotation alone does not count as progress
            TickOutcome::Deadlock
        } else {
            TickOutcome::InProgress
        };

        debug!(
            tick = stats.tick,
            passes = stats.passes,
            direct = stats.direct_moves,
            rotations = stats.rotation_moves,
            blocked = stats.blocked_events,
            ?outcome,
            "tick resolved"
        );

        self.last_stats = stats;
        if outcome.is_terminal() {
            self.outcome = Some(outcome);
        }
        outcome
    }

    /// Checked in `new`: every agent id has a goal
    #[inline]
    fn goal_of(&self, i: usize) -> Point {
        self.world.goals()[self.agents[i].id]
    }

    /// Try the three other directions in cycle order, then `dir` itself
    fn escape(&mut self, i: usize, dir: Direction) -> bool {
        for candidate in dir.escape_order() {
            if self.try_move(i, candidate) == MoveResult::Moved {
                self.agents[i].clear_blocker();
                trace!(agent = %self.agents[i].symbol(), was = %dir, took = %candidate, "escaped");
                return true;
            }
        }
        false
    }

    fn try_move(&mut self, i: usize, dir: Direction) -> MoveResult {
        let target = self.agents[i].pos().step(dir);
        if self.world.grid().is_blocked(target) {
            return MoveResult::Obstructed;
        }
        if let Some(other) = self.agents.iter().position(|a| a.pos() == target) {
            return MoveResult::Occupied(other);
        }

        self.agents[i].move_to(target);
        if target.is_adjacent(self.goal_of(i)) {
            self.agents[i].mark_finished();
        }
        trace!(agent = %self.agents[i].symbol(), %dir, to = %target, "moved");
        MoveResult::Moved
    }

    /// Drive ticks until a terminal outcome, drawing a frame before each one
    pub fn run_simulation(&mut self, args: &Args) -> io::Result<SimulationReport> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let interval = Duration::from_millis(args.interval);

        loop {
            if !args.quiet {
                render::draw(&mut out, self, !args.no_color)?;
            }

            if args.max_ticks.is_some_and(|max| self.tick >= max) {
                return Ok(SimulationReport {
                    status: RunStatus::TickLimit,
                    ticks: self.tick,
                });
            }

            if !interval.is_zero() {
                thread::sleep(interval);
            }

            let status = match self.run_tick() {
                TickOutcome::InProgress => continue,
                TickOutcome::Success => RunStatus::Success,
                TickOutcome::Deadlock => RunStatus::Deadlock,
            };

            if !args.quiet {
                render::draw(&mut out, self, !args.no_color)?;
            }
            out.flush()?;
            return Ok(SimulationReport {
                status,
                ticks: self.tick,
            });
        }
    }

    /// Print the run's outcome and a one-line summary
    pub fn print_summary(&self, report: &SimulationReport) {
        match report.status {
            RunStatus::Success => eprintln!("{}", "All agents have found their targets!".green().bold()),
            RunStatus::Deadlock => eprintln!("{}", "Some agents got stuck :(".red().bold()),
            RunStatus::TickLimit => eprintln!(
                "{}",
                format!("Tick limit reached after {} ticks", report.ticks).yellow().bold()
            ),
        }

        let finished = self.agents.iter().filter(|a| a.is_finished()).count();
        println!(
            "{} {} {} {}",
            "===".bright_blue().bold(),
            format!("ticks={}", report.ticks).cyan(),
            format!("agents={}", self.agents.len()).cyan(),
            format!("finished={}", finished).cyan(),
        );
    }
}
