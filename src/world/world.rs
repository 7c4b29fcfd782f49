use crate::agent::{agent_symbol, Agent, MAX_AGENTS};
use crate::error::{ConfigError, Result};
use crate::world::grid::{Grid, MAX_GRID_SIZE};
use crate::world::point::Point;

/// Most goals a layout may hold (symbols `A`..`I`)
pub const MAX_GOALS: usize = 9;

/// Display symbol for goal `id`: `'A'` for goal 0
#[inline]
pub fn goal_symbol(id: usize) -> char {
    char::from_u32('A' as u32 + id as u32).unwrap_or('?')
}

/// Immutable part of a simulation: obstacles plus one goal per index
#[derive(Clone, Debug)]
pub struct World {
    grid: Grid,
    goals: Vec<Point>,
}

impl World {
    /// Validate dimensions and goals, then freeze them
    pub fn new(grid: Grid, goals: Vec<Point>) -> Result<Self> {
        if grid.width() > MAX_GRID_SIZE || grid.height() > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                width: grid.width(),
                height: grid.height(),
                max: MAX_GRID_SIZE,
            });
        }
        if goals.len() > MAX_GOALS {
            return Err(ConfigError::TooManyGoals {
                count: goals.len(),
                max: MAX_GOALS,
            });
        }
        for (id, &pos) in goals.iter().enumerate() {
            let symbol = goal_symbol(id);
            if !grid.in_bounds(pos) {
                return Err(ConfigError::OutOfBounds { symbol, pos });
            }
            if grid.is_obstacle(pos) {
                return Err(ConfigError::OnObstacle { symbol, pos });
            }
        }
        Ok(Self { grid, goals })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn goals(&self) -> &[Point] {
        &self.goals
    }

    /// Goal paired with agent `id`
    #[inline]
    pub fn goal(&self, id: usize) -> Option<Point> {
        self.goals.get(id).copied()
    }

    /// Place agent `i` at `starts[i]`, checking every agent has a goal and a
    /// free cell of its own
    pub fn create_agents(&self, starts: &[Point]) -> Result<Vec<Agent>> {
        if starts.len() > MAX_AGENTS {
            return Err(ConfigError::TooManyAgents {
                count: starts.len(),
                max: MAX_AGENTS,
            });
        }

        let mut agents: Vec<Agent> = Vec::with_capacity(starts.len());
        for (id, &pos) in starts.iter().enumerate() {
            let symbol = agent_symbol(id);
            if self.goal(id).is_none() {
                return Err(ConfigError::MissingGoal(goal_symbol(id)));
            }
            if !self.grid.in_bounds(pos) {
                return Err(ConfigError::OutOfBounds { symbol, pos });
            }
            if self.grid.is_obstacle(pos) {
                return Err(ConfigError::OnObstacle { symbol, pos });
            }
            if let Some(other) = agents.iter().find(|a| a.pos() == pos) {
                return Err(ConfigError::Overlap {
                    first: other.symbol(),
                    second: symbol,
                    pos,
                });
            }
            agents.push(Agent::new(id, pos));
        }
        Ok(agents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_world(width: usize, height: usize, goals: Vec<Point>) -> World {
        World::new(Grid::new(width, height), goals).expect("valid world")
    }

    #[test]
    fn test_world_creation() {
        let world = open_world(3, 3, vec![Point::new(2, 2)]);

        assert_eq!(world.grid().width(), 3);
        assert_eq!(world.goals().len(), 1);
        assert_eq!(world.goal(0), Some(Point::new(2, 2)));
        assert_eq!(world.goal(1), None);
    }

    #[test]
    fn test_create_agents() {
        let world = open_world(3, 3, vec![Point::new(2, 2), Point::new(0, 2)]);
        let agents = world
            .create_agents(&[Point::new(0, 0), Point::new(1, 0)])
            .unwrap();

        assert_eq!(agents.len(), 2);
        for (i, agent) in agents.iter().enumerate() {
            assert_eq!(agent.id, i);
            assert!(!agent.is_finished());
            assert_eq!(agent.blocker(), None);
        }
    }

    #[test]
    fn test_agent_without_goal_is_rejected() {
        let world = open_world(3, 3, vec![Point::new(2, 2)]);
        let err = world
            .create_agents(&[Point::new(0, 0), Point::new(1, 0)])
            .unwrap_err();

        assert!(matches!(err, ConfigError::MissingGoal('B')));
    }

    #[test]
    fn test_overlapping_agents_are_rejected() {
        let world = open_world(3, 3, vec![Point::new(2, 2), Point::new(0, 2)]);
        let err = world
            .create_agents(&[Point::new(1, 1), Point::new(1, 1)])
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Overlap { first: '1', second: '2', .. }
        ));
    }

    #[test]
    fn test_agent_on_obstacle_is_rejected() {
        let mut grid = Grid::new(3, 3);
        grid.set_obstacle(Point::new(1, 1));
        let world = World::new(grid, vec![Point::new(2, 2)]).unwrap();

        let err = world.create_agents(&[Point::new(1, 1)]).unwrap_err();
        assert!(matches!(err, ConfigError::OnObstacle { symbol: '1', .. }));

        let err = world.create_agents(&[Point::new(0, 3)]).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfBounds { symbol: '1', .. }));
    }

    #[test]
    fn test_limits() {
        let err = World::new(Grid::new(MAX_GRID_SIZE + 1, 2), vec![]).unwrap_err();
        assert!(matches!(err, ConfigError::GridTooLarge { .. }));

        let goals: Vec<Point> = (0..10).map(|x| Point::new(x, 0)).collect();
        let err = World::new(Grid::new(10, 1), goals).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyGoals { count: 10, .. }));

        let world = open_world(10, 2, (0..9).map(|x| Point::new(x, 1)).collect());
        let starts: Vec<Point> = (0..10).map(|x| Point::new(x, 0)).collect();
        let err = world.create_agents(&starts).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyAgents { count: 10, .. }));
    }

    #[test]
    fn test_goal_symbols() {
        assert_eq!(goal_symbol(0), 'A');
        assert_eq!(goal_symbol(8), 'I');
    }
}
