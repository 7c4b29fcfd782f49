//! First-step oracle: breadth-first search from an agent to any cell adjacent
//! to its goal, over static obstacles only.

use crate::direction::Direction;
use crate::world::{Grid, Point};
use std::collections::VecDeque;

/// First step of a shortest obstacle-avoiding path from `start` to a cell
/// adjacent to `goal`.
///
/// Returns `None` when `start` is already adjacent to `goal`, or when no such
/// cell is reachable. Every queued cell carries the direction of the first
/// step that led to it, so equally short paths resolve in
/// [`Direction::SEARCH_ORDER`] at every level. Other agents are not
/// considered.
pub fn find_direction(grid: &Grid, goal: Point, start: Point) -> Option<Direction> {
    if start.is_adjacent(goal) {
        return None;
    }

    // Owned by this call; nothing carries over between searches.
    let mut visited = vec![false; grid.cell_count()];
    let mut queue: VecDeque<(Direction, Point)> = VecDeque::with_capacity(grid.cell_count());

    if let Some(idx) = grid.index(start) {
        visited[idx] = true;
    }
    for dir in Direction::SEARCH_ORDER {
        enqueue(grid, &mut visited, &mut queue, dir, start.step(dir));
    }

    while let Some((first_step, pos)) = queue.pop_front() {
        if pos.is_adjacent(goal) {
            return Some(first_step);
        }
        for dir in Direction::SEARCH_ORDER {
            enqueue(grid, &mut visited, &mut queue, first_step, pos.step(dir));
        }
    }

    None
}

#[inline]
fn enqueue(
    grid: &Grid,
    visited: &mut [bool],
    queue: &mut VecDeque<(Direction, Point)>,
    first_step: Direction,
    pos: Point,
) {
    if grid.is_blocked(pos) {
        return;
    }
    if let Some(idx) = grid.index(pos) {
        if !visited[idx] {
            visited[idx] = true;
            queue.push_back((first_step, pos));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, walls: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in walls {
            grid.set_obstacle(Point::new(x, y));
        }
        grid
    }

    #[test]
    fn test_adjacent_start_needs_no_move() {
        let grid = Grid::new(3, 3);
        let goal = Point::new(1, 1);

        assert_eq!(find_direction(&grid, goal, goal), None);
        assert_eq!(find_direction(&grid, goal, Point::new(1, 0)), None);
        assert_eq!(find_direction(&grid, goal, Point::new(2, 1)), None);
    }

    #[test]
    fn test_straight_line() {
        let grid = Grid::new(5, 1);

        assert_eq!(
            find_direction(&grid, Point::new(4, 0), Point::new(0, 0)),
            Some(Direction::Right)
        );
        assert_eq!(
            find_direction(&grid, Point::new(0, 0), Point::new(4, 0)),
            Some(Direction::Left)
        );

        let grid = Grid::new(1, 5);
        assert_eq!(
            find_direction(&grid, Point::new(0, 0), Point::new(0, 4)),
            Some(Direction::Up)
        );
        assert_eq!(
            find_direction(&grid, Point::new(0, 4), Point::new(0, 0)),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_ties_prefer_right_then_left_then_down() {
        // diagonal goal: Right and Down are equally short, Right wins
        let grid = Grid::new(3, 3);
        assert_eq!(
            find_direction(&grid, Point::new(2, 2), Point::new(0, 0)),
            Some(Direction::Right)
        );

        // Left and Down equally short, Left wins
        assert_eq!(
            find_direction(&grid, Point::new(0, 2), Point::new(2, 0)),
            Some(Direction::Left)
        );

        // Left and Up equally short, Left wins
        assert_eq!(
            find_direction(&grid, Point::new(0, 0), Point::new(2, 2)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_routes_around_walls() {
        // 1 . .
        // # # .
        // A . .
        let grid = grid_with(3, 3, &[(0, 1), (1, 1)]);
        assert_eq!(
            find_direction(&grid, Point::new(0, 2), Point::new(0, 0)),
            Some(Direction::Right)
        );

        // the short way is walled off, so go the long way round
        // . . . .
        // . # # .
        // . 1 # A
        let grid = grid_with(4, 3, &[(1, 1), (2, 1), (2, 2)]);
        assert_eq!(
            find_direction(&grid, Point::new(3, 2), Point::new(1, 2)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_unreachable_goal() {
        let grid = grid_with(3, 1, &[(1, 0)]);
        assert_eq!(find_direction(&grid, Point::new(2, 0), Point::new(0, 0)), None);

        // boxed in on all four sides
        let grid = grid_with(3, 3, &[(1, 0), (0, 1), (2, 1), (1, 2)]);
        assert_eq!(find_direction(&grid, Point::new(0, 0), Point::new(1, 1)), None);
    }

    #[test]
    fn test_goal_on_far_side_of_bounds() {
        // walking off the grid is never an option
        let grid = Grid::new(2, 2);
        assert_eq!(
            find_direction(&grid, Point::new(1, 1), Point::new(0, 0)),
            Some(Direction::Right)
        );
    }

    #[test]
    fn test_determinism() {
        let grid = grid_with(6, 6, &[(2, 0), (2, 1), (2, 2), (4, 3), (4, 4), (4, 5)]);
        let goal = Point::new(5, 5);
        let start = Point::new(0, 0);

        let first = find_direction(&grid, goal, start);
        for _ in 0..10 {
            assert_eq!(find_direction(&grid, goal, start), first);
        }
    }
}
