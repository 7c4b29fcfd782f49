use crate::world::point::Point;

/// Largest width or height a map may have
pub const MAX_GRID_SIZE: usize = 32;

/// Static obstacle map, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    obstacles: Vec<bool>,
}

impl Grid {
    /// Create an open grid with no obstacles
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            obstacles: vec![false; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, obstacles included
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.obstacles.len()
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Flat index of an in-bounds cell
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    /// Mark a cell as an obstacle; out-of-bounds cells are ignored
    pub fn set_obstacle(&mut self, p: Point) {
        if let Some(idx) = self.index(p) {
            self.obstacles[idx] = true;
        }
    }

    /// True only for in-bounds cells marked as obstacles
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.index(p).is_some_and(|idx| self.obstacles[idx])
    }

    /// True for obstacles and for every cell outside `[0, width) x [0, height)`
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        match self.index(p) {
            Some(idx) => self.obstacles[idx],
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_count(), 12);
        assert!(!grid.is_blocked(Point::new(0, 0)));
        assert!(!grid.is_blocked(Point::new(3, 2)));
    }

    #[test]
    fn test_bounds_are_symmetric() {
        let grid = Grid::new(4, 3);

        assert!(grid.is_blocked(Point::new(-1, 0)));
        assert!(grid.is_blocked(Point::new(0, -1)));
        assert!(grid.is_blocked(Point::new(4, 0)));
        // strict on y as on x: a non-strict `y <= height` check would let the
        // row just past the bottom through as a free cell
        assert!(!grid.in_bounds(Point::new(0, 3)));
        assert!(grid.is_blocked(Point::new(0, 3)));
    }

    #[test]
    fn test_obstacles() {
        let mut grid = Grid::new(3, 3);
        grid.set_obstacle(Point::new(1, 1));
        grid.set_obstacle(Point::new(7, 7));

        assert!(grid.is_obstacle(Point::new(1, 1)));
        assert!(grid.is_blocked(Point::new(1, 1)));
        assert!(!grid.is_obstacle(Point::new(7, 7)));
        assert!(!grid.is_blocked(Point::new(1, 0)));
    }

    #[test]
    fn test_empty_grid_blocks_everything() {
        let grid = Grid::new(0, 0);
        assert!(grid.is_blocked(Point::new(0, 0)));
    }
}
