use std::fmt;

/// The four cardinal moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Rotation cycle order: Up -> Down -> Left -> Right -> Up
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Order in which the search seeds its first steps; earlier wins ties
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `(dx, dy)` with y growing downwards
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Next direction in the rotation cycle
    #[inline]
    pub const fn rotated(self) -> Direction {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Escape attempts for an agent blocked while moving in `self`: the three
    /// other directions in cycle order, then `self` again.
    pub fn escape_order(self) -> [Direction; 4] {
        let first = self.rotated();
        let second = first.rotated();
        let third = second.rotated();
        [first, second, third, self]
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
