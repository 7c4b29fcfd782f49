use crate::direction::Direction;
use crate::world::Point;

/// Most agents a layout may hold (symbols `1`..`9`)
pub const MAX_AGENTS: usize = 9;

/// Display symbol for agent `id`: `'1'` for agent 0
#[inline]
pub fn agent_symbol(id: usize) -> char {
    char::from_digit(id as u32 + 1, 10).unwrap_or('?')
}

/// Where an agent stands in the per-tick state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentState {
    Finished,
    /// Last attempted move ran into another agent
    Blocked(Direction),
    Seeking,
}

/// A mover paired with the goal of the same index
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Agent {
    pub id: usize,
    pos: Point,
    finished: bool,
    blocker: Option<Direction>,
}

impl Agent {
    /// Create a new agent at the given position
    pub(crate) fn new(id: usize, pos: Point) -> Self {
        Self {
            id,
            pos,
            finished: false,
            blocker: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn symbol(&self) -> char {
        agent_symbol(self.id)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn blocker(&self) -> Option<Direction> {
        self.blocker
    }

    /// Finished wins over a pending blocker
    pub fn state(&self) -> AgentState {
        match (self.finished, self.blocker) {
            (true, _) => AgentState::Finished,
            (false, Some(dir)) => AgentState::Blocked(dir),
            (false, None) => AgentState::Seeking,
        }
    }

    /// There is no way back: once finished, always finished
    #[inline]
    pub(crate) fn mark_finished(&mut self) {
        self.finished = true;
        self.blocker = None;
    }

    #[inline]
    pub(crate) fn set_blocker(&mut self, dir: Direction) {
        self.blocker = Some(dir);
    }

    #[inline]
    pub(crate) fn clear_blocker(&mut self) {
        self.blocker = None;
    }

    #[inline]
    pub(crate) fn move_to(&mut self, pos: Point) {
        self.pos = pos;
    }
}
