use std::collections::VecDeque;

use crate::grid::Grid;
use crate::Coords;
use Direction::*;

/// Turns that can wait for a tick; later requests are dropped.
pub const MAX_PENDING_TURNS: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Body cells, head first. `x` is always wrapped into the grid.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    /// Lays `size` cells on row `y` ending at `head_x`, pointing right.
    pub fn new(head_x: i32, y: i32, size: usize) -> Self {
        let body = (0..size as i32)
            .map(|i| (Grid::wrap_x(head_x - i), y))
            .collect();
        Snake { body }
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Coords>) -> Self {
        Snake { body: body.into() }
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn tail(&self) -> Coords {
        self.body[self.body.len() - 1]
    }

    /// Where the head lands after one step, with x wrapped.
    pub fn next_head(&self, direction: Direction) -> Coords {
        let (x, y) = self.head();
        let (dx, dy) = direction.delta();
        (Grid::wrap_x(x + dx), y + dy)
    }

    pub fn push_head(&mut self, pos: Coords) {
        self.body.push_front(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Coords> {
        self.body.pop_back()
    }
}

/// Pending turns. Applied oldest first; the reversal check looks at the newest.
#[derive(Clone, Debug)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    pub fn new() -> Self {
        DirectionQueue { pending: VecDeque::with_capacity(MAX_PENDING_TURNS) }
    }

    /// Returns whether the turn was queued.
    pub fn request(&mut self, direction: Direction, current: Direction) -> bool {
        let last = self.pending.back().copied().unwrap_or(current);
        if direction == last.opposite() || self.pending.len() >= MAX_PENDING_TURNS {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    pub fn next(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GRID_WIDTH;

    #[test]
    fn new_snake_lies_behind_head() {
        let snake = Snake::new(3, 2, 4);
        let body: Vec<Coords> = snake.body().iter().copied().collect();
        assert_eq!(body, vec![(3, 2), (2, 2), (1, 2), (0, 2)]);
        assert_eq!(snake.head(), (3, 2));
        assert_eq!(snake.tail(), (0, 2));
    }

    #[test]
    fn next_head_wraps_columns_only() {
        let snake = Snake::new(GRID_WIDTH - 1, 0, 2);
        assert_eq!(snake.next_head(Right), (0, 0));
        assert_eq!(snake.next_head(Up), (GRID_WIDTH - 1, -1));

        let snake = Snake::new(0, 3, 1);
        assert_eq!(snake.next_head(Left), (GRID_WIDTH - 1, 3));
        assert_eq!(snake.next_head(Down), (0, 4));
    }

    #[test]
    fn reversal_is_checked_against_newest_request() {
        let mut queue = DirectionQueue::new();
        assert!(!queue.request(Left, Right));
        assert!(queue.request(Up, Right));
        // Left reverses Right, but the newest pending turn is Up
        assert!(queue.request(Left, Right));
        assert!(!queue.request(Right, Right));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn turns_apply_in_request_order() {
        let mut queue = DirectionQueue::new();
        queue.request(Up, Right);
        queue.request(Left, Right);
        assert_eq!(queue.next(), Some(Up));
        assert_eq!(queue.next(), Some(Left));
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn overflow_is_dropped() {
        let mut queue = DirectionQueue::new();
        let turns = [Up, Left, Down, Right];
        for turn in turns.iter() {
            assert!(queue.request(*turn, Right));
        }
        assert!(!queue.request(Up, Right));
        assert_eq!(queue.len(), MAX_PENDING_TURNS);
    }
}
