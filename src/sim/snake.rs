//! Snake body and heading

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// Heading on the grid (screen coordinates, `y` grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this heading
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Map a DOM `KeyboardEvent.key` value to a heading
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Ordered body segments, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Single-segment snake
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build a snake from head-first segments. Returns `None` when empty.
    pub fn from_segments<I: IntoIterator<Item = Cell>>(segments: I) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    #[inline]
    pub fn head(&self) -> Cell {
        // Never empty: constructors reject empty bodies and `advance` only
        // pops after pushing.
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments head first
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Cell the head would occupy after one step
    pub fn next_head(&self, direction: Direction) -> Cell {
        self.head() + direction.delta()
    }

    /// Push `new_head`; drop the tail unless `grow` is set
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Whether the head overlaps any other segment
    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.delta() + dir.opposite().delta(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("a"), None);
    }

    #[test]
    fn test_advance_moves_and_grows() {
        let mut snake = Snake::new(IVec2::new(5, 5));
        snake.advance(snake.next_head(Direction::Right), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), IVec2::new(6, 5));

        snake.advance(snake.next_head(Direction::Down), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![IVec2::new(6, 6), IVec2::new(6, 5)]
        );
    }

    #[test]
    fn test_head_hits_body() {
        // Head at (2,1) after curling back onto (2,1) segment
        let snake = Snake::from_segments([
            IVec2::new(2, 1),
            IVec2::new(2, 2),
            IVec2::new(1, 2),
            IVec2::new(1, 1),
            IVec2::new(2, 1),
        ])
        .unwrap();
        assert!(snake.head_hits_body());

        let snake = Snake::from_segments([IVec2::new(0, 0), IVec2::new(1, 0)]).unwrap();
        assert!(!snake.head_hits_body());
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(Snake::from_segments(std::iter::empty()).is_none());
    }
}
