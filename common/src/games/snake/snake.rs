use std::collections::VecDeque;

use super::types::{Coordinate, Direction};

#[derive(Clone, Debug)]
pub struct Snake {
    pub head: Coordinate,
    /// Trailing segments, newest first.
    pub body: VecDeque<Coordinate>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    pub fn new(head: Coordinate, direction: Direction) -> Self {
        Self {
            head,
            body: VecDeque::new(),
            direction,
            pending_direction: None,
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Shifts the body one step towards the head, keeping its length.
    pub fn shift_body(&mut self) {
        if self.body.is_empty() {
            return;
        }
        self.body.pop_back();
        self.body.push_front(self.head);
    }

    pub fn advance_head(&mut self, cell_size: i32) {
        self.head = self.head.moved(self.direction, cell_size);
    }

    /// Applies the pending direction, if any. Returns the committed direction.
    pub fn commit_direction(&mut self) -> Direction {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.direction
    }

    pub fn respawn(&mut self, head: Coordinate) {
        self.head = head;
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_keeps_length_and_follows_head() {
        let mut snake = Snake::new(Coordinate::new(40, 40), Direction::Up);
        snake.body = VecDeque::from([Coordinate::new(40, 60), Coordinate::new(40, 80)]);

        snake.shift_body();

        assert_eq!(snake.body, vec![Coordinate::new(40, 40), Coordinate::new(40, 60)]);
    }

    #[test]
    fn test_shift_on_empty_body_is_noop() {
        let mut snake = Snake::new(Coordinate::new(0, 0), Direction::Right);
        snake.shift_body();
        assert!(snake.is_empty());
    }

    #[test]
    fn test_commit_consumes_pending() {
        let mut snake = Snake::new(Coordinate::new(0, 0), Direction::Up);
        snake.pending_direction = Some(Direction::Left);

        assert_eq!(snake.commit_direction(), Direction::Left);
        assert_eq!(snake.pending_direction, None);
        assert_eq!(snake.commit_direction(), Direction::Left);
    }
}
