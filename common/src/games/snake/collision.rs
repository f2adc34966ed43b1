use std::collections::VecDeque;

use super::types::{Board, Coordinate};

pub fn hits_wall(head: Coordinate, board: &Board) -> bool {
    head.x < 0 || head.x > board.max_x() || head.y < 0 || head.y > board.max_y()
}

pub fn hits_food(head: Coordinate, food: Coordinate) -> bool {
    head == food
}

pub fn hits_body(head: Coordinate, body: &VecDeque<Coordinate>) -> bool {
    body.contains(&head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(20, 200, 200)
    }

    #[test]
    fn test_wall_edges() {
        let board = board();
        assert!(!hits_wall(Coordinate::new(0, 0), &board));
        assert!(!hits_wall(Coordinate::new(180, 180), &board));
        assert!(hits_wall(Coordinate::new(-20, 0), &board));
        assert!(hits_wall(Coordinate::new(0, -20), &board));
        assert!(hits_wall(Coordinate::new(200, 0), &board));
        assert!(hits_wall(Coordinate::new(0, 200), &board));
    }

    #[test]
    fn test_food_requires_exact_match() {
        assert!(hits_food(Coordinate::new(40, 40), Coordinate::new(40, 40)));
        assert!(!hits_food(Coordinate::new(40, 40), Coordinate::new(40, 60)));
    }

    #[test]
    fn test_empty_body_never_hit() {
        for x in (-40..240).step_by(20) {
            assert!(!hits_body(Coordinate::new(x, x), &VecDeque::new()));
        }
    }

    #[test]
    fn test_body_hit_anywhere_in_body() {
        let body = VecDeque::from([Coordinate::new(0, 0), Coordinate::new(20, 0), Coordinate::new(40, 0)]);
        assert!(hits_body(Coordinate::new(40, 0), &body));
        assert!(!hits_body(Coordinate::new(60, 0), &body));
    }
}
