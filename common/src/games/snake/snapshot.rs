use super::types::{Board, Coordinate, Direction};

/// Read-only view of one tick's result, handed to renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub tick: u64,
    pub head: Coordinate,
    pub body: Vec<Coordinate>,
    pub food: Coordinate,
    pub score: u32,
    pub direction: Direction,
    pub board: Board,
}

impl SnakeSnapshot {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}
