use crate::log;
use crate::games::SessionRng;
use super::collision::{hits_body, hits_food, hits_wall};
use super::grid::random_board_coordinate;
use super::input::direction_for_key;
use super::snake::Snake;
use super::snapshot::SnakeSnapshot;
use super::types::{Board, Coordinate, Direction, ResetReason};

const FOOD_SPAWN_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub reset: Option<ResetReason>,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub food: Coordinate,
    pub score: u32,
    pub board: Board,
    pub reject_reversal: bool,
    pub ticks: u64,
}

impl SnakeGameState {
    pub fn new(board: Board, reject_reversal: bool, rng: &mut SessionRng) -> Self {
        let head = random_board_coordinate(&board, rng);
        let mut state = Self {
            snake: Snake::new(head, Direction::Up),
            food: head,
            score: 0,
            board,
            reject_reversal,
            ticks: 0,
        };
        state.food = state.spawn_food(rng, &[head]);
        state
    }

    /// Records `direction` as pending unless it reverses the committed heading.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.reject_reversal && direction.is_opposite(&self.snake.direction) {
            return false;
        }
        self.snake.pending_direction = Some(direction);
        true
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        match direction_for_key(key) {
            Some(direction) => self.request_direction(direction),
            None => false,
        }
    }

    /// Advances the simulation by one cell.
    ///
    /// Order matters: wall and food are checked against the head *before* it
    /// moves, self collision against the head *after* it moves. A head that
    /// steps off the board therefore stays there until the next tick.
    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        self.ticks += 1;

        let direction = self.snake.commit_direction();

        if hits_wall(self.snake.head, &self.board) {
            log!(
                "Wall hit at ({}, {}). Score was {}",
                self.snake.head.x,
                self.snake.head.y,
                self.score
            );
            self.reset_snake(rng);
            outcome.reset = Some(ResetReason::WallCollision);
        }

        if hits_food(self.snake.head, self.food) {
            let head = self.snake.head;
            self.snake.body.push_back(head);
            self.score += 1;
            let next_head = head.moved(direction, self.board.cell_size);
            self.food = self.spawn_food(rng, &[head, next_head]);
            outcome.ate_food = true;
            log!(
                "Ate food at ({}, {}). Score: {}. Next food at ({}, {})",
                head.x,
                head.y,
                self.score,
                self.food.x,
                self.food.y
            );
        }

        self.snake.shift_body();
        self.snake.advance_head(self.board.cell_size);

        if hits_body(self.snake.head, &self.snake.body) {
            log!(
                "Self collision at ({}, {}). Score was {}",
                self.snake.head.x,
                self.snake.head.y,
                self.score
            );
            self.reset_snake(rng);
            outcome.reset = Some(ResetReason::SelfCollision);
        }

        outcome
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            tick: self.ticks,
            head: self.snake.head,
            body: self.snake.body.iter().copied().collect(),
            food: self.food,
            score: self.score,
            direction: self.snake.direction,
            board: self.board,
        }
    }

    fn reset_snake(&mut self, rng: &mut SessionRng) {
        let head = random_board_coordinate(&self.board, rng);
        self.snake.respawn(head);
        self.score = 0;
    }

    fn spawn_food(&self, rng: &mut SessionRng, avoid: &[Coordinate]) -> Coordinate {
        let mut candidate = random_board_coordinate(&self.board, rng);
        for _ in 1..FOOD_SPAWN_ATTEMPTS {
            if !avoid.contains(&candidate) {
                break;
            }
            candidate = random_board_coordinate(&self.board, rng);
        }
        candidate
    }
}
