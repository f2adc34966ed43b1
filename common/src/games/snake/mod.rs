mod collision;
mod game_state;
mod grid;
mod input;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use collision::{hits_body, hits_food, hits_wall};
pub use game_state::{SnakeGameState, TickOutcome};
pub use grid::{random_board_coordinate, random_coordinate};
pub use input::direction_for_key;
pub use session::{SessionStats, SnakeSession};
pub use settings::{MAX_TICKS_PER_SECOND, SnakeSessionSettings};
pub use snake::Snake;
pub use snapshot::SnakeSnapshot;
pub use types::{Board, Coordinate, Direction, ResetReason};
