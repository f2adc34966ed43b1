pub mod config;
pub mod games;
pub mod logger;

pub use games::snake::{Coordinate, Direction, SnakeSnapshot};
