mod app;
mod game;
mod input;

pub use app::SnakeApp;
