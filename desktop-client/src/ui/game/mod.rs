mod snake;

pub use snake::render_game;
