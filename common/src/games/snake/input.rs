use super::types::Direction;

/// Maps a key name to a heading. Only lowercase `w`, `a`, `s`, `d` are bound.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "w" => Some(Direction::Up),
        "a" => Some(Direction::Left),
        "s" => Some(Direction::Down),
        "d" => Some(Direction::Right),
        _ => None,
    }
}
