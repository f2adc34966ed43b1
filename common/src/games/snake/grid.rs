use crate::games::SessionRng;
use super::types::{Board, Coordinate};

/// Picks a random grid-aligned coordinate inside `[0, width) x [0, height)`.
///
/// Draws one sample per axis. Dimensions are expected to be multiples of
/// `cell_size`; anything else is a caller bug, not a runtime fault.
pub fn random_coordinate(cell_size: i32, width: i32, height: i32, rng: &mut SessionRng) -> Coordinate {
    Coordinate::new(
        random_axis(cell_size, width, rng),
        random_axis(cell_size, height, rng),
    )
}

pub fn random_board_coordinate(board: &Board, rng: &mut SessionRng) -> Coordinate {
    random_coordinate(board.cell_size, board.width, board.height, rng)
}

fn random_axis(cell_size: i32, extent: i32, rng: &mut SessionRng) -> i32 {
    let cells = f64::from(extent) / f64::from(cell_size);
    (rng.unit() * cells).floor() as i32 * cell_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_are_aligned_and_in_bounds() {
        let boards = [(20, 200, 200), (50, 1200, 600), (10, 30, 10), (1, 7, 3)];

        for seed in 0..200u64 {
            let mut rng = SessionRng::new(seed);
            for &(cell, width, height) in &boards {
                for _ in 0..50 {
                    let c = random_coordinate(cell, width, height, &mut rng);
                    assert_eq!(c.x % cell, 0, "x {} not aligned to {}", c.x, cell);
                    assert_eq!(c.y % cell, 0, "y {} not aligned to {}", c.y, cell);
                    assert!((0..width).contains(&c.x));
                    assert!((0..height).contains(&c.y));
                }
            }
        }
    }

    #[test]
    fn test_single_cell_board_always_origin() {
        let mut rng = SessionRng::new(3);
        for _ in 0..20 {
            assert_eq!(random_coordinate(20, 20, 20, &mut rng), Coordinate::new(0, 0));
        }
    }

    #[test]
    fn test_covers_every_column_eventually() {
        let board = Board::new(20, 100, 20);
        let mut rng = SessionRng::new(11);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let c = random_board_coordinate(&board, &mut rng);
            seen[(c.x / 20) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
