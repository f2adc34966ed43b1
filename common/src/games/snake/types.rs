/// Pixel position of a grid cell's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx * cell_size, self.y + dy * cell_size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Unit step in screen space, y grows downwards.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetReason {
    WallCollision,
    SelfCollision,
}

/// Board dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(cell_size: i32, width: i32, height: i32) -> Self {
        Self { cell_size, width, height }
    }

    pub fn max_x(&self) -> i32 {
        self.width - self.cell_size
    }

    pub fn max_y(&self) -> i32 {
        self.height - self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }
}
