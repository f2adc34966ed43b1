use std::time::Duration;

use crate::config::Validate;
use super::types::Board;

pub const MAX_TICKS_PER_SECOND: u32 = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub cell_size: u32,
    pub board_width: u32,
    pub board_height: u32,
    pub ticks_per_second: u32,
    pub reject_reversal: bool,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            cell_size: 50,
            board_width: 1200,
            board_height: 600,
            ticks_per_second: 2,
            reject_reversal: true,
        }
    }
}

impl SnakeSessionSettings {
    pub fn board(&self) -> Board {
        Board::new(
            self.cell_size as i32,
            self.board_width as i32,
            self.board_height as i32,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        if self.board_width == 0 || self.board_height == 0 {
            return Err("board dimensions must be greater than 0".to_string());
        }
        if self.board_width > i32::MAX as u32 || self.board_height > i32::MAX as u32 {
            return Err("board dimensions are too large".to_string());
        }
        if self.board_width % self.cell_size != 0 || self.board_height % self.cell_size != 0 {
            return Err(format!(
                "board dimensions {}x{} must be multiples of cell_size {}",
                self.board_width, self.board_height, self.cell_size
            ));
        }
        if self.ticks_per_second == 0 || self.ticks_per_second > MAX_TICKS_PER_SECOND {
            return Err(format!(
                "ticks_per_second must be between 1 and {}",
                MAX_TICKS_PER_SECOND
            ));
        }
        Ok(())
    }
}
