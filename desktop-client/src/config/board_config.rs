use common::config::Validate;
use common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub cell_size: u32,
    pub board_width: u32,
    pub board_height: u32,
    pub ticks_per_second: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let settings = SnakeSessionSettings::default();
        Self {
            cell_size: settings.cell_size,
            board_width: settings.board_width,
            board_height: settings.board_height,
            ticks_per_second: settings.ticks_per_second,
        }
    }
}

impl BoardConfig {
    pub fn to_session_settings(&self, reject_reversal: bool) -> SnakeSessionSettings {
        SnakeSessionSettings {
            cell_size: self.cell_size,
            board_width: self.board_width,
            board_height: self.board_height,
            ticks_per_second: self.ticks_per_second,
            reject_reversal,
        }
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_session_settings(true).validate()
    }
}
