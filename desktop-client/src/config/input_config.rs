use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct InputConfig {
    /// Ignore key presses that would turn the snake straight back.
    pub reject_reversal: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { reject_reversal: true }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
