use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AssetConfig {
    pub food_image: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            food_image: "assets/food.png".to_string(),
        }
    }
}

impl Validate for AssetConfig {
    fn validate(&self) -> Result<(), String> {
        if self.food_image.is_empty() {
            return Err("food_image must not be empty".to_string());
        }
        Ok(())
    }
}
