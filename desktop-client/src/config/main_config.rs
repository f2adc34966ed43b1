use common::config::Validate;
use common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{AssetConfig, BoardConfig, ConfigManager, FileContentConfigProvider, InputConfig, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "grid_snake_config.yaml";

pub fn get_config_manager(path: &Path) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub board: BoardConfig,
    pub input: InputConfig,
    pub assets: AssetConfig,
}

impl Config {
    pub fn session_settings(&self) -> SnakeSessionSettings {
        self.board.to_session_settings(self.input.reject_reversal)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.input.validate()?;
        self.assets.validate()?;
        Ok(())
    }
}
