mod asset_config;
mod board_config;
mod input_config;
mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use asset_config::AssetConfig;
pub use board_config::BoardConfig;
pub use input_config::InputConfig;
pub use main_config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};
