use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

use super::WindowConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 5000;

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ClientConfigManager {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub computer_move_delay_ms: u64,
    pub last_mode: Option<GameMode>,
    pub window: WindowConfig,
    #[serde(default)]
    pub verbose_logging: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        self.window.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_move_delay_ms: 500,
            last_mode: None,
            window: WindowConfig::default(),
            verbose_logging: false,
        }
    }
}
