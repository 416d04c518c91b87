mod config;
mod window_config;

pub use config::{ClientConfigManager, Config, get_config_manager};
pub use window_config::WindowConfig;
