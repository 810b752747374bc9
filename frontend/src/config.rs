use std::rc::Rc;

use log::{info, warn};
use shared::DashboardConfig;

const CONFIG_JSON: &str = include_str!("../config.json");

/// Configuration shared with every component through a context provider.
pub type ConfigContext = Rc<DashboardConfig>;

pub struct Config;

impl Config {
    /// Reads the bundled `config.json`. A malformed file falls back to the
    /// built-in defaults.
    pub fn load() -> DashboardConfig {
        Self::parse(CONFIG_JSON)
    }

    pub fn parse(raw: &str) -> DashboardConfig {
        match DashboardConfig::from_json(raw) {
            Ok(config) => {
                info!("Loaded configuration for {}", config.app_name);
                config
            }
            Err(e) => {
                warn!("Using default configuration: {}", e);
                DashboardConfig::default()
            }
        }
    }
}
