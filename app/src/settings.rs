use config::{Config, ConfigError, Environment, File};
use goap::SearchConfig;
use infrastructure::MonitoringConfig;
use serde::Deserialize;

use crate::survivor::AgentConfig;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub planner: SearchConfig,
    pub agent: AgentConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config.toml"))
            .add_source(Environment::with_prefix("SURVIVOR").separator("__").try_parsing(true));

        let s = builder.build()?;
        s.try_deserialize()
    }
}
