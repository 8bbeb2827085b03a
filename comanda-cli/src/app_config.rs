use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub timestamp_format: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file; optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file; shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of COMANDA)
            .add_source(config::Environment::with_prefix("COMANDA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
