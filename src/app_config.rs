use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub flat_rate_hours: i64,
    pub flat_charge: i64,
    pub hourly_charge: i64,
    pub currency_symbol: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load("parking_lot")
    }

    /// Defaults, then the optional config file `name`, then `APP_*` variables.
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("flat_rate_hours", defaults.flat_rate_hours)?
            .set_default("flat_charge", defaults.flat_charge)?
            .set_default("hourly_charge", defaults.hourly_charge)?
            .set_default("currency_symbol", defaults.currency_symbol)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            flat_rate_hours: 2,
            flat_charge: 10,
            hourly_charge: 10,
            currency_symbol: "$".to_string(),
        }
    }
}
