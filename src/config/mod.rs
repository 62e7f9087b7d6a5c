//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MEMBERDESK` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use memberdesk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! let policy = config.pricing.to_policy().expect("Invalid pricing configuration");
//! ```

mod error;
mod logging;
mod pricing;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use pricing::PricingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Home jurisdiction and GST rates
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MEMBERDESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MEMBERDESK__PRICING__HOME_STATE_CODE=29` -> `pricing.home_state_code = "29"`
    /// - `MEMBERDESK__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEMBERDESK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pricing.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MEMBERDESK__PRICING__HOME_STATE_CODE");
        env::remove_var("MEMBERDESK__PRICING__HOME_STATE_NAME");
        env::remove_var("MEMBERDESK__PRICING__HOME_CITIES");
        env::remove_var("MEMBERDESK__PRICING__CGST_RATE");
        env::remove_var("MEMBERDESK__PRICING__SGST_RATE");
        env::remove_var("MEMBERDESK__PRICING__IGST_RATE");
        env::remove_var("MEMBERDESK__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.pricing.home_state_code, "27");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pricing_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MEMBERDESK__PRICING__HOME_STATE_CODE", "29");
        env::set_var("MEMBERDESK__PRICING__HOME_STATE_NAME", "Karnataka");
        env::set_var("MEMBERDESK__PRICING__HOME_CITIES", "Bengaluru,Mysuru");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let policy = config.pricing.to_policy().unwrap();
        assert_eq!(policy.home_state_code, "29");
        assert_eq!(policy.home_city_keywords, vec!["bengaluru", "mysuru"]);
    }

    #[test]
    fn test_rate_overrides_parse_as_decimal() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MEMBERDESK__PRICING__CGST_RATE", "2.5");
        env::set_var("MEMBERDESK__PRICING__SGST_RATE", "2.5");
        env::set_var("MEMBERDESK__PRICING__IGST_RATE", "5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.pricing.cgst_rate, Decimal::new(25, 1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_json_flag() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MEMBERDESK__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().logging.json);
    }
}
