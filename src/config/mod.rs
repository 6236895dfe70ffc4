//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `QA_RELAY_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use qa_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod deployment;
mod error;
mod search;
mod server;
mod warehouse;

pub use deployment::DeploymentConfig;
pub use error::{ConfigError, ValidationError};
pub use search::SearchConfig;
pub use server::{Environment, ServerConfig};
pub use warehouse::WarehouseConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the relay. Load using
/// [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Search service configuration (Discovery Engine)
    #[serde(default)]
    pub search: SearchConfig,

    /// Analytics warehouse configuration (BigQuery)
    #[serde(default)]
    pub warehouse: WarehouseConfig,

    /// Deployment identity (revision/version pass-through strings)
    #[serde(default)]
    pub deployment: DeploymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QA_RELAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `QA_RELAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `QA_RELAY__SEARCH__DATASTORE_ID=...` -> `search.datastore_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QA_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Port and timeout ranges
    /// - Warehouse URL format
    /// - Production-specific requirements (real project identifiers,
    ///   access tokens)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.search.validate(&self.server.environment)?;
        self.warehouse.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("QA_RELAY__SERVER__PORT");
        env::remove_var("QA_RELAY__SERVER__ENVIRONMENT");
        env::remove_var("QA_RELAY__SEARCH__DATASTORE_ID");
        env::remove_var("QA_RELAY__SEARCH__LOCATION");
        env::remove_var("QA_RELAY__WAREHOUSE__DATASET_ID");
        env::remove_var("QA_RELAY__DEPLOYMENT__REVISION");
    }

    #[test]
    fn test_load_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.location, "global");
        assert_eq!(config.warehouse.dataset_id, "dev");
        assert_eq!(config.deployment.revision, "local");
    }

    #[test]
    fn test_defaults_validate_in_development() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("QA_RELAY__SERVER__PORT", "3000");
        env::set_var("QA_RELAY__SEARCH__DATASTORE_ID", "docs");
        env::set_var("QA_RELAY__WAREHOUSE__DATASET_ID", "prod");
        env::set_var("QA_RELAY__DEPLOYMENT__REVISION", "relay-00042-abc");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.search.datastore_id, "docs");
        assert_eq!(config.warehouse.dataset_id, "prod");
        assert_eq!(config.deployment.revision, "relay-00042-abc");
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("QA_RELAY__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}
