//! Analytics warehouse configuration
//!
//! Settings for the warehouse table receiving interaction records.

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Analytics warehouse configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WarehouseConfig {
    /// Cloud project owning the dataset
    #[serde(default = "default_project")]
    pub project: String,

    /// Dataset containing the interaction table
    #[serde(default = "default_dataset_id")]
    pub dataset_id: String,

    /// Table receiving interaction records
    #[serde(default = "default_table_id")]
    pub table_id: String,

    /// Base URL of the warehouse REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token for the warehouse API
    pub access_token: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl WarehouseConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Streaming-insert endpoint for the configured table
    pub fn insert_all_url(&self) -> String {
        format!(
            "{}/projects/{}/datasets/{}/tables/{}/insertAll",
            self.base_url, self.project, self.dataset_id, self.table_id
        )
    }

    /// Validate warehouse configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidWarehouseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if *environment == Environment::Production {
            if self.project == "-" || self.project.is_empty() {
                return Err(ValidationError::MissingRequired("WAREHOUSE__PROJECT"));
            }
            if self.access_token.is_none() {
                return Err(ValidationError::WarehouseTokenRequired);
            }
        }
        Ok(())
    }
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            dataset_id: default_dataset_id(),
            table_id: default_table_id(),
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_project() -> String {
    "-".to_string()
}

fn default_dataset_id() -> String {
    "dev".to_string()
}

fn default_table_id() -> String {
    "qa".to_string()
}

fn default_base_url() -> String {
    "https://bigquery.googleapis.com/bigquery/v2".to_string()
}

fn default_timeout() -> u64 {
    30
}
