//! Search service configuration
//!
//! Settings for the managed search/summarization backend (Discovery
//! Engine). The serving config path identifies which data store answers
//! questions; the summary model controls answer generation.

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Search service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Cloud project owning the data store
    #[serde(default = "default_project")]
    pub project: String,

    /// Service location (e.g. "global", "us", "eu")
    #[serde(default = "default_location")]
    pub location: String,

    /// Collection containing the data store
    #[serde(default = "default_collection_id")]
    pub collection_id: String,

    /// Data store to search
    #[serde(default = "default_datastore_id")]
    pub datastore_id: String,

    /// Serving config within the data store
    #[serde(default = "default_serving_config")]
    pub serving_config: String,

    /// Answer generation model version
    #[serde(default = "default_summary_model")]
    pub summary_model: String,

    /// Bearer token for the search API
    pub access_token: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SearchConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base endpoint derived from the location.
    ///
    /// The global location uses the bare hostname; regional locations
    /// use a location-prefixed one.
    pub fn api_endpoint(&self) -> String {
        if self.location == "global" {
            "https://discoveryengine.googleapis.com".to_string()
        } else {
            format!("https://{}-discoveryengine.googleapis.com", self.location)
        }
    }

    /// Full resource path of the serving config
    pub fn serving_config_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/collections/{}/dataStores/{}/servingConfigs/{}",
            self.project, self.location, self.collection_id, self.datastore_id, self.serving_config
        )
    }

    /// Validate search configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.location.is_empty() {
            return Err(ValidationError::InvalidSearchLocation);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if *environment == Environment::Production {
            if self.project == "-" || self.project.is_empty() {
                return Err(ValidationError::MissingRequired("SEARCH__PROJECT"));
            }
            if self.datastore_id == "-" || self.datastore_id.is_empty() {
                return Err(ValidationError::MissingRequired("SEARCH__DATASTORE_ID"));
            }
            if self.access_token.is_none() {
                return Err(ValidationError::SearchTokenRequired);
            }
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            location: default_location(),
            collection_id: default_collection_id(),
            datastore_id: default_datastore_id(),
            serving_config: default_serving_config(),
            summary_model: default_summary_model(),
            access_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_project() -> String {
    "-".to_string()
}

fn default_location() -> String {
    "global".to_string()
}

fn default_collection_id() -> String {
    "default_collection".to_string()
}

fn default_datastore_id() -> String {
    "-".to_string()
}

fn default_serving_config() -> String {
    "default_config".to_string()
}

fn default_summary_model() -> String {
    "gemini-1.5-flash-001/answer_gen/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}
