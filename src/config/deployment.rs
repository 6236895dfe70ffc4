//! Deployment identity configuration
//!
//! Opaque identifiers naming the running build. Attached verbatim to
//! every interaction record for traceability; never validated.

use serde::Deserialize;

/// Deployment identity configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    /// Deployment revision identifier (e.g. the serving revision name)
    #[serde(default = "default_revision")]
    pub revision: String,

    /// Deployment version identifier
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            revision: default_revision(),
            version: default_version(),
        }
    }
}

fn default_revision() -> String {
    "local".to_string()
}

fn default_version() -> String {
    "-".to_string()
}
