//! Hosted record store configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Connection settings for the hosted record store.
///
/// When this section is absent, contact submissions are kept in memory.
#[derive(Debug, Deserialize)]
pub struct RecordStoreConfig {
    /// API base URL, e.g. `https://records.example.com`
    pub base_url: String,

    /// Project identifier sent with every request
    pub project_id: String,

    /// Public key sent with every request
    pub public_key: Secret<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl RecordStoreConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate record store configuration
    pub fn validate(&self, is_production: bool) -> Result<(), ValidationError> {
        if self.project_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("RECORD_STORE__PROJECT_ID"));
        }
        if self.public_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("RECORD_STORE__PUBLIC_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidRecordStoreUrl);
        }
        if is_production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::RecordStoreMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > 10 {
            return Err(ValidationError::TooManyRetries);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_retries() -> u32 {
    3
}
