//! Runtime configuration.
//!
//! Everything comes from `STRICTLYHEAL__`-prefixed environment variables
//! (a `.env` file is read first when present). Sections nest with `__`:
//!
//! ```text
//! STRICTLYHEAL__SERVER__PORT=3000
//! STRICTLYHEAL__SERVER__CORS_ORIGINS=https://strictlyheal.example
//! STRICTLYHEAL__RECORD_STORE__BASE_URL=https://records.example.com
//! STRICTLYHEAL__RECORD_STORE__PROJECT_ID=...
//! STRICTLYHEAL__RECORD_STORE__PUBLIC_KEY=...
//! ```

mod error;
mod record_store;
mod server;

pub use error::{ConfigError, ValidationError};
pub use record_store::RecordStoreConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root configuration.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Hosted record store for contact submissions; in-memory when absent
    #[serde(default)]
    pub record_store: Option<RecordStoreConfig>,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    ///
    /// # Errors
    ///
    /// `LoadError` when a value doesn't parse into its field type, or when a
    /// `record_store` section is present but incomplete.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STRICTLYHEAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic checks that deserialization can't express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(record_store) = &self.record_store {
            record_store.validate(self.is_production())?;
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
