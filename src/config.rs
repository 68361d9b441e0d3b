//! Runtime configuration
//!
//! The place-search API key comes from the environment; a `.env` file in
//! the working directory is honored. Configuration is loaded once at
//! startup and passed explicitly to the components that need it.

use crate::error::{Error, Result};

/// Environment variable holding the place-search API key
pub const API_KEY_VAR: &str = "gmaps_api_key";

/// Runtime configuration, constructed once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Place-search API credential. Never logged.
    pub api_key: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Reads a `.env` file from the working directory first, if present.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Build configuration from the already-populated process environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            return Err(Error::Config(format!(
                "{} is not set (add it to the environment or a .env file)",
                API_KEY_VAR
            )));
        }
        Ok(Self { api_key })
    }
}
