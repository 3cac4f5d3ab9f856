//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MAGNOLIA_API_URL` - Base URL of the remote catalog store
//!
//! ## Optional
//! - `MAGNOLIA_API_TOKEN` - Bearer token for the store's admin endpoints

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Environment variable is present but invalid.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Admin engine configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the remote catalog store.
    pub api_base_url: Url,
    /// Bearer token for admin endpoints, if the store requires one.
    pub access_token: Option<SecretString>,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// The caller is expected to have loaded `.env` first (the CLI does this
    /// via `dotenvy`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `MAGNOLIA_API_URL` is missing or not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = std::env::var("MAGNOLIA_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("MAGNOLIA_API_URL"))?;
        let api_base_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("MAGNOLIA_API_URL", e.to_string()))?;

        let access_token = std::env::var("MAGNOLIA_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .map(SecretString::from);

        Ok(Self {
            api_base_url,
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("MAGNOLIA_API_URL");
        assert_eq!(
            err.to_string(),
            "Missing environment variable: MAGNOLIA_API_URL"
        );
    }
}
