//! Collaborator endpoint configuration.
//!
//! The remote collaborator is reached through a single fixed URL. The URL is
//! validated at configuration time so adapters can assume a well-formed
//! endpoint.

use std::env;

use thiserror::Error;
use url::Url;

/// Environment variable naming the collaborator endpoint.
pub const ENDPOINT_ENV: &str = "TASKDESK_API_URL";

/// Errors returned while resolving the collaborator configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint environment variable is not set.
    #[error("collaborator endpoint not configured, set {ENDPOINT_ENV}")]
    MissingEndpoint,

    /// The configured endpoint is not a valid URL.
    #[error("invalid collaborator endpoint '{value}': {source}")]
    InvalidEndpoint {
        /// The rejected raw value.
        value: String,
        /// The underlying parse failure.
        source: url::ParseError,
    },
}

/// Validated collaborator endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    endpoint: Url,
}

impl ApiConfig {
    /// Creates a configuration from an already-parsed endpoint URL.
    #[must_use]
    pub const fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }

    /// Creates a configuration from a raw endpoint string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] when the value does not
    /// parse as a URL.
    pub fn from_endpoint(value: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = value.into();
        let endpoint = Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint {
            value: raw,
            source,
        })?;
        Ok(Self { endpoint })
    }

    /// Reads the configuration from the [`ENDPOINT_ENV`] environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEndpoint`] when the variable is unset
    /// or [`ConfigError::InvalidEndpoint`] when it does not parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(ENDPOINT_ENV).map_err(|_| ConfigError::MissingEndpoint)?;
        Self::from_endpoint(raw)
    }

    /// Returns the collaborator endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiConfig, ConfigError};

    #[test]
    fn from_endpoint_accepts_http_url() {
        let config = ApiConfig::from_endpoint("https://api.example.test/tasks")
            .expect("valid endpoint should parse");
        assert_eq!(config.endpoint().as_str(), "https://api.example.test/tasks");
    }

    #[test]
    fn from_endpoint_rejects_garbage() {
        let result = ApiConfig::from_endpoint("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }
}
