//! Client configuration
//!
//! The endpoint of the code-generation service and the request timeout are
//! injected into the service at construction. Defaults match a local deployment
//! of the service; `CURPGEN_ENDPOINT` and `CURPGEN_REQUEST_TIMEOUT_MS` override
//! them (desktop reads the process environment and `.env`, browser builds take
//! the endpoint from the build environment).

use std::time::Duration;
use thiserror::Error;
use url::Url;

use curpgen_shared::DEFAULT_GENERATE_CURP_URL;

/// Default request timeout in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub const ENDPOINT_ENV: &str = "CURPGEN_ENDPOINT";
pub const REQUEST_TIMEOUT_ENV: &str = "CURPGEN_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("Unsupported endpoint scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}

/// Where and how long to ask for a CURP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GENERATE_CURP_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Absolute URL of the generate endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Replace the endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the value is not an absolute http(s) URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Build from the environment, falling back to defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from the environment captured at compile time, falling back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            ENDPOINT_ENV => option_env!("CURPGEN_ENDPOINT").map(str::to_string),
            REQUEST_TIMEOUT_ENV => option_env!("CURPGEN_REQUEST_TIMEOUT_MS").map(str::to_string),
            _ => None,
        })
    }

    /// Build from an arbitrary key lookup. Invalid values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENDPOINT_ENV) {
            match parse_endpoint(&raw) {
                Ok(endpoint) => config.endpoint = endpoint,
                Err(e) => tracing::warn!("Ignoring {}: {}", ENDPOINT_ENV, e),
            }
        }

        if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.request_timeout = Duration::from_millis(ms),
                _ => tracing::warn!(
                    "Ignoring {}: expected a positive number of milliseconds, got '{}'",
                    REQUEST_TIMEOUT_ENV,
                    raw
                ),
            }
        }

        config
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_points_at_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint(), "http://localhost:8080/generate_curp");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn default_endpoint_is_a_valid_url() {
        assert_eq!(
            parse_endpoint(DEFAULT_GENERATE_CURP_URL).unwrap(),
            DEFAULT_GENERATE_CURP_URL
        );
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENDPOINT_ENV, "https://curp.example.mx/generate_curp"),
            (REQUEST_TIMEOUT_ENV, "1500"),
        ]));

        assert_eq!(config.endpoint(), "https://curp.example.mx/generate_curp");
        assert_eq!(config.request_timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENDPOINT_ENV, "not a url"),
            (REQUEST_TIMEOUT_ENV, "0"),
        ]));

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn with_endpoint_rejects_non_http_schemes() {
        let err = ClientConfig::default()
            .with_endpoint("ftp://example.com/generate_curp")
            .unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedScheme("ftp".to_string()));
    }

    #[test]
    fn with_endpoint_rejects_relative_urls() {
        let err = ClientConfig::default()
            .with_endpoint("/generate_curp")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }
}
