//! Lookup configuration.
//!
//! The credential is an explicit value handed to the client at
//! construction rather than a global read at first use, so tests and
//! embedders can run clients with different keys side by side.

use std::env;
use std::time::Duration;

use crate::error::LookupError;

/// Default FMP REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the FMP API key.
pub const API_KEY_VAR: &str = "FMP_API_KEY";

const BASE_URL_VAR: &str = "FMP_BASE_URL";
const TIMEOUT_VAR: &str = "FMP_TIMEOUT_SECS";

/// Settings for one lookup client.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// FMP API key, passed upstream as the `apikey` query parameter.
    pub api_key: String,
    /// Base endpoint, overridable for tests.
    pub base_url: String,
    /// Timeout applied to each upstream request by the transport.
    pub timeout: Duration,
}

impl LookupConfig {
    /// Configuration with an explicit key and default endpoint/timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LookupError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LookupError::Configuration(format!(
                "{} must not be empty",
                API_KEY_VAR
            )));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Configuration from the process environment.
    ///
    /// `FMP_API_KEY` is required; `FMP_BASE_URL` and `FMP_TIMEOUT_SECS`
    /// override the defaults when set.
    pub fn from_env() -> Result<Self, LookupError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| {
            LookupError::Configuration(format!("{} is not set", API_KEY_VAR))
        })?;
        let mut config = Self::new(api_key)?;

        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(raw) = env::var(TIMEOUT_VAR) {
            let secs: u64 = raw.parse().map_err(|_| {
                LookupError::Configuration(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    TIMEOUT_VAR, raw
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the base endpoint, e.g. to point a test at a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
