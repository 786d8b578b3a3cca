//! Client configuration.

use crate::{
    constants::{DEFAULT_REQUEST_TIMEOUT, PLIVO_API_URL},
    error::PlivoError,
};
use std::time::Duration;
use url::Url;

/// Environment variable holding the account auth ID.
const AUTH_ID_ENV: &str = "PLIVO_AUTH_ID";

/// Environment variable holding the account auth token.
const AUTH_TOKEN_ENV: &str = "PLIVO_AUTH_TOKEN";

/// Plivo client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The account auth ID, used for basic auth and as a URL path segment.
    pub auth_id: String,
    /// The account auth token.
    pub auth_token: String,
    /// The API base URL.
    pub api_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration from explicit credentials.
    ///
    /// Both credentials must be non-empty.
    pub fn new(
        auth_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, PlivoError> {
        let auth_id = auth_id.into();
        let auth_token = auth_token.into();

        if auth_id.is_empty() {
            return Err(PlivoError::invalid_request("auth_id must not be empty"));
        }
        if auth_token.is_empty() {
            return Err(PlivoError::invalid_request("auth_token must not be empty"));
        }

        Ok(Self {
            auth_id,
            auth_token,
            api_url: Url::parse(PLIVO_API_URL).expect("default API URL is valid"),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Creates a configuration from the `PLIVO_AUTH_ID` and `PLIVO_AUTH_TOKEN`
    /// environment variables.
    pub fn from_env() -> Result<Self, PlivoError> {
        let auth_id =
            std::env::var(AUTH_ID_ENV).map_err(|_| PlivoError::MissingCredentials(AUTH_ID_ENV))?;
        let auth_token = std::env::var(AUTH_TOKEN_ENV)
            .map_err(|_| PlivoError::MissingCredentials(AUTH_TOKEN_ENV))?;
        Self::new(auth_id, auth_token)
    }

    /// Overrides the API base URL.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
