//! Plivo client implementation.

use crate::{
    address::Addresses,
    config::Config,
    constants::API_VERSION,
    error::PlivoError,
};
use reqwest::{Client, Response, Url, multipart::Form};
use serde::de::DeserializeOwned;
use tracing::{error, trace};

/// Plivo REST API client.
///
/// The client holds the account credentials and dispatches authenticated
/// requests. It is cheap to clone and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct PlivoClient {
    client: Client,
    config: Config,
}

impl PlivoClient {
    /// Creates a new client from explicit credentials.
    pub fn new(
        auth_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, PlivoError> {
        Ok(Self::with_config(Config::new(auth_id, auth_token)?))
    }

    /// Creates a new client from the environment.
    ///
    /// See [`Config::from_env`].
    pub fn from_env() -> Result<Self, PlivoError> {
        Ok(Self::with_config(Config::from_env()?))
    }

    /// Creates a new client from a [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self { client: Client::new(), config }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a handle to the address verification resources.
    pub fn addresses(&self) -> Addresses<'_> {
        Addresses::new(self)
    }

    /// Builds the URL for a resource under the account, with the trailing
    /// slash the API requires.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> Url {
        let mut url = self.config.api_url.clone();
        {
            let mut path = url.path_segments_mut().expect("API URL is a valid base");
            path.pop_if_empty();
            path.push(API_VERSION);
            path.push("Account");
            path.push(&self.config.auth_id);
            path.extend(segments);
            // Trailing slash.
            path.push("");
        }
        url
    }

    /// Performs a GET request and decodes the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
    ) -> Result<T, PlivoError> {
        trace!(%url, "Sending GET request.");
        let response = self
            .client
            .get(url)
            .query(query)
            .basic_auth(&self.config.auth_id, Some(&self.config.auth_token))
            .timeout(self.config.timeout)
            .send()
            .await?;
        decode(response).await
    }

    /// Performs a POST request with a multipart form and decodes the JSON
    /// response.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        url: Url,
        form: Form,
    ) -> Result<T, PlivoError> {
        trace!(%url, "Sending POST request.");
        let response = self
            .client
            .post(url)
            .multipart(form)
            .basic_auth(&self.config.auth_id, Some(&self.config.auth_token))
            .timeout(self.config.timeout)
            .send()
            .await?;
        decode(response).await
    }

    /// Performs a DELETE request, discarding the response body.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), PlivoError> {
        trace!(%url, "Sending DELETE request.");
        let response = self
            .client
            .delete(url)
            .basic_auth(&self.config.auth_id, Some(&self.config.auth_token))
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Plivo API request failed.");
            Err(PlivoError::from_response(status, body))
        }
    }
}

/// Decodes a JSON response, mapping non-success statuses to
/// [`PlivoError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PlivoError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        error!(%status, "Plivo API request failed.");
        Err(PlivoError::from_response(status, body))
    }
}
