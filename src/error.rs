//! Plivo client error types.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the Plivo client.
#[derive(Debug, Error)]
pub enum PlivoError {
    /// A request parameter failed client-side validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The file extension is not supported for document uploads.
    #[error("{extension} is not yet supported for upload")]
    UnsupportedFileType {
        /// The offending file extension.
        extension: String,
    },
    /// The API rejected the request.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error message from the response body.
        message: String,
        /// The API request identifier, if the error body carried one.
        api_id: Option<String>,
    },
    /// A credential was missing from the environment.
    #[error("missing credential: {0} is not set")]
    MissingCredentials(&'static str),
    /// An error occurred talking to the API.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// An error occurred reading a file to upload.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlivoError {
    /// Constructs a [`PlivoError::InvalidRequest`] error.
    pub(crate) fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Constructs a [`PlivoError::Api`] error from an error response body.
    ///
    /// The body is decoded as the standard Plivo error envelope when possible,
    /// falling back to the raw body text otherwise.
    pub(crate) fn from_response(status: StatusCode, body: String) -> Self {
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) => Self::Api { status: status.as_u16(), message: err.error, api_id: err.api_id },
            Err(_) => Self::Api { status: status.as_u16(), message: body, api_id: None },
        }
    }
}

/// The error envelope returned by the API on non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    /// Error message.
    pub(crate) error: String,
    /// The API request identifier.
    pub(crate) api_id: Option<String>,
}
