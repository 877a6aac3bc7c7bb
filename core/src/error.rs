//! Error types for the likes API client.
//!
//! # Design
//! Failures are kept apart by origin so callers can decide what to do with
//! each: `Client` means the server answered with a non-200 status, `Api`
//! means it answered 200 with an error object, `Decode` and `Parse` mean a
//! 200 answer did not have the expected shape, and `Transport` means no
//! answer arrived at all. Only `Transport` is a candidate for a retry, and
//! the core never retries on its own.

use thiserror::Error;

/// A non-200 response from the API server.
///
/// The display format is fixed; downstream tooling matches on it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Internal API server error. Wrong status code: {status}. Content: {body}")]
pub struct ClientError {
    pub status: u16,
    pub body: String,
}

/// The HTTP exchange could not be completed (connection refused, reset,
/// timeout, ...). Produced by [`Transport`](crate::transport::Transport)
/// implementations.
#[derive(Debug, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by [`Call::execute`](crate::call::Call::execute) and
/// [`parse_response`](crate::call::parse_response).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a status other than 200.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The server returned 200 with an `error` object in the body.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The payload parsed as JSON but did not match the method's result shape.
    #[error("malformed `{method}` payload: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// A 200 body had an `error` entry that is not an object with an integer
    /// `error_code` and a string `error_msg`. `body` is the raw response text.
    #[error("malformed error object: {source}")]
    MalformedError {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A 200 response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Call parameters could not be form-encoded.
    #[error("form encoding failed: {0}")]
    Serialization(#[from] serde_urlencoded::ser::Error),
}

impl ApiError {
    /// HTTP status of a `Client` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Client(err) => Some(err.status),
            _ => None,
        }
    }
}
