//! Classification of raw responses into success payloads and failures.
//!
//! # Design
//! The HTTP status decides first: anything other than 200 is a `Failure`,
//! whatever the body says. A 200 body must be JSON. A top-level `error` key,
//! whatever its value, rules out success: a well-formed
//! `{"error_code": <int>, "error_msg": <string>}` object is an `ApiFailure`,
//! anything else is [`ApiError::MalformedError`]. Without an `error` key the
//! payload is the value under `response` when the server wraps it, or the
//! whole document.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ClientError};
use crate::http::HttpResponse;

/// Status code the API answers successful calls with.
pub const SUCCESS_STATUS: u16 = 200;

#[derive(Deserialize)]
struct ErrorObject {
    error_code: i64,
    error_msg: String,
}

/// The classified outcome of one HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(Value),
    /// Non-200 status. `body` is the raw response text, unmodified.
    Failure { status: u16, body: String },
    /// 200 status with an `error` object in the body.
    ApiFailure { error_code: i64, error_msg: String },
}

impl Envelope {
    /// Classify `raw`. Fails when a 200 body is not valid JSON or carries a
    /// malformed `error` entry.
    pub fn parse(raw: &HttpResponse) -> Result<Envelope, ApiError> {
        if raw.status != SUCCESS_STATUS {
            return Ok(Envelope::Failure {
                status: raw.status,
                body: raw.body.clone(),
            });
        }

        let mut document: Value = serde_json::from_str(&raw.body).map_err(ApiError::Parse)?;

        if let Some(error) = document.as_object_mut().and_then(|obj| obj.remove("error")) {
            let error: ErrorObject =
                serde_json::from_value(error).map_err(|source| ApiError::MalformedError {
                    body: raw.body.clone(),
                    source,
                })?;
            return Ok(Envelope::ApiFailure {
                error_code: error.error_code,
                error_msg: error.error_msg,
            });
        }

        let wrapped = document.as_object_mut().and_then(|obj| obj.remove("response"));
        Ok(Envelope::Success(wrapped.unwrap_or(document)))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// Turn the envelope into the payload or the matching error.
    pub fn into_payload(self) -> Result<Value, ApiError> {
        match self {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Failure { status, body } => {
                tracing::warn!(status, "API call failed with unexpected status");
                Err(ClientError { status, body }.into())
            }
            Envelope::ApiFailure {
                error_code,
                error_msg,
            } => {
                tracing::warn!(error_code, %error_msg, "API call returned an error object");
                Err(ApiError::Api {
                    code: error_code,
                    message: error_msg,
                })
            }
        }
    }
}
