//! A single API method invocation and its execution pipeline.
//!
//! # Design
//! A `Call` is plain data (method name and parameters) plus the result type
//! `R` whose `Deserialize` impl decodes the payload. It can be run two ways:
//! - `execute` posts it through the client's transport and decodes the reply;
//! - `to_request` / [`parse_response`] split the same pipeline so the caller
//!   performs the I/O, the way a host-driven client would.
//!
//! `execute` takes `self`, so a call runs at most once, and it makes exactly
//! one transport request.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, FORM_CONTENT_TYPE};
use crate::transport::Transport;

/// An API method invocation producing `R` on success.
#[must_use = "a call does nothing until `execute` is invoked"]
pub struct Call<'a, T, R> {
    client: &'a ApiClient<T>,
    method: String,
    params: Vec<(String, String)>,
    _result: PhantomData<fn() -> R>,
}

impl<'a, T, R> Call<'a, T, R> {
    pub(crate) fn new(
        client: &'a ApiClient<T>,
        method: impl Into<String>,
        params: Vec<(String, String)>,
    ) -> Self {
        Self {
            client,
            method: method.into(),
            params,
            _result: PhantomData,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Set a parameter, replacing an earlier value for the same key.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
        self
    }

    /// Build the HTTP request for this call without sending it.
    ///
    /// The body holds the method parameters followed by `v` and, when
    /// configured, `lang`.
    pub fn to_request(&self) -> Result<HttpRequest, ApiError> {
        let config = self.client.config();

        let mut form: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        form.push(("v", config.api_version.as_str()));
        if let Some(lang) = config.lang.as_deref() {
            form.push(("lang", lang));
        }

        let mut headers = vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())];
        headers.extend(config.default_headers.iter().cloned());

        Ok(HttpRequest {
            url: config.method_url(&self.method),
            headers,
            body: serde_urlencoded::to_string(&form)?,
        })
    }
}

impl<T: Transport, R: DeserializeOwned> Call<'_, T, R> {
    /// Send the call and decode the result.
    pub fn execute(self) -> Result<R, ApiError> {
        let request = self.to_request()?;
        tracing::debug!(method = %self.method, url = %request.url, "dispatching API call");
        let response = self
            .client
            .transport()
            .post(&request.url, &request.body, &request.headers)?;
        parse_response(&self.method, &response)
    }
}

/// Classify `response` and decode the payload of `method` into `R`.
pub fn parse_response<R: DeserializeOwned>(
    method: &str,
    response: &HttpResponse,
) -> Result<R, ApiError> {
    let payload = Envelope::parse(response)?.into_payload()?;
    let decoded = serde_json::from_value(payload).map_err(|source| ApiError::Decode {
        method: method.to_string(),
        source,
    })?;
    tracing::debug!(method, "decoded API response");
    Ok(decoded)
}
