//! HTTP exchange types for the likes API.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and classifies `HttpResponse` values; moving bytes over the wire is
//! the job of a [`Transport`](crate::transport::Transport) supplied by the
//! caller. Every API method is invoked with a form-encoded POST, so the
//! request carries no method field.

/// Content type of every request body the core produces.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A POST request described as plain data.
///
/// Built by [`Call::to_request`](crate::call::Call::to_request).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A raw response as returned by the transport.
///
/// Consumed once by [`Envelope::parse`](crate::envelope::Envelope::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Case-insensitive header lookup. Returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
