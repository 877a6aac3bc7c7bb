//! The pluggable HTTP capability the client executes calls through.
//!
//! The core never opens sockets. Anything that can POST a form body and hand
//! back status, headers and body text can drive an [`ApiClient`](crate::ApiClient):
//! a real HTTP library, a test double, a recorded fixture.

use std::sync::Arc;

use crate::error::TransportError;
use crate::http::HttpResponse;

/// Performs a single blocking HTTP POST.
///
/// Implementations must return non-2xx responses as `Ok` data; status
/// interpretation belongs to the envelope parser. `Err` is reserved for
/// exchanges that did not complete.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        (**self).post(url, body, headers)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        (**self).post(url, body, headers)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        (**self).post(url, body, headers)
    }
}
