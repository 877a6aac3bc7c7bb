//! Entry point of the API client.
//!
//! # Design
//! `ApiClient` owns a [`Transport`](crate::transport::Transport) and a
//! [`ClientConfig`] and nothing else; it carries no mutable state between
//! calls, so one client can be shared freely. Method groups such as
//! [`Likes`] borrow it and hand out [`Call`] values.

use crate::call::Call;
use crate::config::ClientConfig;
use crate::likes::Likes;

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T> ApiClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The `likes.*` method group.
    pub fn likes(&self) -> Likes<'_, T> {
        Likes::new(self)
    }

    /// Build a call to an arbitrary method, decoding its result as `R`.
    pub fn call<R>(&self, method: &str, params: Vec<(String, String)>) -> Call<'_, T, R> {
        Call::new(self, method, params)
    }
}
