//! Typed client core for the social-network "likes" API.
//!
//! # Overview
//! Builds method calls, sends them through a caller-supplied [`Transport`],
//! and turns the raw reply into either a typed result or a classified
//! [`ApiError`].
//!
//! ```ignore
//! let client = ApiClient::new(transport, ClientConfig::default());
//! let added = client.likes().add(LikeType::Post, 12345).execute()?;
//! println!("{} likes", added.likes);
//! ```
//!
//! # Design
//! - `ApiClient` is stateless apart from its transport and config.
//! - Every call is a form-encoded POST to `{base_url}/method/{name}`.
//! - A non-200 status is always a [`ClientError`], whatever the body holds.
//! - Result types decode through serde; a shape mismatch is
//!   [`ApiError::Decode`], never a default value.
//! - Calls can also be split into `to_request` / [`parse_response`] so the
//!   caller performs the I/O itself.

pub mod call;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod likes;
pub mod transport;
pub mod types;

pub use call::{parse_response, Call};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{ApiError, ClientError, TransportError};
pub use http::{HttpRequest, HttpResponse};
pub use likes::Likes;
pub use transport::Transport;
pub use types::{
    AddResponse, BoolInt, DeleteResponse, GetListResponse, IsLikedResponse, LikeType, LikesFilter,
};
