#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Shared HTTP plumbing for the openai-wrapper client
//!
//! Everything that is about *getting bytes to and from the service* lives here:
//! endpoint/auth configuration, JSON request execution, API error parsing and
//! the timestamp type used by reply payloads. The domain crate only ever sees
//! raw `serde_json::Value` replies or a [`TransportError`].

pub mod error;
pub mod request_builder;
pub mod timestamp;

pub use error::TransportError;
pub use request_builder::{AuthMethod, Endpoint, HttpMethod, RequestBuilder, RequestConfig};
pub use timestamp::Timestamp;
