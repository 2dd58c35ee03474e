//! HTTP transport module
//!
//! The core never talks to the network directly. It hands a
//! [`TransportRequest`] to a [`Transport`] and gets back the raw status and
//! body bytes; interpretation happens in [`crate::decode`].
//!
//! # Features
//!
//! - **Narrow seam**: one async `execute` call, easy to fake in tests
//! - **reqwest backend**: [`HttpTransport`] with timeout, user agent and default headers
//! - **Proxy relay**: optional forwarding proxy that receives the real target in a header
//!
//! No retries and no rate limiting: a failed request surfaces immediately.

mod client;
mod transport;

pub use client::{HttpClientConfig, HttpClientConfigBuilder, HttpTransport, PROXY_TARGET_HEADER};
pub use transport::{Transport, TransportRequest, TransportResponse};

#[cfg(test)]
mod tests;
