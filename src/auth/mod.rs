//! Authentication module
//!
//! Supports: static API key in the `X-API-KEY` header.
//!
//! The marketplace API has no token exchange; the same key rides on
//! every request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, DEFAULT_API_KEY_HEADER};

#[cfg(test)]
mod tests;
