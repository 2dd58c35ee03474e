// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # opensea-feed
//!
//! Typed client for the OpenSea marketplace REST API with exhaustive,
//! cancellable pagination.
//!
//! ## Features
//!
//! - **Scalar codecs**: addresses, hex blobs, big decimals and loose timestamps
//! - **Envelope decoding**: one rule for success bodies and `{success, msg}` errors
//! - **Pagination**: cursor-follow and offset-increment walks that keep partial results
//! - **Transport seam**: reqwest by default, anything implementing [`http::Transport`] in tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opensea_feed::api::{EventParams, OpenseaClient};
//! use opensea_feed::models::EventType;
//!
//! #[tokio::main]
//! async fn main() -> opensea_feed::Result<()> {
//!     let client = OpenseaClient::new("your-api-key")?;
//!
//!     let params = EventParams::new()
//!         .asset_contract_address("0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d")
//!         .event_type(EventType::Successful);
//!
//!     // Partial results survive errors: Err carries the records gathered so far
//!     let events = client.retrieve_events(&params).await?;
//!     println!("{} sales", events.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        OpenseaClient                         │
//! │  retrieve_events  get_orders  get_active_listings  ...       │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────┬──────────────┬───┴──────────┬───────────┬────────┐
//! │   Auth    │  Transport   │  Paginate    │  Decode   │ Models │
//! ├───────────┼──────────────┼──────────────┼───────────┼────────┤
//! │ X-API-KEY │ reqwest      │ Cursor       │ Envelope  │ Codec  │
//! │           │ Proxy relay  │ Offset       │ Errors    │ Serde  │
//! └───────────┴──────────────┴──────────────┴───────────┴────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Scalar codecs for wire values
pub mod codec;

/// API key authentication
pub mod auth;

/// Transport seam and reqwest implementation
pub mod http;

/// Response envelope decoding
pub mod decode;

/// Pagination strategies and the page walk
pub mod pagination;

/// Record models
pub mod models;

/// Endpoint client
pub mod api;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{ClientSettings, EventParams, ListingsParams, OpenseaClient, OrderParams};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{Interrupted, Retrieval};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
