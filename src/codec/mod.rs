//! Scalar codec module
//!
//! Value types for the loosely formatted scalars the marketplace API emits.
//!
//! # Overview
//!
//! - `Address` - 20-byte account identifier, lowercase-normalized, with a null sentinel
//! - `HexBytes` - arbitrary `0x`-prefixed byte strings
//! - `DecimalNumber` - verbatim decimal text with a truncating big-integer accessor
//! - `FlexibleTimestamp` - zone-less timestamp accepting two layouts
//! - `FlexValue` - tagged union for fields whose JSON type varies between records
//!
//! Every type is a pure value transform: `parse` / `Display` for text and
//! `Serialize` / `Deserialize` for JSON.

mod address;
mod flex;
mod hex_bytes;
mod number;
mod timestamp;

pub use address::{Address, NULL_ADDRESS};
pub use flex::FlexValue;
pub use hex_bytes::HexBytes;
pub use number::DecimalNumber;
pub use timestamp::{FlexibleTimestamp, FRACTIONAL_LAYOUT, WHOLE_SECONDS_LAYOUT};

use thiserror::Error;

/// Failure to decode one scalar value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not `0x` followed by 40 hex characters (and not a null shorthand)
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Odd-length hex or a non-hex character
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Integral part is not a base-10 or `0x` integer literal
    #[error("Invalid numeric literal: {0}")]
    InvalidNumericLiteral(String),

    /// Matches neither timestamp layout
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
