//! Account and contract addresses

use super::DecodeError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Canonical text of the all-zero address
pub const NULL_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Shorthand the API sometimes sends for the null address
const NULL_SHORTHAND: &str = "0x0";

/// `0x` followed by exactly 40 hex digits, either case
static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap());

/// A 20-byte account or contract identifier.
///
/// Always held in canonical form: `0x` + 40 lowercase hex characters.
/// The default value is the null address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    /// The all-zero address
    pub fn null() -> Self {
        Self(NULL_ADDRESS.to_string())
    }

    /// Parse an address.
    ///
    /// Empty text and `0x0` both yield the null address. Anything else must
    /// match `0x` + 40 hex digits; the result is lowercased.
    pub fn parse(s: &str) -> Result<Self, DecodeError> {
        if s.is_empty() || s == NULL_SHORTHAND {
            return Ok(Self::null());
        }
        if !ADDRESS_REGEX.is_match(s) {
            return Err(DecodeError::InvalidAddress(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Check whether this is the null address
    pub fn is_null(&self) -> bool {
        self.0 == NULL_ADDRESS
    }

    /// Canonical text form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw 20 bytes
    pub fn to_bytes(&self) -> [u8; 20] {
        let mut out = [0u8; 20];
        // Canonical form is validated on construction.
        if let Ok(bytes) = hex::decode(&self.0[2..]) {
            out.copy_from_slice(&bytes);
        }
        out
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // JSON null means "no address" upstream, not a missing value.
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::null()),
            Some(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}
