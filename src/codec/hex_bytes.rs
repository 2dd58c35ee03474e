//! Hex-encoded byte strings

use super::DecodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Hex-encoded bytes (arbitrary length).
///
/// Text form is `0x` + even-length hex. Empty text and a bare `0x` are the
/// empty byte string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    /// Parse `0x`-prefixed hex
    pub fn parse(s: &str) -> Result<Self, DecodeError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() {
            return Ok(Self(Vec::new()));
        }
        hex::decode(digits)
            .map(Self)
            .map_err(|_| DecodeError::InvalidHex(s.to_string()))
    }

    /// Fixed 32-byte view of the leading bytes.
    ///
    /// Shorter buffers are zero-padded on the right, longer ones truncated.
    /// Lossy: never use it to re-encode.
    pub fn bytes32(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let n = self.0.len().min(32);
        out[..n].copy_from_slice(&self.0[..n]);
        out
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check for the empty byte string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl FromStr for HexBytes {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}
