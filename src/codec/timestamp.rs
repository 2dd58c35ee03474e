//! Zone-less timestamps in two layouts

use super::DecodeError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `YYYY-MM-DDTHH:MM:SS`
pub const WHOLE_SECONDS_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

/// `YYYY-MM-DDTHH:MM:SS.ffffff`
pub const FRACTIONAL_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Layout used on output: always six fractional digits
const OUTPUT_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A point in time with no timezone.
///
/// Anything after the first `+` is dropped before parsing, so an offset is
/// discarded rather than applied. Output always uses the fractional layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlexibleTimestamp(NaiveDateTime);

impl FlexibleTimestamp {
    /// Wrap a naive datetime
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Parse either layout.
    ///
    /// The fractional layout is chosen iff the text before any `+` holds a `.`.
    pub fn parse(s: &str) -> Result<Self, DecodeError> {
        let head = s.split('+').next().unwrap_or_default();
        let layout = if head.contains('.') {
            FRACTIONAL_LAYOUT
        } else {
            WHOLE_SECONDS_LAYOUT
        };
        NaiveDateTime::parse_from_str(head, layout)
            .map(Self)
            .map_err(|_| DecodeError::InvalidTimestamp(s.to_string()))
    }

    /// The wrapped naive datetime
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Interpret as UTC
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.and_utc()
    }

    /// Seconds since the Unix epoch, reading the value as UTC
    pub fn unix_seconds(&self) -> i64 {
        self.0.and_utc().timestamp()
    }
}

impl From<NaiveDateTime> for FlexibleTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for FlexibleTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(OUTPUT_LAYOUT))
    }
}

impl FromStr for FlexibleTimestamp {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FlexibleTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FlexibleTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
