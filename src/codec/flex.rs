//! Fields whose JSON type varies from record to record

use super::DecimalNumber;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A scalar that the API sends as a string, a number, a bool or null
/// depending on the record.
///
/// Objects and arrays are rejected, so an unexpected shape is a decode
/// error instead of silently passing through.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum FlexValue {
    /// JSON null or an absent field
    #[default]
    Null,
    /// JSON bool
    Bool(bool),
    /// JSON integer that fits in i64
    Integer(i64),
    /// Any other JSON number
    Float(f64),
    /// JSON string
    Text(String),
}

impl FlexValue {
    /// Check for null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Integer value, parsing text when needed
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Float value, widening integers and parsing text
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Borrow text content
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content as a verbatim decimal
    pub fn as_decimal(&self) -> Option<DecimalNumber> {
        match self {
            Self::Integer(i) => Some(DecimalNumber::new(i.to_string())),
            Self::Float(f) => Some(DecimalNumber::new(f.to_string())),
            Self::Text(s) => Some(DecimalNumber::new(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for FlexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

struct FlexValueVisitor;

impl<'de> Visitor<'de> for FlexValueVisitor {
    type Value = FlexValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, a number, a bool or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(FlexValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FlexValue::Integer(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).map_or(FlexValue::Float(v as f64), FlexValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FlexValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FlexValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FlexValue::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FlexValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FlexValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    // Numbers that do not fit a machine integer arrive as a single-entry map
    // holding their text; any other object is rejected here.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let number = serde_json::Number::deserialize(de::value::MapAccessDeserializer::new(map))?;
        if let Some(i) = number.as_i64() {
            return Ok(FlexValue::Integer(i));
        }
        number
            .as_f64()
            .map(FlexValue::Float)
            .ok_or_else(|| de::Error::custom(format!("number out of range: {number}")))
    }
}

impl<'de> Deserialize<'de> for FlexValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlexValueVisitor)
    }
}
