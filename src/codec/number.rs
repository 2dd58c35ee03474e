//! Decimal numbers carried as text

use super::DecodeError;
use num_bigint::BigInt;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A decimal number kept verbatim as text.
///
/// Prices and fees can exceed any machine integer, so the text is stored
/// untouched and only converted on demand. Decoding never fails on a
/// scalar; JSON numbers are kept digit for digit as they appear in the
/// document, `null` becomes the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DecimalNumber(String);

impl DecimalNumber {
    /// Wrap text without validation
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The verbatim text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check for empty text
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer value with any fractional part discarded (no rounding).
    ///
    /// Base 10 text may carry a fraction and an exponent (`1.5e18`); `0x`
    /// hex is integral only. Either may be signed.
    pub fn to_bigint(&self) -> Result<BigInt, DecodeError> {
        parse_integral(&self.0).ok_or_else(|| DecodeError::InvalidNumericLiteral(self.0.clone()))
    }
}

/// Widest integral part an exponent may expand to
const MAX_EXPANDED_DIGITS: usize = 4096;

/// Parse `[+-]digits[.digits][e[+-]digits]` or `[+-]0xhex`, truncating
fn parse_integral(s: &str) -> Option<BigInt> {
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = match unsigned.strip_prefix("0x") {
        Some(hex) => parse_digits(hex.split('.').next().unwrap_or_default(), 16)?,
        None => parse_scientific(unsigned)?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_scientific(s: &str) -> Option<BigInt> {
    let (mantissa, exponent) = match s.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (s, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if exponent == 0 {
        return parse_digits(whole, 10);
    }
    parse_digits(whole, 10)?;
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{whole}{fraction}");
    let point = i64::try_from(whole.len()).ok()?.checked_add(exponent)?;
    let integral = match usize::try_from(point) {
        Err(_) | Ok(0) => "0".to_string(),
        Ok(point) if point > MAX_EXPANDED_DIGITS => return None,
        Ok(point) if point >= digits.len() => format!("{digits:0<point$}"),
        Ok(point) => digits[..point].to_string(),
    };
    parse_digits(&integral, 10)
}

fn parse_digits(digits: &str, radix: u32) -> Option<BigInt> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

impl From<&str> for DecimalNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DecimalNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DecimalNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

struct DecimalNumberVisitor;

impl<'de> Visitor<'de> for DecimalNumberVisitor {
    type Value = DecimalNumber;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal string, a number or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(DecimalNumber::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(DecimalNumber(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DecimalNumber(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DecimalNumber(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(DecimalNumber(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DecimalNumber::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DecimalNumber::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    // serde_json hands over numbers beyond 64 bits, and every non-integer,
    // as a single-entry map carrying the literal text.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let number = serde_json::Number::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(DecimalNumber(number.to_string()))
    }
}

impl<'de> Deserialize<'de> for DecimalNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalNumberVisitor)
    }
}
