//! Compatibility layer reproducing the web front-end's original helpers.
//!
//! The front-end worked on dynamically typed values and never raised: bad
//! input came back as `""`, `"CRNAN"`, `null`, `NaN` or a string of digits.
//! These functions return exactly those values so call sites can be migrated
//! one at a time, and [`LegacyDecoded::into_result`] maps each degenerate
//! value onto a distinct [`IdError`] for code that has moved to the strict
//! [`IdCodec`](crate::IdCodec).
//!
//! Only the standard `CR` / 1000 / 3 scheme existed in the front-end, so
//! nothing here is configurable.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{DEFAULT_MIN_WIDTH, DEFAULT_OFFSET, DEFAULT_PREFIX};
use crate::paths::ResourceKind;
use crate::radix;
use crate::IdError;

/// A dynamically typed input, as the front-end received it.
///
/// Deserializes from any JSON value: `null`, booleans, numbers and strings
/// map to their variants, arrays and objects to [`LegacyValue::Other`].
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyValue {
    /// `null` or `undefined`.
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Arrays and objects. Treated as non-numeric text.
    Other,
}

impl LegacyValue {
    /// Truthiness as the front-end evaluated it.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            LegacyValue::Null => false,
            LegacyValue::Bool(b) => *b,
            LegacyValue::Number(n) => *n != 0.0 && !n.is_nan(),
            LegacyValue::Text(s) => !s.is_empty(),
            LegacyValue::Other => true,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            LegacyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer coercion through the value's string form.
    fn parse_int(&self) -> f64 {
        match self {
            LegacyValue::Number(n) => radix::parse_int_number(*n),
            LegacyValue::Text(s) => radix::parse_int(s, 10),
            // "null", "true", "false" and "[object Object]" carry no digits.
            LegacyValue::Null | LegacyValue::Bool(_) | LegacyValue::Other => f64::NAN,
        }
    }
}

impl From<&str> for LegacyValue {
    fn from(s: &str) -> Self {
        LegacyValue::Text(s.to_string())
    }
}

impl From<String> for LegacyValue {
    fn from(s: String) -> Self {
        LegacyValue::Text(s)
    }
}

impl From<f64> for LegacyValue {
    fn from(n: f64) -> Self {
        LegacyValue::Number(n)
    }
}

impl From<u64> for LegacyValue {
    fn from(n: u64) -> Self {
        LegacyValue::Number(n as f64)
    }
}

impl<T: Into<LegacyValue>> From<Option<T>> for LegacyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LegacyValue::Null, Into::into)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PresentValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for LegacyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<PresentValue>::deserialize(deserializer)? {
            None => LegacyValue::Null,
            Some(PresentValue::Bool(b)) => LegacyValue::Bool(b),
            Some(PresentValue::Number(n)) => LegacyValue::Number(n),
            Some(PresentValue::Text(s)) => LegacyValue::Text(s),
            Some(PresentValue::Other(_)) => LegacyValue::Other,
        })
    }
}

/// 2^64, the first double that no longer fits in a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// What the front-end decoder returned.
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyDecoded {
    /// Input was absent, empty or not a string.
    Null,
    /// A parsed number, possibly `NaN`, negative or fractional.
    Number(f64),
    /// Result of the digit-stripping recovery path.
    Digits(String),
}

impl LegacyDecoded {
    /// Returns true for `NaN`.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, LegacyDecoded::Number(n) if n.is_nan())
    }

    /// Converts to the strict result, giving each degenerate value its own error.
    pub fn into_result(self) -> Result<u64, IdError> {
        match self {
            LegacyDecoded::Null => Err(IdError::NotAString),
            LegacyDecoded::Number(n) if n.is_nan() => Err(IdError::UnparsableBody {
                body: "NaN".to_string(),
            }),
            LegacyDecoded::Number(n) if n < 0.0 || n.fract() != 0.0 || n >= U64_LIMIT => {
                Err(IdError::OutOfRange {
                    input: format_number(n),
                })
            }
            LegacyDecoded::Number(n) => Ok(n as u64),
            LegacyDecoded::Digits(digits) => Err(IdError::LegacyDigitFallback { digits }),
        }
    }
}

impl fmt::Display for LegacyDecoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyDecoded::Null => f.write_str("null"),
            LegacyDecoded::Number(n) => f.write_str(&format_number(*n)),
            LegacyDecoded::Digits(digits) => f.write_str(digits),
        }
    }
}

/// Formats a number the way the front-end printed it.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{}", n as i128)
    } else {
        format!("{n}")
    }
}

/// Serializes as `null`, a number, or a string. Integral numbers are written
/// without a fraction (`5`, not `5.0`). Non-finite numbers become the strings
/// `"NaN"`, `"Infinity"` and `"-Infinity"` so they survive a round trip,
/// where the front-end's `JSON.stringify` would have written `null`.
impl Serialize for LegacyDecoded {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LegacyDecoded::Null => serializer.serialize_none(),
            LegacyDecoded::Number(n)
                if n.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(n) =>
            {
                serializer.serialize_i64(*n as i64)
            }
            LegacyDecoded::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            LegacyDecoded::Number(n) => serializer.serialize_str(&format_number(*n)),
            LegacyDecoded::Digits(digits) => serializer.serialize_str(digits),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDecoded {
    Number(f64),
    Text(String),
}

/// Reads persisted decoder output back. Strings naming a non-finite number
/// become [`LegacyDecoded::Number`]; any other string is digit-fallback output.
impl<'de> Deserialize<'de> for LegacyDecoded {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<StoredDecoded>::deserialize(deserializer)? {
            None => LegacyDecoded::Null,
            Some(StoredDecoded::Number(n)) => LegacyDecoded::Number(n),
            Some(StoredDecoded::Text(s)) => match s.as_str() {
                "NaN" => LegacyDecoded::Number(f64::NAN),
                "Infinity" => LegacyDecoded::Number(f64::INFINITY),
                "-Infinity" => LegacyDecoded::Number(f64::NEG_INFINITY),
                _ => LegacyDecoded::Digits(s),
            },
        })
    }
}

/// Front-end `encodeId`.
///
/// Falsy input (`null`, `false`, `0`, `NaN`, `""`) yields `""`, so the real
/// identifier zero has no token here. Non-numeric input yields `"CRNAN"`.
#[must_use]
pub fn encode_id(value: &LegacyValue) -> String {
    if !value.is_truthy() {
        return String::new();
    }

    let shifted = value.parse_int() + DEFAULT_OFFSET as f64;
    let body = radix::pad_start(&radix::format_f64(shifted), DEFAULT_MIN_WIDTH);
    format!("{DEFAULT_PREFIX}{body}")
}

/// Front-end `decodeId`.
///
/// Prefixed tokens are parsed leniently in base 36 (either case, stopping at
/// the first non-digit); anything else is parsed as a decimal integer.
#[must_use]
pub fn decode_id(value: &LegacyValue) -> LegacyDecoded {
    let Some(token) = value.as_text().filter(|s| !s.is_empty()) else {
        return LegacyDecoded::Null;
    };

    match token.strip_prefix(DEFAULT_PREFIX) {
        Some(body) => LegacyDecoded::Number(radix::parse_int(body, 36) - DEFAULT_OFFSET as f64),
        None => LegacyDecoded::Number(radix::parse_int(token, 10)),
    }
}

/// Front-end `isEncodedId`: text matching `^CR[0-9A-Z]+$`.
#[must_use]
pub fn is_encoded_id(value: &LegacyValue) -> bool {
    value.as_text().is_some_and(crate::codec::is_encoded_id)
}

/// The decoder's catch-all recovery: drop every non-digit character.
#[must_use]
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Front-end `generateCourseDetailUrl`.
#[must_use]
pub fn generate_course_detail_url(value: &LegacyValue) -> String {
    generate_url(ResourceKind::Course, value)
}

/// Front-end `generateProductDetailUrl`.
#[must_use]
pub fn generate_product_detail_url(value: &LegacyValue) -> String {
    generate_url(ResourceKind::Product, value)
}

/// Front-end `generateInstructorProfileUrl`.
#[must_use]
pub fn generate_instructor_profile_url(value: &LegacyValue) -> String {
    generate_url(ResourceKind::Instructor, value)
}

fn generate_url(kind: ResourceKind, value: &LegacyValue) -> String {
    format!("{}/{}", kind.path_prefix(), encode_id(value))
}

/// Front-end `extractIdFromUrl`: decode the last `/`-separated segment.
#[must_use]
pub fn extract_id_from_url(url: &str) -> LegacyDecoded {
    let segment = url.rsplit('/').next().unwrap_or_default();
    decode_id(&LegacyValue::from(segment))
}

// =============================================================================
// Tests
// =============================================================================
