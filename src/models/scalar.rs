//! Scalar attribute values
//!
//! A [`Scalar`] is the only thing a [`Structure`](super::Structure) attribute can
//! hold: a string, an integer, a float, a boolean, or an explicit null.
//!
//! ## Equality
//!
//! Two comparisons are provided and kept apart on purpose:
//!
//! - **strict** ([`Scalar::strict_eq`], also `==`): same variant and same payload.
//!   `Int(12)` is not strictly equal to `String("12")` nor to `Float(12.0)`.
//! - **loose** ([`Scalar::loose_eq`]): compares through an explicit coercion table.
//!
//! | left \ right | Null | Bool | Int / Float | String |
//! |---|---|---|---|---|
//! | Null | true | `b == truthy(null)` | `!truthy(n)` | `s == ""` |
//! | Bool | truthiness | `a == b` | `b == truthy(n)` | `b == truthy(s)` |
//! | Int / Float | `!truthy(n)` | truthiness | numeric | numeric if `s` is numeric, else text |
//! | String | `s == ""` | truthiness | numeric if `s` is numeric, else text | numeric if both numeric, else bytes |
//!
//! ## Truthiness
//!
//! Falsy values are `Null`, `false`, `0`, `0.0`, `""` and `"0"`. Everything else,
//! including `"0.0"`, `" "` and NaN, is truthy.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Explicit absence of a value
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// UTF-8 text value
    String(String),
}

// Leading and trailing whitespace is tolerated around numeric strings.
static NUMERIC_STRING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .unwrap()
});

/// Parsed form of a number or numeric string, used by loose comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }

    fn loose_eq(self, other: Numeric) -> bool {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

/// Parse `text` as a number if it is a numeric string.
fn parse_numeric(text: &str) -> Option<Numeric> {
    if !NUMERIC_STRING_REGEX.is_match(text) {
        return None;
    }
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Numeric::Int(i));
    }
    trimmed.parse::<f64>().ok().map(Numeric::Float)
}

impl Scalar {
    /// Get the type name used in error messages and diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Int(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::String(_) => "string",
        }
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Truthiness of the value (see the module docs for the table).
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::Int(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::String(s) => !(s.is_empty() || s == "0"),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value of an integer or float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_numeric(&self) -> Option<Numeric> {
        match self {
            Scalar::Int(i) => Some(Numeric::Int(*i)),
            Scalar::Float(f) => Some(Numeric::Float(*f)),
            _ => None,
        }
    }

    /// Strict equality: identical variant and payload.
    pub fn strict_eq(&self, other: &Scalar) -> bool {
        self == other
    }

    /// Loose equality through the coercion table in the module docs.
    pub fn loose_eq(&self, other: &Scalar) -> bool {
        use Scalar::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(b), x) | (x, Bool(b)) => *b == x.is_truthy(),
            (Null, String(s)) | (String(s), Null) => s.is_empty(),
            (Null, n) | (n, Null) => !n.is_truthy(),
            (String(a), String(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x.loose_eq(y),
                _ => a == b,
            },
            (String(s), n) | (n, String(s)) => match (n.as_numeric(), parse_numeric(s)) {
                (Some(x), Some(y)) => x.loose_eq(y),
                _ => n.to_string() == *s,
            },
            (a, b) => match (a.as_numeric(), b.as_numeric()) {
                (Some(x), Some(y)) => x.loose_eq(y),
                _ => false,
            },
        }
    }
}

/// Text form of the value: what a scalar reads as when treated as a string.
///
/// Null and `false` render as the empty string, `true` as `"1"`, integral
/// floats without a fractional part.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(true) => write!(f, "1"),
            Scalar::Bool(false) => Ok(()),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) if x.is_nan() => write!(f, "NAN"),
            Scalar::Float(x) if x.is_infinite() => {
                write!(f, "{}", if *x > 0.0 { "INF" } else { "-INF" })
            }
            Scalar::Float(x) if x.fract() == 0.0 && x.abs() < 1e15 => write!(f, "{}", *x as i64),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value as f64)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<&Scalar> for Scalar {
    fn from(value: &Scalar) -> Self {
        value.clone()
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}
