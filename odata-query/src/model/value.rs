//! Value enum for filter operands

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A typed operand on the right-hand side of a comparison.
///
/// Only [`Value::String`] is quoted when rendered into a filter expression.
/// Every other variant is written in its plain textual form.
///
/// Serialized adjacently tagged (`{"type": "Guid", "value": "..."}`) so the
/// variant, and with it the quoting, survives a round trip.
///
/// | Rust type | Variant | Rendered as |
/// |-----------|---------|-------------|
/// | `&str`, `String` | `String` | `'text'` |
/// | `bool` | `Bool` | `true` / `false` |
/// | `i32` | `Int` | `42` |
/// | `i64`, `u32` | `Long` | `42` |
/// | `i8`, `u8`, `i16`, `u16` | `Int` | `42` |
/// | `u64`, `usize` | `Decimal` | `42` |
/// | `f64`, `f32` | `Float` | `2.5`, `INF`, `-INF`, `NaN` |
/// | `Decimal` | `Decimal` | `19.99` |
/// | `Uuid` | `Guid` | `00000000-0000-0000-0000-000000000000` |
/// | `DateTime<Utc>` | `DateTime` | RFC 3339 |
/// | `Option::None` | `Null` | `null` |
///
/// # Example
///
/// ```
/// use odata_query::model::Value;
///
/// assert_eq!(Value::from("Contoso").to_odata(), "'Contoso'");
/// assert_eq!(Value::from(30).to_odata(), "30");
/// assert_eq!(Value::from(true).to_odata(), "true");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value. The only variant that is quoted.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this value is rendered with quotes.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
        }
    }

    /// Renders this value as a filter literal.
    ///
    /// Strings are wrapped in single quotes verbatim. Embedded quotes are
    /// not escaped.
    pub fn to_odata(&self) -> String {
        match self {
            Value::String(s) => quote(s),
            other => other.to_string(),
        }
    }
}

/// Wraps text in single quotes without escaping.
pub(crate) fn quote(text: impl fmt::Display) -> String {
    format!("'{}'", text)
}

/// Plain textual form, without quotes for any variant.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(n) if n.is_nan() => f.write_str("NaN"),
            Value::Float(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_negative() { "-INF" } else { "INF" })
            }
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => f.write_str(s),
            Value::Guid(g) => write!(f, "{}", g),
            Value::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(i32::from(v))
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Int(i32::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(i32::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Int(i32::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Long(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

// Wider than i64, so these go through Decimal to stay lossless.
impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Decimal(Decimal::from(v))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Decimal(Decimal::from(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
