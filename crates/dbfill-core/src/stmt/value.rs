use crate::{Error, Result};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// A single cell read from a cursor or a scalar sent as a parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// The store's null sentinel
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Raw binary value
    Bytes(Vec<u8>),

    /// A globally unique identifier
    Uuid(Uuid),

    /// Calendar date without a time zone
    Date(NaiveDate),

    /// Time of day without a time zone
    Time(NaiveTime),

    /// Date and time without a time zone
    DateTime(NaiveDateTime),

    /// Date and time in UTC
    DateTimeUtc(DateTime<Utc>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the variant, used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Uuid(_) => "Uuid",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::DateTime(_) => "DateTime",
            Self::DateTimeUtc(_) => "DateTimeUtc",
        }
    }

    /// Returns the textual form of the value.
    ///
    /// Null has no textual form and binary values are not text, so both
    /// return `None`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null | Self::Bytes(_) => None,
            Self::String(v) => Some(v.clone()),
            _ => Some(self.to_string()),
        }
    }

    /// Parses `self` from its textual form as `T`.
    ///
    /// Used by identifier and structured targets, which accept whatever the
    /// store hands back as long as its text parses.
    pub fn parse_text<T>(
        self,
        to_type: &'static str,
        parse: impl FnOnce(&str) -> Result<T>,
    ) -> Result<T> {
        match self.to_text() {
            Some(text) => parse(&text),
            None => Err(Error::type_conversion(self, to_type)),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => v.fmt(f),
            Self::I8(v) => v.fmt(f),
            Self::I16(v) => v.fmt(f),
            Self::I32(v) => v.fmt(f),
            Self::I64(v) => v.fmt(f),
            Self::U8(v) => v.fmt(f),
            Self::U16(v) => v.fmt(f),
            Self::U32(v) => v.fmt(f),
            Self::U64(v) => v.fmt(f),
            Self::F32(v) => v.fmt(f),
            Self::F64(v) => v.fmt(f),
            Self::String(v) => f.write_str(v),
            Self::Bytes(v) => {
                for byte in v {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Uuid(v) => v.fmt(f),
            Self::Date(v) => v.fmt(f),
            Self::Time(v) => v.fmt(f),
            Self::DateTime(v) => v.fmt(f),
            Self::DateTimeUtc(v) => f.write_str(&v.to_rfc3339()),
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Null | Value::Bytes(_) => Err(Error::type_conversion(value, "String")),
            value => Ok(value.to_string()),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::Bool(v) => Some(*v),
            Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::U8(_)
            | Value::U16(_)
            | Value::U32(_)
            | Value::U64(_) => value.to_integral().map(|v| v != 0),
            Value::String(v) => match v.trim() {
                s if s.eq_ignore_ascii_case("true") || s == "1" => Some(true),
                s if s.eq_ignore_ascii_case("false") || s == "0" => Some(false),
                _ => None,
            },
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "bool"))
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form() {
        assert_eq!(Value::I32(42).to_text().as_deref(), Some("42"));
        assert_eq!(Value::from("abc").to_text().as_deref(), Some("abc"));
        assert_eq!(Value::Bool(true).to_text().as_deref(), Some("true"));
        assert!(Value::Null.to_text().is_none());
        assert!(Value::Bytes(vec![1, 2]).to_text().is_none());
    }

    #[test]
    fn bytes_display_as_hex() {
        assert_eq!(Value::Bytes(vec![0x0a, 0xff]).to_string(), "0aff");
    }

    #[test]
    fn option_into_value() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn string_from_scalars() {
        assert_eq!(String::try_from(Value::I64(7)).unwrap(), "7");
        assert_eq!(String::try_from(Value::F64(1.5)).unwrap(), "1.5");
        assert_eq!(String::try_from(Value::Uuid(Uuid::nil())).unwrap(), Uuid::nil().to_string());
        assert!(String::try_from(Value::Null).unwrap_err().is_type_conversion());
        assert!(String::try_from(Value::Bytes(vec![1])).unwrap_err().is_type_conversion());
    }

    #[test]
    fn bool_from_values() {
        assert!(bool::try_from(Value::Bool(true)).unwrap());
        assert!(bool::try_from(Value::I32(5)).unwrap());
        assert!(!bool::try_from(Value::U8(0)).unwrap());
        assert!(bool::try_from(Value::from("TRUE")).unwrap());
        assert!(!bool::try_from(Value::from(" false ")).unwrap());
        assert!(bool::try_from(Value::from("yes")).is_err());
        assert!(bool::try_from(Value::F64(1.0)).is_err());
    }

    #[test]
    fn bytes_only_from_bytes() {
        assert_eq!(Vec::<u8>::try_from(Value::Bytes(vec![3])).unwrap(), vec![3]);
        assert!(Vec::<u8>::try_from(Value::from("03")).is_err());
    }
}
