use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::{stmt::Value, Error, Result};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

fn parse_naive_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|v| v.naive_utc())
        })
        .or_else(|| parse_naive_date(text).and_then(|v| v.and_hms_opt(0, 0, 0)))
}

fn parse_naive_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

fn parse_naive_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

macro_rules! impl_chrono_from {
    ($chrono:ty, $name:ident) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl From<&$chrono> for Value {
            fn from(value: &$chrono) -> Self {
                Self::$name(*value)
            }
        }
    };
}

impl_chrono_from!(DateTime<Utc>, DateTimeUtc);
impl_chrono_from!(NaiveDateTime, DateTime);
impl_chrono_from!(NaiveDate, Date);
impl_chrono_from!(NaiveTime, Time);

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::DateTime(v) => Some(*v),
            Value::DateTimeUtc(v) => Some(v.naive_utc()),
            Value::Date(v) => v.and_hms_opt(0, 0, 0),
            Value::String(v) => parse_naive_date_time(v),
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "NaiveDateTime"))
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::DateTimeUtc(v) => Some(*v),
            Value::DateTime(v) => Some(v.and_utc()),
            Value::Date(v) => v.and_hms_opt(0, 0, 0).map(|v| v.and_utc()),
            Value::String(v) => DateTime::parse_from_rfc3339(v.trim())
                .ok()
                .map(|v| v.with_timezone(&Utc))
                .or_else(|| parse_naive_date_time(v).map(|v| v.and_utc())),
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "DateTime<Utc>"))
    }
}

impl TryFrom<Value> for NaiveDate {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::Date(v) => Some(*v),
            Value::DateTime(v) => Some(v.date()),
            Value::DateTimeUtc(v) => Some(v.date_naive()),
            Value::String(v) => {
                parse_naive_date(v).or_else(|| parse_naive_date_time(v).map(|v| v.date()))
            }
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "NaiveDate"))
    }
}

impl TryFrom<Value> for NaiveTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::Time(v) => Some(*v),
            Value::DateTime(v) => Some(v.time()),
            Value::DateTimeUtc(v) => Some(v.time()),
            Value::String(v) => {
                parse_naive_time(v).or_else(|| parse_naive_date_time(v).map(|v| v.time()))
            }
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "NaiveTime"))
    }
}
