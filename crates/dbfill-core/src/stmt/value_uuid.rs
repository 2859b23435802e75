use uuid::Uuid;

use crate::{stmt::Value, Error, Result};

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<&Uuid> for Value {
    fn from(value: &Uuid) -> Self {
        Self::Uuid(*value)
    }
}

impl TryFrom<Value> for Uuid {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::Uuid(v) => Some(*v),
            Value::String(v) => Uuid::parse_str(v.trim()).ok(),
            Value::Bytes(v) => Uuid::from_slice(v).ok(),
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "Uuid"))
    }
}
