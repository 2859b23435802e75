use crate::stmt::Value;

/// Storage-level type of a command parameter.
///
/// Parameters normally leave the storage type to the driver, which infers one
/// from the value. A directive can pin it explicitly when the inferred type is
/// not the one the store expects, e.g. `DateTime2` instead of `DateTime`.
/// `Structured` marks table-valued parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    AnsiString,
    AnsiStringFixedLength,
    Binary,
    Boolean,
    Byte,
    Currency,
    Date,
    DateTime,
    DateTime2,
    DateTimeOffset,
    Decimal,
    Double,
    Guid,
    Int16,
    Int32,
    Int64,
    Object,
    SByte,
    Single,
    String,
    StringFixedLength,
    Time,
    UInt16,
    UInt32,
    UInt64,
    VarNumeric,
    Xml,
    Structured,
}

impl StorageType {
    /// The storage type a driver would infer for `value` when no hint is given.
    ///
    /// Returns `None` for null, which carries no type of its own.
    pub fn infer(value: &Value) -> Option<Self> {
        Some(match value {
            Value::Null => return None,
            Value::Bool(_) => Self::Boolean,
            Value::I8(_) => Self::SByte,
            Value::I16(_) => Self::Int16,
            Value::I32(_) => Self::Int32,
            Value::I64(_) => Self::Int64,
            Value::U8(_) => Self::Byte,
            Value::U16(_) => Self::UInt16,
            Value::U32(_) => Self::UInt32,
            Value::U64(_) => Self::UInt64,
            Value::F32(_) => Self::Single,
            Value::F64(_) => Self::Double,
            Value::String(_) => Self::String,
            Value::Bytes(_) => Self::Binary,
            Value::Uuid(_) => Self::Guid,
            Value::Date(_) => Self::Date,
            Value::Time(_) => Self::Time,
            Value::DateTime(_) => Self::DateTime,
            Value::DateTimeUtc(_) => Self::DateTimeOffset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_from_value() {
        assert_eq!(StorageType::infer(&Value::I32(1)), Some(StorageType::Int32));
        assert_eq!(StorageType::infer(&Value::from("a")), Some(StorageType::String));
        assert_eq!(
            StorageType::infer(&Value::Uuid(uuid::Uuid::nil())),
            Some(StorageType::Guid)
        );
        assert_eq!(StorageType::infer(&Value::Null), None);
    }
}
