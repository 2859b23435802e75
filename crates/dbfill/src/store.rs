use crate::{Parameter, Result, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// A member value on its way to a command parameter.
pub enum Param<'a> {
    Value(Value),

    /// A multi-row collection, written through its native representation
    Structured(&'a dyn StructuredType),
}

impl core::fmt::Debug for Param<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Structured(structured) => f
                .debug_struct("Structured")
                .field("len", &structured.len())
                .finish(),
        }
    }
}

impl From<Value> for Param<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Object-safe view of a structured collection.
pub trait StructuredType {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores the collection's rows in `parameter` as a table value.
    fn write_parameter(&self, parameter: &mut Parameter) -> Result<()>;

    /// Delimited text form of the collection.
    fn encode(&self) -> Result<String>;
}

/// Types whose values can be sent as a parameter.
pub trait Store {
    fn store(&self) -> Param<'_>;
}

macro_rules! impl_store_copy {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl Store for $ty {
                fn store(&self) -> Param<'_> {
                    Param::Value(Value::from(*self))
                }
            }
        )*
    };
}

impl_store_copy!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    Uuid,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
);

impl Store for String {
    fn store(&self) -> Param<'_> {
        Param::Value(Value::from(self))
    }
}

impl Store for str {
    fn store(&self) -> Param<'_> {
        Param::Value(Value::from(self))
    }
}

impl Store for Vec<u8> {
    fn store(&self) -> Param<'_> {
        Param::Value(Value::from(self.as_slice()))
    }
}

impl Store for Value {
    fn store(&self) -> Param<'_> {
        Param::Value(self.clone())
    }
}

/// `None` is sent as null.
impl<T: Store> Store for Option<T> {
    fn store(&self) -> Param<'_> {
        match self {
            Some(value) => value.store(),
            None => Param::Value(Value::Null),
        }
    }
}

impl<T: Store + ?Sized> Store for &T {
    fn store(&self) -> Param<'_> {
        (**self).store()
    }
}
