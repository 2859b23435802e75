use crate::{Error, Result, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// How a raw cell is turned into a member value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Parsed from the cell's textual form (`Uuid`); binary cells are read
    /// as the raw 16 bytes
    Identifier,

    /// A collection parsed from the cell's delimited text
    Structured,

    /// `Option<T>`: converted as `T`, then wrapped
    Optional,

    /// Direct value conversion
    Primitive,
}

/// Types that can be assigned from a cursor cell.
pub trait Load: Sized {
    const TARGET: Target;

    /// Name used in conversion errors.
    const TYPE_NAME: &'static str;

    /// Converts a non-null cell.
    fn load(value: Value) -> Result<Self>;

    /// Value assigned for a null cell.
    ///
    /// Types with no absent representation reject null.
    fn load_null() -> Result<Self> {
        Err(Error::type_conversion(Value::Null, Self::TYPE_NAME))
    }
}

/// Converts a raw cell to `T`.
pub fn coerce<T: Load>(value: Value) -> Result<T> {
    if value.is_null() {
        return T::load_null();
    }

    dispatch(value)
}

fn dispatch<T: Load>(value: Value) -> Result<T> {
    match T::TARGET {
        Target::Identifier if matches!(value, Value::Bytes(_)) => T::load(value),
        Target::Identifier | Target::Structured => {
            value.parse_text(T::TYPE_NAME, |text| T::load(Value::from(text)))
        }
        Target::Optional | Target::Primitive => T::load(value),
    }
}

macro_rules! impl_load_primitive {
    ( $( $ty:ty => $name:literal ),* $(,)? ) => {
        $(
            impl Load for $ty {
                const TARGET: Target = Target::Primitive;
                const TYPE_NAME: &'static str = $name;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_load_primitive!(
    bool => "bool",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    f32 => "f32",
    f64 => "f64",
    String => "String",
    Vec<u8> => "Vec<u8>",
    NaiveDate => "NaiveDate",
    NaiveTime => "NaiveTime",
    NaiveDateTime => "NaiveDateTime",
    DateTime<Utc> => "DateTime<Utc>",
);

impl Load for Uuid {
    const TARGET: Target = Target::Identifier;
    const TYPE_NAME: &'static str = "Uuid";

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}

impl Load for Value {
    const TARGET: Target = Target::Primitive;
    const TYPE_NAME: &'static str = "Value";

    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }

    fn load_null() -> Result<Self> {
        Ok(Value::Null)
    }
}

impl<T: Load> Load for Option<T> {
    const TARGET: Target = Target::Optional;
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn load(value: Value) -> Result<Self> {
        dispatch::<T>(value).map(Some)
    }

    fn load_null() -> Result<Self> {
        Ok(None)
    }
}
