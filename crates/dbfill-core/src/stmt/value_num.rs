use crate::{stmt::Value, Error, Result};

impl Value {
    /// The value as an exact integer, if it has one.
    ///
    /// Booleans map to `1`/`0`, floats only when they have no fractional part,
    /// strings when their trimmed text parses as an integer or integral float.
    pub(crate) fn to_integral(&self) -> Option<i128> {
        match self {
            Self::Bool(v) => Some(i128::from(*v)),
            Self::I8(v) => Some(i128::from(*v)),
            Self::I16(v) => Some(i128::from(*v)),
            Self::I32(v) => Some(i128::from(*v)),
            Self::I64(v) => Some(i128::from(*v)),
            Self::U8(v) => Some(i128::from(*v)),
            Self::U16(v) => Some(i128::from(*v)),
            Self::U32(v) => Some(i128::from(*v)),
            Self::U64(v) => Some(i128::from(*v)),
            Self::F32(v) => integral_float(f64::from(*v)),
            Self::F64(v) => integral_float(*v),
            Self::String(v) => {
                let v = v.trim();
                v.parse::<i128>()
                    .ok()
                    .or_else(|| v.parse::<f64>().ok().and_then(integral_float))
            }
            _ => None,
        }
    }

    pub(crate) fn to_float(&self) -> Option<f64> {
        match self {
            Self::I8(v) => Some(f64::from(*v)),
            Self::I16(v) => Some(f64::from(*v)),
            Self::I32(v) => Some(f64::from(*v)),
            Self::I64(v) => Some(*v as f64),
            Self::U8(v) => Some(f64::from(*v)),
            Self::U16(v) => Some(f64::from(*v)),
            Self::U32(v) => Some(f64::from(*v)),
            Self::U64(v) => Some(*v as f64),
            Self::F32(v) => Some(f64::from(*v)),
            Self::F64(v) => Some(*v),
            Self::String(v) => v.trim().parse().ok(),
            _ => None,
        }
    }
}

fn integral_float(v: f64) -> Option<i128> {
    // Values beyond i128 saturate; every target is narrower so the range check rejects them.
    (v.is_finite() && v.fract() == 0.0).then_some(v as i128)
}

macro_rules! impl_integer_conversions {
    ( $( $ty:ident => $variant:ident, )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    if let Value::$variant(v) = value {
                        return Ok(v);
                    }

                    match value.to_integral().and_then(|v| $ty::try_from(v).ok()) {
                        Some(v) => Ok(v),
                        None => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_integer_conversions! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        if let Value::F32(v) = value {
            return Ok(v);
        }

        match value.to_float() {
            Some(v) => Ok(v as f32),
            None => Err(Error::type_conversion(value, "f32")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value.to_float() {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, "f64")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening() {
        assert_eq!(i64::try_from(Value::I32(-4)).unwrap(), -4);
        assert_eq!(i64::try_from(Value::U32(4)).unwrap(), 4);
        assert_eq!(u64::try_from(Value::U8(200)).unwrap(), 200);
    }

    #[test]
    fn narrowing_is_range_checked() {
        assert_eq!(i32::try_from(Value::I64(100)).unwrap(), 100);
        assert!(i32::try_from(Value::I64(i64::MAX)).unwrap_err().is_type_conversion());
        assert!(u8::try_from(Value::I32(-1)).is_err());
        assert_eq!(u8::try_from(Value::I32(255)).unwrap(), 255);
    }

    #[test]
    fn floats_to_integers() {
        assert_eq!(i32::try_from(Value::F64(3.0)).unwrap(), 3);
        assert!(i32::try_from(Value::F64(3.5)).is_err());
        assert!(i64::try_from(Value::F64(f64::NAN)).is_err());
        assert!(i64::try_from(Value::F64(1e30)).is_err());
    }

    #[test]
    fn strings_to_numbers() {
        assert_eq!(i32::try_from(Value::from(" 12 ")).unwrap(), 12);
        assert_eq!(i32::try_from(Value::from("12.0")).unwrap(), 12);
        assert!(i32::try_from(Value::from("twelve")).is_err());
        assert_eq!(f64::try_from(Value::from("2.5")).unwrap(), 2.5);
    }

    #[test]
    fn bool_to_integer() {
        assert_eq!(i32::try_from(Value::Bool(true)).unwrap(), 1);
        assert_eq!(u8::try_from(Value::Bool(false)).unwrap(), 0);
    }

    #[test]
    fn integers_to_floats() {
        assert_eq!(f64::try_from(Value::I32(2)).unwrap(), 2.0);
        assert_eq!(f32::try_from(Value::I64(-3)).unwrap(), -3.0);
        assert!(f64::try_from(Value::Bool(true)).is_err());
        assert!(f64::try_from(Value::Null).is_err());
    }

    #[test]
    fn conversion_error_names_target() {
        let err = i16::try_from(Value::from("x")).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert String to i16");
    }
}
