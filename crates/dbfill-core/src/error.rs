mod adhoc;
mod argument_invalid;
mod driver;
mod format_invalid;
mod invalid_result;
mod missing_column;
mod type_conversion;

use adhoc::AdhocError;
use argument_invalid::ArgumentInvalidError;
use driver::DriverError;
use format_invalid::FormatInvalidError;
use invalid_result::InvalidResultError;
use missing_column::MissingColumnError;
use std::sync::Arc;
use type_conversion::TypeConversionError;

/// Returns early with an ad-hoc [`Error`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from format arguments.
///
/// Mostly used as context: `err.context(err!("while populating `{name}`"))`.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while mapping models to commands or rows to models.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => inner.kind,
                // Shared consequents keep their own chain; wrap a copy of the message instead.
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.inner.as_ref().and_then(|inner| inner.cause.as_ref()) {
            err = cause;
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if any error in the chain matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    ArgumentInvalid(ArgumentInvalidError),
    Driver(DriverError),
    FormatInvalid(FormatInvalidError),
    InvalidResult(InvalidResultError),
    MissingColumn(MissingColumnError),
    TypeConversion(TypeConversionError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ArgumentInvalid(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            FormatInvalid(err) => core::fmt::Display::fmt(err, f),
            InvalidResult(err) => core::fmt::Display::fmt(err, f),
            MissingColumn(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown dbfill error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_with_shared_consequent() {
        let consequent = err!("shared");
        let _keep = consequent.clone();

        let err = err!("root").context(consequent);
        assert_eq!(err.to_string(), "shared: root");
    }

    #[test]
    fn root_of_chain() {
        let err = Error::missing_column("Name", "app::User").context(err!("populate failed"));
        assert!(err.root().is_missing_column());
        assert_eq!(
            err.root().to_string(),
            "no column named `Name` in row for model `app::User`"
        );
    }

    #[test]
    fn predicates_see_through_context() {
        let err = Error::type_conversion(crate::stmt::Value::from("x"), "i32")
            .context(err!("cannot populate member `age` of `User`"));
        assert!(err.is_type_conversion());
        assert!(!err.is_missing_column());
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn parse_int_bridge() {
        let parse_err = "abc".parse::<i32>().unwrap_err();
        let our_err: Error = parse_err.into();
        assert!(our_err.to_string().contains("invalid digit"));
    }

    #[test]
    fn uuid_bridge() {
        let parse_err = uuid::Uuid::parse_str("abc").unwrap_err();
        let our_err: Error = parse_err.into();
        assert!(our_err.to_string().contains("invalid"), "{our_err}");
    }

    #[test]
    fn chrono_bridge() {
        let parse_err = chrono::NaiveDate::parse_from_str("", "%Y-%m-%d").unwrap_err();
        let our_err: Error = parse_err.into();
        assert_eq!(our_err.to_string(), "premature end of input");
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(crate::stmt::Value::I64(42), "String");
        assert_eq!(err.to_string(), "cannot convert I64 to String");
    }

    #[test]
    fn argument_invalid_error() {
        let err = Error::argument_invalid("name", "parameter name cannot be empty");
        assert!(err.is_argument_invalid());
        assert_eq!(
            err.to_string(),
            "invalid argument `name`: parameter name cannot be empty"
        );
    }

    #[test]
    fn format_invalid_error() {
        let err = Error::format_invalid("dangling escape at offset 4");
        assert!(err.is_format_invalid());
        assert_eq!(err.to_string(), "invalid format: dangling escape at offset 4");
    }

    #[test]
    fn invalid_result_error() {
        let err = Error::invalid_result("cursor is not positioned on a row");
        assert!(err.is_invalid_result());
        assert_eq!(
            err.to_string(),
            "invalid result: cursor is not positioned on a row"
        );
    }

    #[test]
    fn driver_error_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::driver(io);
        assert!(err.is_driver());
        assert_eq!(err.to_string(), "driver error: refused");
        assert!(err.source().is_some());
    }
}
