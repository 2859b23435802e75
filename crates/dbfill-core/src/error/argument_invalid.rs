use super::{Error, ErrorKind};

/// Error when a caller-supplied argument cannot be used.
///
/// Raised for blank parameter names, blank error messages on a response and
/// similar validation failures. Never recovered internally.
#[derive(Debug)]
pub(super) struct ArgumentInvalidError {
    argument: &'static str,
    message: Box<str>,
}

impl std::error::Error for ArgumentInvalidError {}

impl core::fmt::Display for ArgumentInvalidError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument `{}`: {}", self.argument, self.message)
    }
}

impl Error {
    /// Creates an invalid argument error for the named argument.
    pub fn argument_invalid(argument: &'static str, message: impl Into<String>) -> Error {
        Error::from(ErrorKind::ArgumentInvalid(ArgumentInvalidError {
            argument,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its chain, is an invalid argument error.
    pub fn is_argument_invalid(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::ArgumentInvalid(_)))
    }
}
