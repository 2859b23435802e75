use super::{Error, ErrorKind};

/// Error when a delimited-text encoding cannot be parsed.
#[derive(Debug)]
pub(super) struct FormatInvalidError {
    message: Box<str>,
}

impl std::error::Error for FormatInvalidError {}

impl core::fmt::Display for FormatInvalidError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid format: {}", self.message)
    }
}

impl Error {
    /// Creates a format error.
    ///
    /// This is used when the serialized form of a structured collection is malformed.
    pub fn format_invalid(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::FormatInvalid(FormatInvalidError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its chain, is a format error.
    pub fn is_format_invalid(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::FormatInvalid(_)))
    }
}
