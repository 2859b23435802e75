use super::{Error, ErrorKind};

/// Error when a cursor or result set is used in a way its state does not allow.
///
/// This occurs when:
/// - A cell is read before the cursor is advanced onto a row
/// - A row is pushed with the wrong number of cells
/// - An ordinal is out of range
#[derive(Debug)]
pub(super) struct InvalidResultError {
    message: Box<str>,
}

impl std::error::Error for InvalidResultError {}

impl core::fmt::Display for InvalidResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidResult(InvalidResultError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its chain, is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::InvalidResult(_)))
    }
}
