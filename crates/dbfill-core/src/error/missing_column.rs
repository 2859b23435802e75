use super::{Error, ErrorKind};

/// Error when a row has no column for a member that does not allow missing columns.
#[derive(Debug)]
pub(super) struct MissingColumnError {
    column: Box<str>,
    model: &'static str,
}

impl std::error::Error for MissingColumnError {}

impl core::fmt::Display for MissingColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no column named `{}` in row for model `{}`",
            self.column, self.model
        )
    }
}

impl Error {
    /// Creates a missing column error naming the column and the model type.
    pub fn missing_column(column: impl Into<String>, model: &'static str) -> Error {
        Error::from(ErrorKind::MissingColumn(MissingColumnError {
            column: column.into().into(),
            model,
        }))
    }

    /// Returns `true` if this error, or any error in its chain, is a missing column error.
    pub fn is_missing_column(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::MissingColumn(_)))
    }
}
