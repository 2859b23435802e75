use super::{Error, ErrorKind};

/// An error reported by the command/cursor/connection implementation.
#[derive(Debug)]
pub(super) struct DriverError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "driver error: {}", self.inner)
    }
}

impl Error {
    /// Wraps an error raised by a driver.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Driver(DriverError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error, or any error in its chain, came from a driver.
    pub fn is_driver(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Driver(_)))
    }
}
