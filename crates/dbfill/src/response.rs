use crate::{Error, Result};

/// Rows returned by a call, or the error that stopped it.
///
/// A response built with [`Response::new`] collects results; one built with
/// [`Response::with_error`] carries an error instead. Results added after an
/// error are kept but callers should check [`has_error`](Self::has_error) first.
#[derive(Debug, Clone)]
pub struct Response<T> {
    results: Vec<T>,
    error: Option<ResponseError>,
}

#[derive(Debug, Clone)]
struct ResponseError {
    message: String,
    cause: Error,
}

impl<T> Response<T> {
    pub fn new() -> Self {
        Self {
            results: vec![],
            error: None,
        }
    }

    /// Creates a failed response. The message must not be blank.
    pub fn with_error(message: impl Into<String>, cause: Error) -> Result<Self> {
        let message = message.into();

        if message.trim().is_empty() {
            return Err(Error::argument_invalid(
                "message",
                "error message cannot be empty",
            ));
        }

        Ok(Self::failed(message, cause))
    }

    pub(crate) fn failed(message: String, cause: Error) -> Self {
        Self {
            results: vec![],
            error: Some(ResponseError { message, cause }),
        }
    }

    /// Appends a result, preserving call order.
    pub fn add(&mut self, item: T) {
        self.results.push(item);
    }

    pub fn has_result(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.message.as_str())
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref().map(|error| &error.cause)
    }

    /// Converts into the results, or the cause with the message as context.
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            Some(ResponseError { message, cause }) => {
                Err(cause.context(Error::from_args(format_args!("{message}"))))
            }
            None => Ok(self.results),
        }
    }
}

impl<T> Default for Response<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Response<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Response<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err;

    #[test]
    fn empty_response() {
        let response = Response::<i32>::new();
        assert!(!response.has_result());
        assert!(!response.has_error());
        assert!(response.error_message().is_none());
    }

    #[test]
    fn add_keeps_order() {
        let mut response = Response::new();
        response.add(3);
        response.add(1);
        response.add(2);
        assert!(response.has_result());
        assert_eq!(response.results(), &[3, 1, 2]);
    }

    #[test]
    fn error_response() {
        let response = Response::<i32>::with_error("call failed", err!("boom")).unwrap();
        assert!(response.has_error());
        assert!(!response.has_result());
        assert_eq!(response.error_message(), Some("call failed"));
        assert_eq!(response.error().unwrap().to_string(), "boom");
    }

    #[test]
    fn blank_message_rejected() {
        let err = Response::<i32>::with_error("  ", err!("boom")).unwrap_err();
        assert!(err.is_argument_invalid());
    }

    #[test]
    fn into_result() {
        let mut ok = Response::new();
        ok.add("a");
        assert_eq!(ok.into_result().unwrap(), vec!["a"]);

        let failed = Response::<&str>::with_error("call failed", err!("boom")).unwrap();
        assert_eq!(failed.into_result().unwrap_err().to_string(), "call failed: boom");
    }
}
