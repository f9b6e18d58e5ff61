//! Result envelope delivered to request continuations.

use crate::client::error::RequestError;

/// Captures either the value a request produced or the failure that
/// prevented it.
///
/// Building a failed envelope is not itself an error: the failure only
/// surfaces when the value is accessed. This lets every continuation be
/// invoked uniformly with whatever the request produced, and lets the
/// caller decide at the point of use whether a failure matters.
#[derive(Debug)]
pub struct Outcome<T> {
    result: Result<T, RequestError>,
}

impl<T> Outcome<T> {
    /// Wrap a successfully produced value.
    pub fn success(value: T) -> Self {
        Self { result: Ok(value) }
    }

    /// Wrap a captured failure.
    pub fn failure(error: RequestError) -> Self {
        Self { result: Err(error) }
    }

    /// Whether the request produced a value.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Access the value, surfacing the captured failure if there is one.
    pub fn value(&self) -> Result<&T, &RequestError> {
        self.result.as_ref()
    }

    /// Consume the envelope, surfacing the captured failure if there is
    /// one.
    pub fn into_value(self) -> Result<T, RequestError> {
        self.result
    }

    /// The captured failure, if any.
    pub fn error(&self) -> Option<&RequestError> {
        self.result.as_ref().err()
    }
}

impl<T> From<Result<T, RequestError>> for Outcome<T> {
    fn from(result: Result<T, RequestError>) -> Self {
        Self { result }
    }
}
