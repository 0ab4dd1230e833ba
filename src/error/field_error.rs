//! A validation failure attached to a named field.

use thiserror::Error;

use super::BoxError;

/// A single validation failure scoped to a field.
///
/// The field name is metadata used for grouping; it is not part of the
/// rendered message. Displaying a `FieldError` yields exactly the message of
/// its cause. An empty name marks the error as global, which groups it
/// together with errors that carry no field at all.
///
/// # Example
///
/// ```rust
/// use fielderr::FieldError;
///
/// let error = FieldError::new("username", "not long enough");
///
/// assert_eq!(error.name(), "username");
/// assert_eq!(error.to_string(), "not long enough");
/// ```
#[derive(Debug, Error)]
#[error("{cause}")]
pub struct FieldError {
    name: String,
    #[source]
    cause: BoxError,
}

impl FieldError {
    /// Creates a new field error. Any name is accepted, including `""`.
    pub fn new(name: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            name: name.into(),
            cause: cause.into(),
        }
    }

    /// Creates an error with an empty field name.
    pub fn global(cause: impl Into<BoxError>) -> Self {
        Self::new(String::new(), cause)
    }

    /// Returns the name of the field this error is attached to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying error whose message this error displays.
    ///
    /// This is the same error returned by `std::error::Error::source`.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Returns true if this error is not attached to a field.
    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }

    /// Splits the error into its field name and cause.
    pub fn into_parts(self) -> (String, BoxError) {
        (self.name, self.cause)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldError>();
    assert_sync::<FieldError>();
};
