//! Ordered accumulation of validation errors.
//!
//! [`ErrorList`] collects the failures produced by a validation pass, renders
//! them as a single message, and groups them by field for presentation layers.

use std::fmt::{self, Display};
use std::sync::Arc;

use indexmap::IndexMap;
use stillwater::prelude::*;
use stillwater::Validation;

use super::{BoxError, FieldError};

/// An ordered, flat collection of validation errors.
///
/// Elements may be [`FieldError`]s or any other error value. Insertion order is
/// preserved and is significant both for [`Display`] and for [`ErrorList::map`].
/// Identical errors are kept; nothing is deduplicated.
///
/// An empty list means "no error". Use [`ErrorList::is_empty`] or
/// [`ErrorList::into_result`] before treating a list as a failure.
///
/// # Example
///
/// ```rust
/// use fielderr::{ErrorList, FieldError};
///
/// let mut errors = ErrorList::new();
/// errors.push(FieldError::new("username", "not long enough"));
/// errors.push(FieldError::new("username", "should be an email"));
/// errors.push("asploded");
///
/// assert_eq!(errors.to_string(), "not long enough, should be an email, asploded");
///
/// let fields = errors.map();
/// assert_eq!(fields["username"], vec!["not long enough", "should be an email"]);
/// assert_eq!(fields[""], vec!["asploded"]);
/// ```
#[derive(Debug, Default)]
pub struct ErrorList(Vec<BoxError>);

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding a single error.
    pub fn single(error: impl Into<BoxError>) -> Self {
        let mut list = Self::new();
        list.push(error);
        list
    }

    /// Creates a list from already boxed errors, flattening nested lists.
    pub fn from_vec(errors: Vec<BoxError>) -> Self {
        errors.into_iter().collect()
    }

    /// Appends an error to the end of the list.
    ///
    /// If the error is itself an `ErrorList`, its elements are spliced in
    /// place so the list never nests.
    pub fn push(&mut self, error: impl Into<BoxError>) {
        let error: BoxError = error.into();
        match error.downcast::<ErrorList>() {
            Ok(nested) => self.0.extend(nested.0),
            Err(error) => self.0.push(error),
        }
    }

    /// Appends every error of `other`, keeping its order.
    pub fn append(&mut self, other: ErrorList) {
        self.0.extend(other.0);
    }

    /// Returns the number of errors in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the contained errors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn std::error::Error + Send + Sync + 'static)> {
        self.0.iter().map(|error| &**error)
    }

    /// Returns the message of every error in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|error| error.to_string()).collect()
    }

    /// Returns the field an error belongs to.
    ///
    /// Only a [`FieldError`], pushed directly or as an `Arc<FieldError>`,
    /// carries a field name. Every other error type resolves to `""`, the same
    /// bucket as a `FieldError` with an empty name. Callers with their own
    /// field-scoped error types should wrap them in a `FieldError` to have
    /// them grouped under a field.
    pub fn field_name_of<'a>(
        error: &'a (dyn std::error::Error + Send + Sync + 'static),
    ) -> &'a str {
        error
            .downcast_ref::<FieldError>()
            .or_else(|| {
                error
                    .downcast_ref::<Arc<FieldError>>()
                    .map(|shared| &**shared)
            })
            .map(FieldError::name)
            .unwrap_or("")
    }

    /// Groups messages by field name.
    ///
    /// Keys appear in the order their field was first seen and messages keep
    /// list order within each key. Only fields with at least one error get a
    /// key. Errors without a field are grouped under `""`; see
    /// [`ErrorList::field_name_of`] for which errors carry a field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fielderr::{ErrorList, FieldError};
    ///
    /// let errors: ErrorList = vec![
    ///     FieldError::new("password", "not long enough"),
    ///     FieldError::new("username", "taken"),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let fields = errors.map();
    /// assert_eq!(fields.len(), 2);
    /// assert_eq!(fields.get_index(0).map(|(k, _)| k.as_str()), Some("password"));
    /// assert!(!fields.contains_key("email"));
    /// ```
    pub fn map(&self) -> IndexMap<String, Vec<String>> {
        let mut fields: IndexMap<String, Vec<String>> = IndexMap::new();
        for error in self.iter() {
            fields
                .entry(Self::field_name_of(error).to_string())
                .or_default()
                .push(error.to_string());
        }
        fields
    }

    /// Returns the messages grouped under a single field, in list order.
    ///
    /// Returns an empty vec when the field has no errors.
    pub fn for_field(&self, name: &str) -> Vec<String> {
        self.iter()
            .filter(|error| Self::field_name_of(*error) == name)
            .map(|error| error.to_string())
            .collect()
    }

    /// Converts the list into a `Result`, treating an empty list as success.
    pub fn into_result(self) -> Result<(), ErrorList> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Converts the list into a stillwater `Validation`.
    ///
    /// An empty list yields `Success(value)`; anything else is a `Failure`.
    pub fn into_validation<T>(self, value: T) -> Validation<T, ErrorList> {
        if self.is_empty() {
            Validation::Success(value)
        } else {
            Validation::Failure(self)
        }
    }

    /// Consumes the list, returning the boxed errors.
    pub fn into_vec(self) -> Vec<BoxError> {
        self.0
    }
}

impl Semigroup for ErrorList {
    fn combine(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}

impl Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

impl From<FieldError> for ErrorList {
    fn from(error: FieldError) -> Self {
        Self::single(error)
    }
}

impl<E: Into<BoxError>> FromIterator<E> for ErrorList {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<E: Into<BoxError>> Extend<E> for ErrorList {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl IntoIterator for ErrorList {
    type Item = BoxError;
    type IntoIter = std::vec::IntoIter<BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a BoxError;
    type IntoIter = std::slice::Iter<'a, BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorList>();
    assert_sync::<ErrorList>();
};
