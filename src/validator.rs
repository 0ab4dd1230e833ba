//! Validator trait and the orchestration that runs a set of validators.
//!
//! Each [`Validator`] owns one rule for one field. [`validate`] runs a list of
//! them against a [`FieldSource`] and concatenates whatever they report into a
//! single [`ErrorList`], keeping validator order.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::ErrorList;
use crate::source::FieldSource;

/// A single validation rule.
///
/// Validators look up the field(s) they own in the source and return `None`
/// (or an empty list) when the data is valid. A validator whose field is
/// missing from the source decides for itself whether that is an error.
///
/// The `Send + Sync` bounds allow validator sets to run on a thread pool.
///
/// # Example
///
/// ```rust
/// use fielderr::{ErrorList, FieldError, FieldSource, Validator};
///
/// struct Required(&'static str);
///
/// impl Validator for Required {
///     fn field_name(&self) -> &str {
///         self.0
///     }
///
///     fn validate(&self, source: &dyn FieldSource) -> Option<ErrorList> {
///         match source.field_value(self.0) {
///             Some(value) if !value.is_empty() => None,
///             _ => Some(FieldError::new(self.0, "is required").into()),
///         }
///     }
/// }
/// ```
pub trait Validator: Send + Sync {
    /// The field this validator reports on.
    fn field_name(&self) -> &str;

    /// Checks the source, returning the violations found, if any.
    fn validate(&self, source: &dyn FieldSource) -> Option<ErrorList>;
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn field_name(&self) -> &str {
        (**self).field_name()
    }

    fn validate(&self, source: &dyn FieldSource) -> Option<ErrorList> {
        (**self).validate(source)
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn field_name(&self) -> &str {
        (**self).field_name()
    }

    fn validate(&self, source: &dyn FieldSource) -> Option<ErrorList> {
        (**self).validate(source)
    }
}

/// Runs every validator in order and concatenates their errors.
///
/// A failing validator never stops the ones after it. The result is empty
/// when every validator passes, including when `validators` is empty.
///
/// # Example
///
/// ```rust
/// use fielderr::{validate, Validator};
/// use serde_json::json;
///
/// let validators: Vec<Box<dyn Validator>> = Vec::new();
/// let errors = validate(&json!({"username": "john"}), &validators);
///
/// assert!(errors.is_empty());
/// assert!(errors.map().is_empty());
/// ```
pub fn validate<V: Validator>(source: &dyn FieldSource, validators: &[V]) -> ErrorList {
    let errors = concat(
        validators
            .iter()
            .map(|validator| run_one(validator, source)),
    );
    debug!(
        validators = validators.len(),
        errors = errors.len(),
        "validation pass finished"
    );
    errors
}

fn run_one<V: Validator + ?Sized>(validator: &V, source: &dyn FieldSource) -> Option<ErrorList> {
    let result = validator.validate(source);
    if let Some(errors) = result.as_ref().filter(|errors| !errors.is_empty()) {
        trace!(
            field = validator.field_name(),
            errors = errors.len(),
            "validator reported errors"
        );
    }
    result
}

fn concat(results: impl IntoIterator<Item = Option<ErrorList>>) -> ErrorList {
    let mut all_errors = ErrorList::new();
    for errors in results.into_iter().flatten() {
        all_errors.append(errors);
    }
    all_errors
}

/// An ordered, reusable collection of validators.
///
/// `ValidatorSet` owns its validators and can run them either sequentially
/// (the default) or on the rayon thread pool. Both modes return errors in the
/// order the validators were added.
///
/// # Example
///
/// ```rust
/// use fielderr::{ErrorList, FieldError, FieldSource, Validator, ValidatorSet};
/// use serde_json::json;
///
/// struct MinLen(&'static str, usize);
///
/// impl Validator for MinLen {
///     fn field_name(&self) -> &str {
///         self.0
///     }
///
///     fn validate(&self, source: &dyn FieldSource) -> Option<ErrorList> {
///         let len = source.field_value(self.0).map_or(0, |v| v.chars().count());
///         (len < self.1).then(|| FieldError::new(self.0, "not long enough").into())
///     }
/// }
///
/// let set = ValidatorSet::new()
///     .with(MinLen("username", 5))
///     .with(MinLen("password", 8))
///     .parallel(true);
///
/// let errors = set.validate(&json!({"username": "john", "password": "hunter22"}));
/// assert_eq!(errors.to_string(), "not long enough");
/// assert_eq!(errors.map()["username"], vec!["not long enough"]);
/// ```
#[derive(Default)]
pub struct ValidatorSet {
    validators: Vec<Box<dyn Validator>>,
    parallel: bool,
}

impl ValidatorSet {
    /// Creates an empty, sequential validator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validator and returns self for chaining.
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.push(validator);
        self
    }

    /// Adds a validator to the end of the set.
    pub fn push<V>(&mut self, validator: V)
    where
        V: Validator + 'static,
    {
        self.validators.push(Box::new(validator));
    }

    /// Enables or disables running validators on the rayon thread pool.
    ///
    /// Results are merged in insertion order either way.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Returns true if validators run in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the number of validators in the set.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if the set holds no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Returns the field names of the validators, in insertion order.
    pub fn fields(&self) -> Vec<String> {
        self.validators
            .iter()
            .map(|validator| validator.field_name().to_string())
            .collect()
    }

    /// Runs every validator against `source` and concatenates their errors.
    pub fn validate<S>(&self, source: &S) -> ErrorList
    where
        S: FieldSource + Sync,
    {
        if !self.parallel {
            return validate(source, &self.validators);
        }

        // collect() on an indexed parallel iterator keeps input order
        let results: Vec<Option<ErrorList>> = self
            .validators
            .par_iter()
            .map(|validator| run_one(validator, source))
            .collect();
        let errors = concat(results);
        debug!(
            validators = self.validators.len(),
            errors = errors.len(),
            "parallel validation pass finished"
        );
        errors
    }
}
