//! Field value lookup for validators.
//!
//! This module provides the [`FieldSource`] trait, the single capability a
//! validator needs from the submitted data: the current value of a named field.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A source of submitted field values.
///
/// Validators receive a `&dyn FieldSource` and look up the fields they own.
/// A missing field answers `None`; reporting it is up to the validator.
///
/// # Example
///
/// ```rust
/// use fielderr::FieldSource;
/// use std::collections::HashMap;
///
/// let mut form = HashMap::new();
/// form.insert("username".to_string(), "john".to_string());
///
/// assert_eq!(form.field_value("username").as_deref(), Some("john"));
/// assert_eq!(form.field_value("email"), None);
/// ```
pub trait FieldSource {
    /// Returns the value of the named field, or `None` if it was not submitted.
    fn field_value(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field_value(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field_value(name)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl<S: BuildHasher> FieldSource for IndexMap<String, String, S> {
    fn field_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// JSON objects expose their members as field values.
///
/// Strings are returned as-is; numbers, booleans, arrays and objects are
/// rendered as compact JSON. `null` is treated as not submitted.
impl FieldSource for Map<String, Value> {
    fn field_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).and_then(json_text)
    }
}

/// Only JSON objects have fields; any other value answers `None`.
impl FieldSource for Value {
    fn field_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_object().and_then(|object| object.field_value(name))
    }
}

fn json_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}
