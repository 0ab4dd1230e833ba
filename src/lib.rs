//! # Fielderr
//!
//! Aggregation of field-scoped validation errors for form handling.
//!
//! ## Overview
//!
//! A validation pass runs a list of independent validators against submitted
//! data and keeps every failure they report. The collected errors can be shown
//! as one flat message or grouped by field, so a presentation layer can place
//! each message next to its input and route the rest to a general error area.
//!
//! This crate does not decide what makes a field invalid. It only defines the
//! shape of the failures and how they are collected.
//!
//! ## Core Types
//!
//! - [`FieldError`]: A failure attached to a named field
//! - [`ErrorList`]: An ordered collection of errors with a per-field view
//! - [`FieldSource`]: Lookup of submitted values by field name
//! - [`Validator`]: A single rule, run by [`validate`] or a [`ValidatorSet`]
//!
//! ## Example
//!
//! ```rust
//! use fielderr::{validate, ErrorList, FieldError, FieldSource, Validator};
//! use serde_json::json;
//!
//! struct Required(&'static str);
//!
//! impl Validator for Required {
//!     fn field_name(&self) -> &str {
//!         self.0
//!     }
//!
//!     fn validate(&self, source: &dyn FieldSource) -> Option<ErrorList> {
//!         match source.field_value(self.0) {
//!             Some(_) => None,
//!             None => Some(FieldError::new(self.0, "Expected field to exist.").into()),
//!         }
//!     }
//! }
//!
//! let form = json!({"username": "john"});
//! let errors = validate(&form, &[Required("username"), Required("password")]);
//!
//! assert_eq!(errors.to_string(), "Expected field to exist.");
//! assert!(errors.map().contains_key("password"));
//! assert!(!errors.map().contains_key("username"));
//! ```

pub mod error;
pub mod source;
pub mod validator;

pub use error::{BoxError, ErrorList, FieldError};
pub use source::FieldSource;
pub use validator::{validate, Validator, ValidatorSet};

/// Type alias for validation results carrying an [`ErrorList`].
pub type ValidationResult<T> = stillwater::Validation<T, ErrorList>;
