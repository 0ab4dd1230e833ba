//! Error types for field-scoped validation failures.
//!
//! This module provides [`FieldError`] for a single failure attached to a named
//! input, and [`ErrorList`] for accumulating the failures of a validation pass.

mod error_list;
mod field_error;

pub use error_list::ErrorList;
pub use field_error::FieldError;

/// A boxed, thread-safe error value.
///
/// This is the element type stored in an [`ErrorList`]. Anything implementing
/// `std::error::Error + Send + Sync` converts into it, as do `&str` and `String`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
