//! Nullable validators for Option types
//!
//! # Examples
//!
//! ```rust
//! use precept::prelude::*;
//!
//! let validator = required::<String>();
//! assert!(validator.validate(&Some("hello".to_string())).is_ok());
//! assert!(validator.validate(&None::<String>).is_err());
//! ```

use crate::foundation::{GuardError, Validate};
use std::marker::PhantomData;

/// Validates that an `Option` is `Some`.
///
/// Fails with a [`NullViolation`](crate::foundation::GuardKind::NullViolation)
/// when the input is `None`.
///
/// # Examples
///
/// ```rust
/// use precept::validators::required;
/// use precept::foundation::Validate;
///
/// let validator = required::<i32>();
/// assert!(validator.validate(&Some(42)).is_ok());
/// assert!(validator.validate(&None::<i32>).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required<T> {
    _phantom: PhantomData<T>,
}

impl<T> Validate for Required<T> {
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), GuardError> {
        if input.is_some() {
            Ok(())
        } else {
            Err(GuardError::null())
        }
    }
}

/// Creates a `Required` validator.
#[must_use]
pub fn required<T>() -> Required<T> {
    Required {
        _phantom: PhantomData,
    }
}
