//! NOT combinator - logical negation of a validator

use crate::foundation::{GuardError, GuardKind, Validate};

/// Inverts a validator.
///
/// Succeeds when the inner validator fails, and fails when it succeeds.
///
/// # Examples
///
/// ```rust
/// use precept::prelude::*;
///
/// let outside = in_range(0, 10).not();
/// assert!(outside.validate(&42).is_ok());
/// assert!(outside.validate(&5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), GuardError> {
        match self.inner.validate(input) {
            Ok(()) => Err(GuardError::new(
                GuardKind::InvalidArgument,
                "not",
                "Value must not satisfy the inner condition",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}
