//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{GuardError, Validate};

/// Replaces the error message of a validator.
///
/// Kind, code, label, and params of the underlying error are preserved;
/// only the human-readable message changes.
///
/// # Examples
///
/// ```rust
/// use precept::prelude::*;
///
/// let validator = with_message(at_least(8), "Password must be at least 8 characters");
/// let err = validator.validate(&5).unwrap_err();
/// assert_eq!(err.message, "Password must be at least 8 characters");
/// assert_eq!(err.code, "at_least");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), GuardError> {
        self.inner
            .validate(input)
            .map_err(|e| e.with_message(self.message.clone()))
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V>
where
    V: Validate,
{
    WithMessage::new(validator, message)
}
