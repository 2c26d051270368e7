//! OPTIONAL combinator - validates Option types
//!
//! The engine behind every `*_opt` guard: absence passes, presence is
//! checked.

use crate::foundation::{GuardError, Validate};

/// Makes a validator accept `Option` input.
///
/// Passes on `None`; applies the inner validator to the contained value
/// otherwise. Absence is never itself a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), GuardError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

/// Creates an `Optional` combinator.
pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}
