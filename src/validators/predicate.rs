//! Predicate validators
//!
//! The escape hatch for conditions the built-in validators do not cover:
//! wrap any `Fn(&T) -> bool` in a [`Satisfies`] validator, optionally with
//! a custom failure message.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::foundation::{GuardError, Validate};

/// Validates that a value satisfies an arbitrary predicate.
///
/// # Type Parameters
///
/// * `T` - The input type
/// * `F` - The predicate function type (must implement `Fn(&T) -> bool`)
///
/// # Examples
///
/// ```rust
/// use precept::validators::satisfying;
/// use precept::foundation::Validate;
///
/// let validator = satisfying(|s: &&str| s.len() == 3);
/// assert!(validator.validate(&"abc").is_ok());
/// assert!(validator.validate(&"ab").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Satisfies<T, F> {
    predicate: F,
    message: Option<Cow<'static, str>>,
    _phantom: PhantomData<T>,
}

impl<T, F> Satisfies<T, F>
where
    F: Fn(&T) -> bool,
{
    /// Creates a new predicate validator with the default failure message.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            message: None,
            _phantom: PhantomData,
        }
    }

    /// Sets a custom failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T, F> Validate for Satisfies<T, F>
where
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), GuardError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            let error = GuardError::unsatisfied();
            match &self.message {
                Some(message) => Err(error.with_message(message.clone())),
                None => Err(error),
            }
        }
    }
}

/// Creates a predicate validator.
pub fn satisfying<T, F>(predicate: F) -> Satisfies<T, F>
where
    F: Fn(&T) -> bool,
{
    Satisfies::new(predicate)
}

// ============================================================================
// TESTS
// ============================================================================
