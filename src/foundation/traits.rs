//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type for compile-time type safety. All
/// validators return `Result<(), GuardError>` for a consistent API.
///
/// # Examples
///
/// ```rust
/// use precept::foundation::{GuardError, GuardKind, Validate};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), GuardError> {
///         if input.len() >= self.min {
///             Ok(())
///         } else {
///             Err(GuardError::new(
///                 GuardKind::InvalidArgument,
///                 "min_length",
///                 format!("Must be at least {} characters", self.min),
///             ))
///         }
///     }
/// }
///
/// assert!(MinLength { min: 3 }.validate("hello").is_ok());
/// assert!(MinLength { min: 3 }.validate("hi").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(GuardError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::GuardError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`],
/// providing a fluent API for composing validators.
///
/// # Examples
///
/// ```rust
/// use precept::prelude::*;
///
/// let bounded = at_least(0).and(at_most(100));
/// assert!(bounded.validate(&42).is_ok());
/// assert!(bounded.validate(&-1).is_err());
/// assert!(bounded.validate(&101).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass. Short-circuits on the first
    /// success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Makes a validator accept `Option` input.
    ///
    /// The resulting validator passes on `None` and applies the inner
    /// check only when a value is present. Absence is never itself a
    /// violation.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
