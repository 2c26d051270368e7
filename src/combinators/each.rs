//! EACH combinator - validates every element of a slice
//!
//! Failure is signaled at the first offending element; this crate never
//! batches multiple violations into one report.

use crate::foundation::{GuardError, GuardKind, Validate};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies a validator to every element of a slice.
///
/// Stops at the first offending element and reports its index in the
/// error params.
///
/// # Examples
///
/// ```rust
/// use precept::prelude::*;
///
/// let validator = each(not_negative::<i64>());
/// assert!(validator.validate(&[1, 2, 3]).is_ok());
///
/// let err = validator.validate(&[1, -2, -3]).unwrap_err();
/// assert_eq!(err.param("index"), Some("1"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Creates a new EACH combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), GuardError> {
        for (index, element) in input.iter().enumerate() {
            if let Err(e) = self.inner.validate(element) {
                return Err(GuardError::new(
                    GuardKind::InvalidArgument,
                    "each",
                    format!("Element at index {index} failed: {}", e.message),
                )
                .with_param("index", index.to_string()));
            }
        }
        Ok(())
    }
}

/// Creates an EACH combinator.
pub fn each<V>(validator: V) -> Each<V> {
    Each::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================
