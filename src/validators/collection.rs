//! Collection validators

use crate::foundation::GuardError;

crate::validator! {
    /// Validates that a slice has at least one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use precept::validators::not_empty;
    /// use precept::foundation::Validate;
    ///
    /// let validator = not_empty::<i32>();
    /// assert!(validator.validate(&[1, 2, 3]).is_ok());
    /// assert!(validator.validate(&[]).is_err());
    /// ```
    pub NotEmpty<T> for [T];
    rule(input) { !input.is_empty() }
    error(input) { GuardError::empty_sequence() }
    fn not_empty();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{GuardKind, Validate};

    #[test]
    fn test_not_empty_accepts_elements() {
        let validator = not_empty::<i32>();
        assert!(validator.validate(&[1]).is_ok());
    }

    #[test]
    fn test_not_empty_rejects_empty() {
        let validator = not_empty::<i32>();
        let err = validator.validate(&[]).unwrap_err();
        assert_eq!(err.kind, GuardKind::InvalidArgument);
        assert_eq!(err.code, "not_empty");
    }
}
