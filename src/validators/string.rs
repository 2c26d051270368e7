//! String validators

use crate::foundation::GuardError;

crate::validator! {
    /// Validates that a string has at least one non-whitespace character.
    ///
    /// Whitespace is judged per [`char::is_whitespace`], so Unicode
    /// whitespace counts as blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use precept::validators::not_blank;
    /// use precept::foundation::Validate;
    ///
    /// let validator = not_blank();
    /// assert!(validator.validate("hello").is_ok());
    /// assert!(validator.validate("  x  ").is_ok());
    /// assert!(validator.validate("").is_err());
    /// assert!(validator.validate(" \t\n").is_err());
    /// ```
    pub NotBlank for str;
    rule(input) { input.chars().any(|c| !c.is_whitespace()) }
    error(input) { GuardError::blank() }
    fn not_blank();
}

// ============================================================================
// TESTS
// ============================================================================
