//! Error types for failed precondition checks
//!
//! A failed guard produces a [`GuardError`]: the violated-condition kind,
//! a stable snake_case code, a fixed English message, the offending
//! argument's label when one was supplied, and display params.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inline storage for the typical 0-3 display params of a guard failure.
type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// GUARD KIND
// ============================================================================

/// The category of a violated precondition.
///
/// Callers that want to special-case bound failures (retry with clamped
/// input, say) can match on [`GuardKind::OutOfRange`] without parsing
/// error codes.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GuardKind {
    /// A value was absent where presence was required.
    #[error("null violation")]
    NullViolation,

    /// A value failed a shape check: blank string, negative number,
    /// predicate failure, wrong runtime type, offending sequence element.
    #[error("invalid argument")]
    InvalidArgument,

    /// A value fell outside a bounded interval.
    #[error("out of range")]
    OutOfRange,
}

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A structured precondition failure.
///
/// # Examples
///
/// ```rust
/// use precept::foundation::{GuardError, GuardKind};
///
/// let error = GuardError::new(
///     GuardKind::InvalidArgument,
///     "not_blank",
///     "String must contain a non-whitespace character",
/// )
/// .with_label("comment");
///
/// assert_eq!(error.kind, GuardKind::InvalidArgument);
/// assert_eq!(error.label.as_deref(), Some("comment"));
/// ```
#[derive(Debug, Clone)]
pub struct GuardError {
    /// The violated-condition category.
    pub kind: GuardKind,

    /// Stable snake_case code for programmatic handling.
    ///
    /// Examples: "not_null", "in_range", "all_satisfy"
    pub code: Cow<'static, str>,

    /// Fixed English description of the violated condition.
    pub message: Cow<'static, str>,

    /// Optional label identifying which argument the failure pertains to.
    pub label: Option<Cow<'static, str>>,

    /// Display params as ordered key-value pairs (typically 0-3).
    ///
    /// Example: `[("min", "0"), ("actual", "-3")]`
    pub params: Params,
}

impl GuardError {
    /// Creates a new guard error with a kind, code, and message.
    ///
    /// Static strings incur no allocation; dynamic strings allocate only
    /// when needed.
    pub fn new(
        kind: GuardKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            label: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the argument label for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Replaces the message, keeping kind, code, label, and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces the code, keeping everything else.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Adds a display param.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a param value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "kind": self.kind,
            "code": self.code,
            "message": self.message,
            "label": self.label,
            "params": params,
        })
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "[{}] {}: {}", label, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for GuardError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl GuardError {
    /// Creates a "not_null" error.
    #[must_use]
    pub fn null() -> Self {
        Self::new(GuardKind::NullViolation, "not_null", "Value is required")
    }

    /// Creates a "not_blank" error.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(
            GuardKind::InvalidArgument,
            "not_blank",
            "String must contain a non-whitespace character",
        )
    }

    /// Creates a "not_negative" error.
    pub fn negative(actual: impl fmt::Display) -> Self {
        Self::new(
            GuardKind::InvalidArgument,
            "not_negative",
            "Value must not be negative",
        )
        .with_param("actual", actual.to_string())
    }

    /// Creates an "in_range" error. Both bounds are inclusive.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            GuardKind::OutOfRange,
            "in_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "at_least" error.
    pub fn below_min<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new(
            GuardKind::InvalidArgument,
            "at_least",
            format!("Value must be at least {min}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "at_most" error.
    pub fn above_max<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new(
            GuardKind::InvalidArgument,
            "at_most",
            format!("Value must be at most {max}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "not_empty" error for a zero-length sequence.
    #[must_use]
    pub fn empty_sequence() -> Self {
        Self::new(
            GuardKind::InvalidArgument,
            "not_empty",
            "Sequence must not be empty",
        )
    }

    /// Creates a "satisfies" error.
    #[must_use]
    pub fn unsatisfied() -> Self {
        Self::new(
            GuardKind::InvalidArgument,
            "satisfies",
            "Value must satisfy the predicate",
        )
    }

    /// Creates an "instance_of" error.
    pub fn wrong_type(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new(
            GuardKind::InvalidArgument,
            "instance_of",
            format!("Value must be of type {expected}"),
        )
        .with_param("expected", expected)
    }
}

// ============================================================================
// RESULT EXTENSION
// ============================================================================

/// Extension methods for `Result<T, GuardError>`.
///
/// Guards come in one shape; the optional label and custom message are
/// attached to the `Err` after the fact, in the style of context-adding
/// error extensions:
///
/// ```rust
/// use precept::guard;
/// use precept::foundation::GuardResultExt;
///
/// let err = guard::not_negative(-3_i64).labeled("retry_count").unwrap_err();
/// assert_eq!(err.label.as_deref(), Some("retry_count"));
/// ```
pub trait GuardResultExt<T> {
    /// Attaches an argument label to the error, if any.
    fn labeled(self, label: impl Into<Cow<'static, str>>) -> Result<T, GuardError>;

    /// Replaces the error message, if any.
    fn message(self, message: impl Into<Cow<'static, str>>) -> Result<T, GuardError>;
}

impl<T> GuardResultExt<T> for Result<T, GuardError> {
    fn labeled(self, label: impl Into<Cow<'static, str>>) -> Result<T, GuardError> {
        self.map_err(|e| e.with_label(label))
    }

    fn message(self, message: impl Into<Cow<'static, str>>) -> Result<T, GuardError> {
        self.map_err(|e| e.with_message(message))
    }
}

// ============================================================================
// TESTS
// ============================================================================
