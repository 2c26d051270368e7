//! Scalar guard functions
//!
//! Free functions that check one argument against one condition and hand
//! the argument back unchanged, for use at the top of an operation:
//!
//! ```rust
//! use precept::guard;
//! use precept::foundation::{GuardResult, GuardResultExt};
//!
//! fn schedule(name: &str, retries: i32, priority: Option<i32>) -> GuardResult<()> {
//!     let name = guard::not_blank(name).labeled("name")?;
//!     let retries = guard::not_negative(retries).labeled("retries")?;
//!     let priority = guard::in_range_opt(priority, 0, 9).labeled("priority")?;
//!     let _ = (name, retries, priority);
//!     Ok(())
//! }
//!
//! assert!(schedule("reindex", 3, None).is_ok());
//! assert!(schedule("reindex", -1, None).is_err());
//! ```
//!
//! Each guard is a thin wrapper over the corresponding validator in
//! [`validators`](crate::validators), so a condition has exactly one
//! implementation whichever surface checks it. The optional label is
//! attached afterwards via
//! [`GuardResultExt::labeled`](crate::foundation::GuardResultExt);
//! `_opt` variants pass an absent value through unchecked.

use std::any::Any;
use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::{GuardError, GuardResult, Validate, ValidateExt};
use crate::validators;
use crate::validators::numeric::Zero;
use crate::validators::predicate::Satisfies;

// ============================================================================
// PRESENCE
// ============================================================================

/// Requires a value to be present and returns the contained value.
///
/// # Examples
///
/// ```rust
/// use precept::guard;
///
/// assert_eq!(guard::not_null(Some(7)).unwrap(), 7);
/// assert!(guard::not_null(None::<i32>).is_err());
/// ```
pub fn not_null<T>(value: Option<T>) -> GuardResult<T> {
    match value {
        Some(inner) => Ok(inner),
        None => Err(GuardError::null()),
    }
}

// ============================================================================
// STRINGS
// ============================================================================

/// Requires a string to contain at least one non-whitespace character.
///
/// Accepts anything string-like and returns it unchanged, so both
/// borrowed and owned inputs survive the check without copying.
pub fn not_blank<S: AsRef<str>>(value: S) -> GuardResult<S> {
    validators::not_blank().validate(value.as_ref())?;
    Ok(value)
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Requires a number to be zero or greater.
pub fn not_negative<T: Zero>(value: T) -> GuardResult<T> {
    validators::not_negative::<T>().validate(&value)?;
    Ok(value)
}

/// Requires a present number to be zero or greater; absence passes.
pub fn not_negative_opt<T: Zero>(value: Option<T>) -> GuardResult<Option<T>> {
    validators::not_negative::<T>().optional().validate(&value)?;
    Ok(value)
}

/// Requires a value to lie within an inclusive range.
///
/// Both bounds are part of the accepted interval; a failure carries
/// [`GuardKind::OutOfRange`](crate::foundation::GuardKind::OutOfRange) so
/// callers can special-case bound violations.
///
/// # Examples
///
/// ```rust
/// use precept::guard;
/// use precept::foundation::GuardKind;
///
/// assert_eq!(guard::in_range(10, 0, 10).unwrap(), 10);
///
/// let err = guard::in_range(42, 0, 10).unwrap_err();
/// assert_eq!(err.kind, GuardKind::OutOfRange);
/// ```
pub fn in_range<T>(value: T, min: T, max: T) -> GuardResult<T>
where
    T: PartialOrd + Display + Copy,
{
    validators::in_range(min, max).validate(&value)?;
    Ok(value)
}

/// Requires a present value to lie within an inclusive range; absence
/// passes.
pub fn in_range_opt<T>(value: Option<T>, min: T, max: T) -> GuardResult<Option<T>>
where
    T: PartialOrd + Display + Copy,
{
    validators::in_range(min, max).optional().validate(&value)?;
    Ok(value)
}

// ============================================================================
// ORDERED BOUNDS
// ============================================================================

/// Requires a value to be no less than a minimum.
pub fn at_least<T>(value: T, min: T) -> GuardResult<T>
where
    T: PartialOrd + Display + Copy,
{
    validators::at_least(min).validate(&value)?;
    Ok(value)
}

/// Requires a value to be no greater than a maximum.
pub fn at_most<T>(value: T, max: T) -> GuardResult<T>
where
    T: PartialOrd + Display + Copy,
{
    validators::at_most(max).validate(&value)?;
    Ok(value)
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Requires a value to satisfy an arbitrary predicate.
///
/// # Examples
///
/// ```rust
/// use precept::guard;
///
/// assert_eq!(guard::satisfies("abc", |s| s.len() == 3).unwrap(), "abc");
/// assert!(guard::satisfies("ab", |s| s.len() == 3).is_err());
/// ```
pub fn satisfies<T, F>(value: T, predicate: F) -> GuardResult<T>
where
    F: Fn(&T) -> bool,
{
    Satisfies::new(predicate).validate(&value)?;
    Ok(value)
}

/// Requires a value to satisfy a predicate, failing with a custom
/// message.
///
/// # Examples
///
/// ```rust
/// use precept::guard;
///
/// let err = guard::satisfies_msg("ab", |s| s.len() == 3, "wrong length").unwrap_err();
/// assert_eq!(err.message, "wrong length");
/// ```
pub fn satisfies_msg<T, F>(
    value: T,
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> GuardResult<T>
where
    F: Fn(&T) -> bool,
{
    Satisfies::new(predicate).with_message(message).validate(&value)?;
    Ok(value)
}

// ============================================================================
// RUNTIME TYPES
// ============================================================================

/// Requires a `dyn Any` value to be of concrete type `T`, returning the
/// downcast reference.
///
/// Rust has no runtime introspection of generic instantiations, so the
/// check is restricted to closed target types.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use precept::guard;
///
/// let value: &dyn Any = &42_i64;
/// assert_eq!(*guard::instance_of::<i64>(value).unwrap(), 42);
/// assert!(guard::instance_of::<String>(value).is_err());
/// ```
pub fn instance_of<T: Any>(value: &dyn Any) -> GuardResult<&T> {
    value
        .downcast_ref::<T>()
        .ok_or_else(|| GuardError::wrong_type(std::any::type_name::<T>()))
}

// ============================================================================
// TESTS
// ============================================================================
