//! Sequence validation over a materialized buffer
//!
//! A lazily-produced sequence is drained into an ordered, immutable
//! buffer exactly once; chained checks then inspect the buffer without
//! ever re-enumerating the source:
//!
//! ```rust
//! use precept::sequence::materialize;
//!
//! let shards = materialize([3_u32, 1, 4])
//!     .labeled("shards")
//!     .not_empty()?
//!     .all_satisfy(|n| *n < 16)?;
//!
//! assert_eq!(shards.as_slice(), &[3, 1, 4]);
//! # Ok::<(), precept::foundation::GuardError>(())
//! ```
//!
//! Each check consumes the buffer and hands it back on success, so a
//! chain is written with `?` and a failed check aborts the rest of the
//! chain by construction. Terminal access ([`Sequence::as_slice`],
//! iteration, indexing) borrows and can happen at any point without
//! invalidating the buffer.
//!
//! # Fallible sources
//!
//! A source that can fail mid-pull is an iterator of `Result`. By
//! default the first source error propagates and the partial buffer is
//! discarded; [`OnSourceError::Truncate`] instead stops draining at the
//! first error and keeps the elements gathered so far as the final
//! buffer. There is no retry: a source that has failed once is never
//! pulled again.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use thiserror::Error;

use crate::combinators::Each;
use crate::foundation::{GuardError, GuardResult, Validate};
use crate::validators::predicate::Satisfies;
use crate::validators::{not_empty, required};

// ============================================================================
// MATERIALIZATION
// ============================================================================

/// Policy for source errors encountered while draining a fallible
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OnSourceError {
    /// Return the source error immediately, discarding the partial
    /// buffer (default).
    #[default]
    Propagate,
    /// Stop draining at the first error and keep the partial buffer.
    Truncate,
}

/// Drains an infallible source into a [`Sequence`] buffer.
///
/// The source is enumerated exactly once, here; no chained check ever
/// touches it again.
pub fn materialize<I>(source: I) -> Sequence<I::Item>
where
    I: IntoIterator,
{
    source.into_iter().collect()
}

/// Drains a fallible source into a [`Sequence`] buffer, applying the
/// given source-error policy.
///
/// # Examples
///
/// ```rust
/// use precept::sequence::{OnSourceError, try_materialize};
///
/// let source = vec![Ok(1), Ok(2), Err("disk gone"), Ok(4)];
///
/// // Default policy: the error propagates, the partial buffer is lost.
/// assert!(try_materialize(source.clone(), OnSourceError::Propagate).is_err());
///
/// // Truncate: keep what was gathered before the failure.
/// let seq = try_materialize(source, OnSourceError::Truncate).unwrap();
/// assert_eq!(seq.as_slice(), &[1, 2]);
/// ```
pub fn try_materialize<I, T, E>(source: I, on_error: OnSourceError) -> Result<Sequence<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut items = Vec::new();
    for item in source {
        match item {
            Ok(value) => items.push(value),
            Err(error) => match on_error {
                OnSourceError::Propagate => return Err(error),
                OnSourceError::Truncate => break,
            },
        }
    }
    Ok(Sequence { items, label: None })
}

// ============================================================================
// SEQUENCE
// ============================================================================

/// An ordered, immutable, indexable buffer of validated elements.
///
/// Created by [`materialize`] or [`try_materialize`]; never mutated,
/// re-ordered, or re-materialized afterwards. Checks consume and return
/// the buffer; terminal access borrows it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    items: Vec<T>,
    label: Option<Cow<'static, str>>,
}

impl<T> Sequence<T> {
    /// Attaches a diagnostic label naming the argument this sequence
    /// came from. Failures from later checks carry it.
    #[must_use = "builder methods must be chained or built"]
    pub fn labeled(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The diagnostic label, if one was attached.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The buffered elements as a read-only slice.
    ///
    /// Callable at any point in a chain; does not invalidate the buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates the buffered elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of buffered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unwraps the buffer into its backing `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn decorate(&self, error: GuardError) -> GuardError {
        match &self.label {
            Some(label) => error.with_label(label.clone()),
            None => error,
        }
    }

    // ------------------------------------------------------------------
    // Chainable checks
    // ------------------------------------------------------------------

    /// Fails when the buffer holds zero elements.
    pub fn not_empty(self) -> GuardResult<Self> {
        match not_empty::<T>().validate(&self.items) {
            Ok(()) => Ok(self),
            Err(error) => Err(self.decorate(error)),
        }
    }

    /// Fails unless every element satisfies the predicate.
    ///
    /// The first offending element aborts the check; its index is in the
    /// error params.
    pub fn all_satisfy<F>(self, predicate: F) -> GuardResult<Self>
    where
        F: Fn(&T) -> bool,
    {
        match Each::new(Satisfies::new(predicate)).validate(&self.items) {
            Ok(()) => Ok(self),
            Err(error) => Err(self.decorate(error.with_code("all_satisfy"))),
        }
    }

    /// Fails unless every element satisfies the predicate, with a custom
    /// failure message.
    pub fn all_satisfy_msg<F>(
        self,
        predicate: F,
        message: impl Into<Cow<'static, str>>,
    ) -> GuardResult<Self>
    where
        F: Fn(&T) -> bool,
    {
        match Each::new(Satisfies::new(predicate).with_message(message)).validate(&self.items) {
            Ok(()) => Ok(self),
            Err(error) => Err(self.decorate(error.with_code("all_satisfy"))),
        }
    }
}

impl<T> Sequence<Option<T>> {
    /// Fails when any buffer slot holds an absent element.
    pub fn all_present(self) -> GuardResult<Self> {
        match Each::new(required::<T>()).validate(&self.items) {
            Ok(()) => Ok(self),
            Err(error) => Err(self.decorate(error.with_code("all_present"))),
        }
    }

    /// Requires every element present and unwraps the buffer into a
    /// `Sequence<T>`.
    pub fn require_all(self) -> GuardResult<Sequence<T>> {
        let checked = self.all_present()?;
        Ok(Sequence {
            items: checked.items.into_iter().flatten().collect(),
            label: checked.label,
        })
    }
}

// ============================================================================
// STD TRAITS
// ============================================================================

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("items", &self.items)
            .field("label", &self.label)
            .finish()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, label: None }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            label: None,
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// COMPOSITE ENTRY POINTS
// ============================================================================

/// Error from a fallible-source composite entry point: either the
/// source failed while being drained, or a chained check rejected the
/// buffer.
#[derive(Debug, Error)]
pub enum MaterializeError<E> {
    /// The source sequence failed mid-pull.
    #[error("sequence source failed: {0}")]
    Source(E),
    /// A check rejected the materialized buffer.
    #[error(transparent)]
    Check(#[from] GuardError),
}

/// Materializes a source and requires it non-empty.
pub fn non_empty<I>(source: I) -> GuardResult<Sequence<I::Item>>
where
    I: IntoIterator,
{
    materialize(source).not_empty()
}

/// Materializes a source of optional elements and requires every
/// element present.
pub fn all_present<I, T>(source: I) -> GuardResult<Sequence<Option<T>>>
where
    I: IntoIterator<Item = Option<T>>,
{
    materialize(source).all_present()
}

/// Materializes a source of optional elements and requires it non-empty
/// with every element present.
pub fn non_empty_all_present<I, T>(source: I) -> GuardResult<Sequence<Option<T>>>
where
    I: IntoIterator<Item = Option<T>>,
{
    materialize(source).not_empty()?.all_present()
}

/// Materializes a fallible source under the given policy and requires
/// the buffer non-empty.
pub fn try_non_empty<I, T, E>(
    source: I,
    on_error: OnSourceError,
) -> Result<Sequence<T>, MaterializeError<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let sequence = try_materialize(source, on_error).map_err(MaterializeError::Source)?;
    Ok(sequence.not_empty()?)
}

/// Materializes a fallible source of optional elements under the given
/// policy and requires every element present.
pub fn try_all_present<I, T, E>(
    source: I,
    on_error: OnSourceError,
) -> Result<Sequence<Option<T>>, MaterializeError<E>>
where
    I: IntoIterator<Item = Result<Option<T>, E>>,
{
    let sequence = try_materialize(source, on_error).map_err(MaterializeError::Source)?;
    Ok(sequence.all_present()?)
}

// ============================================================================
// NOT ALL
// ============================================================================

/// Returns `true` when at least one element does not satisfy the
/// predicate.
///
/// The contract [`Sequence::all_satisfy`] is defined against: the check
/// fails exactly when `not_all` holds.
pub fn not_all<I, F>(items: I, predicate: F) -> bool
where
    I: IntoIterator,
    F: Fn(&I::Item) -> bool,
{
    !items.into_iter().all(|item| predicate(&item))
}

// ============================================================================
// TESTS
// ============================================================================
