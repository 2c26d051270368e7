//! Core validation types and traits
//!
//! The fundamental building blocks of the crate:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`GuardError`], [`GuardKind`], [`GuardResultExt`]
//!
//! # Architecture
//!
//! Validators are generic over their input type, providing compile-time
//! guarantees, and compose through the fluent [`ValidateExt`] methods:
//!
//! ```rust
//! use precept::prelude::*;
//!
//! let percentage = at_least(0).and(at_most(100));
//! assert!(percentage.validate(&50).is_ok());
//! ```
//!
//! Every check fails with a structured [`GuardError`] carrying the
//! violated-condition kind, a stable code, and a fixed English message.
//! Failures are signaled immediately at the point of detection; nothing
//! in this crate batches multiple violations into one report.

pub mod error;
pub mod traits;

pub use error::{GuardError, GuardKind, GuardResultExt};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of a guard check: the validated value, or the failure.
pub type GuardResult<T> = Result<T, GuardError>;
