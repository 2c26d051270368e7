//! Prelude module for convenient imports.
//!
//! A single `use precept::prelude::*;` brings in the core traits, the
//! error types, every built-in validator and combinator, the scalar
//! [`guard`] functions (as a module, to keep their names from shadowing
//! the validator factories), and the sequence surface.
//!
//! # Examples
//!
//! ```rust
//! use precept::prelude::*;
//!
//! let retries = guard::not_negative(3).labeled("retries")?;
//! let shards = materialize([1_u32, 2, 3]).not_empty()?;
//! let bounded = at_least(0).and(at_most(100));
//! assert!(bounded.validate(&retries).is_ok());
//! assert_eq!(shards.len(), 3);
//! # Ok::<(), precept::foundation::GuardError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    GuardError, GuardKind, GuardResult, GuardResultExt, Validate, ValidateExt,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Each, Not, Optional, Or, WithMessage, and, each, not, optional, or, with_message,
};

// ============================================================================
// GUARDS AND SEQUENCES
// ============================================================================

pub use crate::guard;
pub use crate::sequence::{
    self, MaterializeError, OnSourceError, Sequence, materialize, not_all, try_materialize,
};
