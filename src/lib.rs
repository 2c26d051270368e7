//! # precept
//!
//! Precondition checks for function arguments: scalar guard functions
//! that hand the argument back unchanged or fail with a structured
//! error, plus a sequence validator that materializes a lazy source
//! exactly once and runs chained checks against the buffer.
//!
//! ## Quick Start
//!
//! ```rust
//! use precept::prelude::*;
//!
//! fn resize(width: u32, label: &str, weights: Vec<Option<f64>>) -> GuardResult<usize> {
//!     let width = guard::in_range(width, 1, 4096).labeled("width")?;
//!     let label = guard::not_blank(label).labeled("label")?;
//!     let weights = materialize(weights)
//!         .labeled("weights")
//!         .not_empty()?
//!         .all_present()?;
//!     let _ = (width, label);
//!     Ok(weights.len())
//! }
//!
//! assert_eq!(resize(640, "thumbnail", vec![Some(1.0)]).unwrap(), 1);
//! assert!(resize(0, "thumbnail", vec![Some(1.0)]).is_err());
//! ```
//!
//! ## Layers
//!
//! - [`guard`] — free functions checking one argument against one
//!   condition (`check(value) -> value | failure`).
//! - [`sequence`] — eager one-time materialization of a lazy sequence
//!   into an immutable buffer, with chainable buffer checks.
//! - [`validators`] + [`combinators`] — the composable engine both
//!   surfaces delegate to; use the [`validator!`] macro to define your
//!   own.
//!
//! Every failure is a [`foundation::GuardError`] carrying the violated
//! condition's [`foundation::GuardKind`], a stable code, a fixed English
//! message, and the offending argument's label when supplied. Failures
//! are signaled immediately at the point of detection and propagate with
//! `?`; the library never recovers on the caller's behalf.

// GuardError is the fundamental error type for all checks — boxing it
// would add indirection to every validation call for no practical
// benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex
// types that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
pub mod guard;
mod macros;
pub mod prelude;
pub mod sequence;
pub mod validators;
