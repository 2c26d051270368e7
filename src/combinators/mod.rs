//! Validator combinators
//!
//! Building blocks for composing validators:
//!
//! - [`And`] / [`Or`] / [`Not`] — logical composition
//! - [`Optional`] — absence passes, presence is checked
//! - [`Each`] — per-element validation of slices
//! - [`WithMessage`] — custom failure messages
//!
//! Most compose through the fluent methods on
//! [`ValidateExt`](crate::foundation::ValidateExt); the free functions
//! here are for point-free construction.

pub mod and;
pub mod each;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;

pub use and::{And, and};
pub use each::{Each, each};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
