//! Built-in validators
//!
//! Ready-to-use validators for the conditions the crate's guard functions
//! check. Each is a plain struct implementing
//! [`Validate`](crate::foundation::Validate), composable through
//! [`ValidateExt`](crate::foundation::ValidateExt).
//!
//! # Categories
//!
//! - **Nullable**: [`Required`]
//! - **Numeric**: [`NotNegative`], [`Min`], [`Max`], [`InRange`]
//! - **String**: [`NotBlank`]
//! - **Collection**: [`NotEmpty`]
//! - **Predicate**: [`Satisfies`]
//!
//! # Examples
//!
//! ```rust
//! use precept::prelude::*;
//!
//! let percentage = in_range(0, 100);
//! assert!(percentage.validate(&42).is_ok());
//!
//! let optional_port = at_least(1024).optional();
//! assert!(optional_port.validate(&None).is_ok());
//! assert!(optional_port.validate(&Some(80)).is_err());
//! ```

pub mod collection;
pub mod nullable;
pub mod numeric;
pub mod predicate;
pub mod string;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use collection::{NotEmpty, not_empty};
pub use nullable::{Required, required};
pub use numeric::{InRange, Max, Min, NotNegative, Zero, at_least, at_most, in_range, not_negative};
pub use predicate::{Satisfies, satisfying};
pub use string::{NotBlank, not_blank};
