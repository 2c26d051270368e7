//! OR combinator - logical disjunction of validators

use crate::foundation::{GuardError, Validate};

/// Combines two validators with logical OR.
///
/// At least one validator must pass. Short-circuits on the first
/// success; when both fail, the right-hand error is returned.
///
/// # Examples
///
/// ```rust
/// use precept::prelude::*;
///
/// // System ports or ephemeral ports, nothing in between.
/// let port = at_most(1023).or(at_least(49152));
/// assert!(port.validate(&80).is_ok());
/// assert!(port.validate(&60000).is_ok());
/// assert!(port.validate(&8080).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), GuardError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(_) => self.right.validate(input),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
