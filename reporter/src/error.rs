//! Boundary errors raised before the core is invoked.

use thiserror::Error;

/// Raw operand input could not be turned into integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Wrong number of operand tokens.
    #[error("expected {expected} integer operands, found {found}")]
    InvalidArgumentCount { expected: usize, found: usize },

    /// A token is not a base-10 integer literal in range.
    #[error("'{token}' is not a valid integer")]
    InvalidNumericLiteral { token: String },
}
