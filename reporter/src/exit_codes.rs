//! Stable exit codes for reporter CLI commands.

/// Report printed (including the division-by-zero case).
pub const OK: i32 = 0;
/// Unreadable config, I/O failure, or other unexpected errors.
pub const INVALID: i32 = 1;
/// Wrong operand count or a token that is not an integer literal.
pub const USAGE: i32 = 2;
/// An operation overflowed under the `checked` overflow policy.
pub const OVERFLOW: i32 = 3;
