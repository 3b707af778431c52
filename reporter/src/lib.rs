//! Deterministic integer arithmetic reports for two operands.
//!
//! The crate keeps a strict separation between:
//!
//! - **[`core`]**: Pure arithmetic (the five-operation report, digit
//!   decomposition). No I/O, never panics on valid integers.
//! - **[`io`]**: Boundary adapters (token parsing, rendering, config files).
//!
//! [`commands`] coordinates core logic with I/O to implement CLI commands.

pub mod commands;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
