//! Deterministic, pure arithmetic shared by the reporter commands.
//!
//! Core modules must be free of I/O side effects. They operate on plain
//! integers and return deterministic outputs suitable for tests.

pub mod arithmetic;
pub mod digits;
pub mod types;
