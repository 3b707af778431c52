//! Shared deterministic types for reporter core logic.
//!
//! These types define stable contracts between the core and the boundary
//! adapters. Serialized field names are part of the JSON output format.

use serde::{Deserialize, Serialize};

/// Signed integer operand (native 64-bit word).
pub type Operand = i64;

/// Two operands in evaluation order. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandPair {
    a: Operand,
    b: Operand,
}

impl OperandPair {
    pub fn new(a: Operand, b: Operand) -> Self {
        Self { a, b }
    }

    /// Left operand (dividend).
    pub fn a(&self) -> Operand {
        self.a
    }

    /// Right operand (divisor).
    pub fn b(&self) -> Operand {
        self.b
    }
}

/// Results of the five basic operations, in report order.
///
/// When `division_by_zero` is set, `quotient` and `remainder` hold the
/// sentinel `0` and no division was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticReport {
    pub sum: Operand,
    pub difference: Operand,
    pub product: Operand,
    pub quotient: Operand,
    pub remainder: Operand,
    pub division_by_zero: bool,
}

/// How the five operations behave on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's complement wraparound; evaluation never fails.
    #[default]
    Wrapping,
    /// The first overflowing operation is reported as an error.
    Checked,
}

/// Summary of the decimal digits of one integer's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSummary {
    pub digit_sum: u64,
    /// `1` when no digits were visited (input `0`).
    pub digit_product: u64,
    pub digit_count: u32,
    /// Truncating mean `digit_sum / digit_count`, `0` for no digits.
    pub average: u64,
}
