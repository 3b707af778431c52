//! Decimal digit decomposition.

use crate::core::types::{DigitSummary, Operand};

/// Summarize the decimal digits of `|n|`.
///
/// `0` visits no digits and yields the identities (sum `0`, product `1`).
pub fn decompose(n: Operand) -> DigitSummary {
    let mut remaining = n.unsigned_abs();
    let mut digit_sum = 0u64;
    let mut digit_product = 1u64;
    let mut digit_count = 0u32;

    while remaining != 0 {
        let digit = remaining % 10;
        remaining /= 10;
        digit_sum += digit;
        digit_product *= digit;
        digit_count += 1;
    }

    let average = if digit_count == 0 {
        0
    } else {
        digit_sum / u64::from(digit_count)
    };

    DigitSummary {
        digit_sum,
        digit_product,
        digit_count,
        average,
    }
}
