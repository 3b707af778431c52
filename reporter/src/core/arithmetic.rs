//! The five-operation arithmetic report.
//!
//! Division truncates toward zero (Rust's native signed `/` and `%`), so the
//! remainder carries the sign of the dividend. A zero divisor is a reported
//! state, never an error: `quotient` and `remainder` are set to `0` and
//! `division_by_zero` is raised.

use std::fmt;

use thiserror::Error;

use crate::core::types::{ArithmeticReport, Operand, OperandPair, OverflowPolicy};

/// Operation named in an overflow report, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Sum,
    Difference,
    Product,
    Quotient,
    Remainder,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Sum => "sum",
            Operation::Difference => "difference",
            Operation::Product => "product",
            Operation::Quotient => "quotient",
            Operation::Remainder => "remainder",
        };
        f.write_str(name)
    }
}

/// An operation overflowed the operand type under [`OverflowPolicy::Checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("overflow in {operation}")]
pub struct OverflowError {
    pub operation: Operation,
}

/// Evaluate all five operations, wrapping on overflow.
///
/// Never panics: `i64::MIN / -1` yields quotient `i64::MIN` and remainder `0`.
pub fn evaluate(a: Operand, b: Operand) -> ArithmeticReport {
    let (quotient, remainder, division_by_zero) = if b == 0 {
        (0, 0, true)
    } else {
        (a.wrapping_div(b), a.wrapping_rem(b), false)
    };

    ArithmeticReport {
        sum: a.wrapping_add(b),
        difference: a.wrapping_sub(b),
        product: a.wrapping_mul(b),
        quotient,
        remainder,
        division_by_zero,
    }
}

/// Evaluate all five operations, failing on the first one that overflows.
///
/// A zero divisor is still reported through `division_by_zero`.
pub fn evaluate_checked(a: Operand, b: Operand) -> Result<ArithmeticReport, OverflowError> {
    let sum = checked(a.checked_add(b), Operation::Sum)?;
    let difference = checked(a.checked_sub(b), Operation::Difference)?;
    let product = checked(a.checked_mul(b), Operation::Product)?;

    if b == 0 {
        return Ok(ArithmeticReport {
            sum,
            difference,
            product,
            quotient: 0,
            remainder: 0,
            division_by_zero: true,
        });
    }

    // Division only overflows for `i64::MIN / -1`, whose sum has already
    // failed above, so these two checks never fire in practice.
    let quotient = checked(a.checked_div(b), Operation::Quotient)?;
    let remainder = checked(a.checked_rem(b), Operation::Remainder)?;
    Ok(ArithmeticReport {
        sum,
        difference,
        product,
        quotient,
        remainder,
        division_by_zero: false,
    })
}

/// Evaluate `pair` under the given overflow policy.
pub fn evaluate_with(
    pair: OperandPair,
    policy: OverflowPolicy,
) -> Result<ArithmeticReport, OverflowError> {
    match policy {
        OverflowPolicy::Wrapping => Ok(evaluate(pair.a(), pair.b())),
        OverflowPolicy::Checked => evaluate_checked(pair.a(), pair.b()),
    }
}

fn checked(value: Option<Operand>, operation: Operation) -> Result<Operand, OverflowError> {
    value.ok_or(OverflowError { operation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn report(
        sum: Operand,
        difference: Operand,
        product: Operand,
        quotient: Operand,
        remainder: Operand,
        division_by_zero: bool,
    ) -> ArithmeticReport {
        ArithmeticReport {
            sum,
            difference,
            product,
            quotient,
            remainder,
            division_by_zero,
        }
    }

    #[test]
    fn evaluate_positive_operands() {
        assert_eq!(evaluate(10, 3), report(13, 7, 30, 3, 1, false));
    }

    #[test]
    fn evaluate_truncates_toward_zero() {
        let result = evaluate(-10, 3);
        assert_eq!(result.quotient, -3);
        assert_eq!(result.remainder, -1);

        let result = evaluate(10, -3);
        assert_eq!(result.quotient, -3);
        assert_eq!(result.remainder, 1);
    }

    #[test]
    fn evaluate_zero_divisor_sets_flag_and_sentinels() {
        assert_eq!(evaluate(7, 0), report(7, 7, 0, 0, 0, true));
    }

    #[test]
    fn evaluate_min_by_negative_one_wraps() {
        let result = evaluate(i64::MIN, -1);
        assert_eq!(result.quotient, i64::MIN);
        assert_eq!(result.remainder, 0);
        assert_eq!(result.product, i64::MIN);
        assert_eq!(result.sum, i64::MAX);
    }

    #[test]
    fn evaluate_checked_reports_first_overflow() {
        let err = evaluate_checked(i64::MAX, 1).expect_err("sum overflows");
        assert_eq!(err.operation, Operation::Sum);

        let err = evaluate_checked(i64::MIN, 1).expect_err("difference overflows");
        assert_eq!(err.operation, Operation::Difference);

        let err = evaluate_checked(i64::MAX / 2 + 1, 2).expect_err("product overflows");
        assert_eq!(err.operation, Operation::Product);
        assert_eq!(err.to_string(), "overflow in product");
    }

    #[test]
    fn evaluate_checked_min_by_negative_one_fails_in_sum() {
        let err = evaluate_checked(i64::MIN, -1).expect_err("overflow");
        assert_eq!(err.operation, Operation::Sum);
    }

    #[test]
    fn evaluate_checked_zero_divisor_is_not_an_error() {
        let result = evaluate_checked(7, 0).expect("no overflow");
        assert_eq!(result, report(7, 7, 0, 0, 0, true));
    }

    #[test]
    fn evaluate_with_dispatches_on_policy() {
        let pair = OperandPair::new(i64::MAX, 1);
        let wrapped = evaluate_with(pair, OverflowPolicy::Wrapping).expect("wrapping");
        assert_eq!(wrapped.sum, i64::MIN);
        assert!(evaluate_with(pair, OverflowPolicy::Checked).is_err());
    }

    proptest! {
        #[test]
        fn quotient_and_remainder_reconstruct_dividend(a: i64, b: i64) {
            prop_assume!(b != 0);
            let result = evaluate(a, b);
            prop_assert_eq!(result.quotient.wrapping_mul(b).wrapping_add(result.remainder), a);
            prop_assert!(!result.division_by_zero);
        }

        #[test]
        fn remainder_sign_follows_dividend(a: i64, b: i64) {
            prop_assume!(b != 0);
            let result = evaluate(a, b);
            prop_assert!(result.remainder == 0 || (result.remainder < 0) == (a < 0));
            prop_assert!(result.remainder.unsigned_abs() < b.unsigned_abs());
        }

        #[test]
        fn sum_difference_product_match_operands(a: i64, b: i64) {
            let result = evaluate(a, b);
            prop_assert_eq!(result.sum, a.wrapping_add(b));
            prop_assert_eq!(result.difference, a.wrapping_sub(b));
            prop_assert_eq!(result.product, a.wrapping_mul(b));
        }

        #[test]
        fn zero_divisor_always_reports_sentinels(a: i64) {
            let result = evaluate(a, 0);
            prop_assert!(result.division_by_zero);
            prop_assert_eq!(result.quotient, 0);
            prop_assert_eq!(result.remainder, 0);
        }

        #[test]
        fn evaluate_is_idempotent(a: i64, b: i64) {
            prop_assert_eq!(evaluate(a, b), evaluate(a, b));
        }

        #[test]
        fn checked_agrees_with_wrapping_without_overflow(a: i64, b: i64) {
            if let Ok(checked) = evaluate_checked(a, b) {
                prop_assert_eq!(checked, evaluate(a, b));
            }
        }

        #[test]
        fn checked_agrees_with_wrapping_for_small_operands(a: i32, b: i32) {
            let (a, b) = (i64::from(a), i64::from(b));
            let checked = evaluate_checked(a, b).expect("i32 operands fit in i64");
            prop_assert_eq!(checked, evaluate(a, b));
        }

        #[test]
        fn checked_fails_exactly_when_an_operation_wraps(a: i64, b: i64) {
            let wraps = a.checked_add(b).is_none()
                || a.checked_sub(b).is_none()
                || a.checked_mul(b).is_none();
            prop_assert_eq!(evaluate_checked(a, b).is_err(), wraps);
        }
    }
}
