use linecalc::{
    error::ErrorKind,
    evaluate,
    util::num::{
        MAX_VALUE, MIN_VALUE, add, append_digit, check_add, check_concat, check_div, check_mul,
        div, mul, sub,
    },
};
use proptest::prelude::*;

/// Values in range, biased toward the boundaries where the checks matter.
fn value() -> impl Strategy<Value = i64> {
    prop_oneof![MIN_VALUE..=MAX_VALUE,
                -3_037_000_500_i64..=3_037_000_500,
                -2_i64..=2,
                Just(MAX_VALUE),
                Just(MIN_VALUE),
                Just(MAX_VALUE / 2),
                Just(MIN_VALUE / 2)]
}

fn in_range(result: Option<i64>) -> Option<i64> {
    result.filter(|v| *v >= MIN_VALUE)
}

proptest! {
    #[test]
    fn add_agrees_with_checked_add(a in value(), b in value()) {
        prop_assert_eq!(add(a, b).ok(), in_range(a.checked_add(b)));
    }

    #[test]
    fn sub_agrees_with_checked_sub(a in value(), b in value()) {
        prop_assert_eq!(sub(a, b).ok(), in_range(a.checked_sub(b)));
    }

    #[test]
    fn mul_agrees_with_checked_mul(a in value(), b in value()) {
        prop_assert_eq!(mul(a, b).ok(), in_range(a.checked_mul(b)));
    }

    #[test]
    fn div_agrees_with_checked_div(a in value(), b in value()) {
        prop_assert_eq!(div(a, b).ok(), a.checked_div(b));
    }

    #[test]
    fn append_digit_agrees_with_checked_arithmetic(acc in 0..=MAX_VALUE, digit in 0_i64..=9) {
        let expected = acc.checked_mul(10).and_then(|v| v.checked_add(digit));
        prop_assert_eq!(append_digit(acc, digit).ok(), expected);
    }

    #[test]
    fn two_operand_lines_agree_with_checked_arithmetic(a in value(), b in value(), op in 0_usize..4) {
        let (symbol, expected) = match op {
            0 => ("+", in_range(a.checked_add(b))),
            1 => ("-", in_range(a.checked_sub(b))),
            2 => ("*", in_range(a.checked_mul(b))),
            _ => ("/", a.checked_div(b)),
        };
        let result = evaluate(&format!("{a} {symbol} {b}"));
        prop_assert_eq!(result.into_result().ok(), expected);
    }

    #[test]
    fn evaluation_is_deterministic(line in "[0-9 ()+*/-]{0,40}") {
        prop_assert_eq!(evaluate(&line), evaluate(&line));
    }
}

#[test]
fn zero_operands_never_overflow_a_product() {
    assert_eq!(check_mul(0, MIN_VALUE), Ok(()));
    assert_eq!(check_mul(MAX_VALUE, 0), Ok(()));
}

#[test]
fn product_boundaries() {
    assert_eq!(check_mul(MIN_VALUE, -1), Ok(()));
    assert_eq!(check_mul(MAX_VALUE, -1), Ok(()));
    assert_eq!(check_mul(MIN_VALUE, 2), Err(ErrorKind::ArithmeticOverflow));
    assert_eq!(check_mul(-2, MIN_VALUE), Err(ErrorKind::ArithmeticOverflow));
}

#[test]
fn sum_boundaries() {
    assert_eq!(check_add(MAX_VALUE, 0), Ok(()));
    assert_eq!(check_add(MIN_VALUE, 0), Ok(()));
    assert_eq!(check_add(MAX_VALUE, MIN_VALUE), Ok(()));
    assert_eq!(check_add(MAX_VALUE, MAX_VALUE), Err(ErrorKind::ArithmeticOverflow));
    assert_eq!(check_add(MIN_VALUE, MIN_VALUE), Err(ErrorKind::ArithmeticOverflow));
    assert_eq!(check_add(-1, MIN_VALUE), Err(ErrorKind::ArithmeticOverflow));
}

#[test]
fn only_a_zero_divisor_is_rejected() {
    assert_eq!(check_div(1, 0), Err(ErrorKind::DivisionByZero));
    assert_eq!(check_div(0, 0), Err(ErrorKind::DivisionByZero));
    assert_eq!(check_div(MIN_VALUE, -1), Ok(()));
    assert_eq!(div(MIN_VALUE, -1), Ok(MAX_VALUE));
}

#[test]
fn concatenation_boundaries() {
    assert_eq!(check_concat(0, 9), Ok(()));
    assert_eq!(check_concat(MAX_VALUE / 10, 7), Ok(()));
    assert_eq!(check_concat(MAX_VALUE / 10, 8), Err(ErrorKind::ValueOverflow));
    assert_eq!(check_concat(MAX_VALUE / 10 + 1, 0), Err(ErrorKind::ValueOverflow));
}
