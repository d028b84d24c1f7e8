use crate::error::ErrorKind;

/// Largest value an evaluation may produce (`2^63 - 1`).
pub const MAX_VALUE: i64 = i64::MAX;
/// Smallest value an evaluation may produce.
///
/// Defined as `-MAX_VALUE`, one above `i64::MIN`, so that every value in range
/// can be negated without overflow.
pub const MIN_VALUE: i64 = -MAX_VALUE;

const HALF_MAX_VALUE: i64 = MAX_VALUE >> 1;

/// Value substituted for a computation that a check rejected.
pub const PLACEHOLDER: i64 = 0;

/// Checks whether `a * b` stays within `[MIN_VALUE, MAX_VALUE]`.
///
/// Zero operands never overflow. Otherwise `a` must lie in the interval
/// spanned by `MAX_VALUE / b` and `MIN_VALUE / b`; both quotients truncate
/// toward zero, which makes the interval exact.
///
/// ## Errors
/// Returns [`ErrorKind::ArithmeticOverflow`] when the product is out of range.
///
/// ## Example
/// ```
/// use linecalc::{
///     error::ErrorKind,
///     util::num::{MAX_VALUE, check_mul},
/// };
///
/// assert!(check_mul(3, 4).is_ok());
/// assert!(check_mul(0, MAX_VALUE).is_ok());
/// assert_eq!(check_mul(MAX_VALUE, 2), Err(ErrorKind::ArithmeticOverflow));
/// ```
pub const fn check_mul(a: i64, b: i64) -> Result<(), ErrorKind> {
    if a == 0 || b == 0 {
        return Ok(());
    }

    let towards_max = MAX_VALUE / b;
    let towards_min = MIN_VALUE / b;

    let (low, high) = if b > 0 {
        (towards_min, towards_max)
    } else {
        (towards_max, towards_min)
    };

    if a < low || a > high {
        return Err(ErrorKind::ArithmeticOverflow);
    }
    Ok(())
}

/// Checks that `b` can be used as a divisor.
///
/// ## Errors
/// Returns [`ErrorKind::DivisionByZero`] when `b` is zero.
pub const fn check_div(_a: i64, b: i64) -> Result<(), ErrorKind> {
    if b == 0 {
        return Err(ErrorKind::DivisionByZero);
    }
    Ok(())
}

/// Checks whether the digit `digit` can be appended to the literal `acc`,
/// i.e. whether `10 * acc + digit` stays at or below `MAX_VALUE`.
///
/// ## Errors
/// Returns [`ErrorKind::ValueOverflow`] when the literal would grow past
/// `MAX_VALUE`.
///
/// ## Example
/// ```
/// use linecalc::{error::ErrorKind, util::num::check_concat};
///
/// assert!(check_concat(922_337_203_685_477_580, 7).is_ok());
/// assert_eq!(check_concat(922_337_203_685_477_580, 8), Err(ErrorKind::ValueOverflow));
/// ```
pub const fn check_concat(acc: i64, digit: i64) -> Result<(), ErrorKind> {
    if acc > (MAX_VALUE - digit) / 10 {
        return Err(ErrorKind::ValueOverflow);
    }
    Ok(())
}

/// Checks whether `a + b` stays within `[MIN_VALUE, MAX_VALUE]`.
///
/// The check halves both operands before adding them, so it cannot overflow
/// itself. The negative direction is tested by negating both operands, which
/// is always safe inside the symmetric range.
///
/// ## Errors
/// Returns [`ErrorKind::ArithmeticOverflow`] when the sum is out of range.
///
/// ## Example
/// ```
/// use linecalc::{
///     error::ErrorKind,
///     util::num::{MAX_VALUE, MIN_VALUE, check_add},
/// };
///
/// assert!(check_add(MAX_VALUE, MIN_VALUE).is_ok());
/// assert!(check_add(MAX_VALUE - 1, 1).is_ok());
/// assert_eq!(check_add(MAX_VALUE, 1), Err(ErrorKind::ArithmeticOverflow));
/// assert_eq!(check_add(MIN_VALUE, -1), Err(ErrorKind::ArithmeticOverflow));
/// ```
pub const fn check_add(a: i64, b: i64) -> Result<(), ErrorKind> {
    if half_sum(a, b) > HALF_MAX_VALUE || half_sum(-a, -b) > HALF_MAX_VALUE {
        return Err(ErrorKind::ArithmeticOverflow);
    }
    Ok(())
}

/// `floor((a + b) / 2)`, computed without forming `a + b`.
const fn half_sum(a: i64, b: i64) -> i64 {
    (a >> 1) + (b >> 1) + (a & b & 1)
}

/// Adds two values after [`check_add`] accepts them.
///
/// ## Errors
/// Propagates the rejection from [`check_add`].
pub const fn add(a: i64, b: i64) -> Result<i64, ErrorKind> {
    match check_add(a, b) {
        Ok(()) => Ok(a + b),
        Err(kind) => Err(kind),
    }
}

/// Subtracts `b` from `a` as the addition of `-b`.
///
/// ## Errors
/// Propagates the rejection from [`check_add`].
///
/// ## Example
/// ```
/// use linecalc::util::num::{MIN_VALUE, sub};
///
/// assert_eq!(sub(5, 3), Ok(2));
/// assert!(sub(MIN_VALUE, 1).is_err());
/// ```
pub const fn sub(a: i64, b: i64) -> Result<i64, ErrorKind> {
    add(a, -b)
}

/// Multiplies two values after [`check_mul`] accepts them.
///
/// ## Errors
/// Propagates the rejection from [`check_mul`].
pub const fn mul(a: i64, b: i64) -> Result<i64, ErrorKind> {
    match check_mul(a, b) {
        Ok(()) => Ok(a * b),
        Err(kind) => Err(kind),
    }
}

/// Divides `a` by `b`, truncating toward zero.
///
/// ## Errors
/// Returns [`ErrorKind::DivisionByZero`] when `b` is zero.
///
/// ## Example
/// ```
/// use linecalc::util::num::div;
///
/// assert_eq!(div(7, 2), Ok(3));
/// assert_eq!(div(-7, 2), Ok(-3));
/// ```
pub const fn div(a: i64, b: i64) -> Result<i64, ErrorKind> {
    match check_div(a, b) {
        Ok(()) => Ok(a / b),
        Err(kind) => Err(kind),
    }
}

/// Appends a decimal digit to a literal after [`check_concat`] accepts it.
///
/// ## Errors
/// Propagates the rejection from [`check_concat`].
pub const fn append_digit(acc: i64, digit: i64) -> Result<i64, ErrorKind> {
    match check_concat(acc, digit) {
        Ok(()) => Ok(acc * 10 + digit),
        Err(kind) => Err(kind),
    }
}
