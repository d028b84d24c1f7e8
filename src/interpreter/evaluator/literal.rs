use crate::{
    error::Checked,
    util::num::{PLACEHOLDER, append_digit},
};

/// Evaluates a run of decimal digits, most significant first.
///
/// Each `10 * acc + digit` step is checked before it is taken. A literal that
/// would grow past `MAX_VALUE` is recorded as a value overflow, not as an
/// arithmetic overflow, and evaluates to the placeholder.
///
/// # Parameters
/// - `digits`: ASCII digits, as produced by the lexer.
/// - `column`: Column of the first digit, for logging.
///
/// # Example
/// ```
/// use linecalc::{
///     error::{ErrorKind, ErrorSet},
///     interpreter::evaluator::literal::eval_literal,
/// };
///
/// assert_eq!(eval_literal("0042", 0).value, 42);
///
/// let too_big = eval_literal("9223372036854775808", 0);
/// assert_eq!(too_big.errors, ErrorSet::from(ErrorKind::ValueOverflow));
/// ```
#[must_use]
pub fn eval_literal(digits: &str, column: usize) -> Checked<i64> {
    let mut literal = Checked::clean(0);

    for digit in digits.bytes().map(|b| i64::from(b - b'0')) {
        match append_digit(literal.value, digit) {
            Ok(next) => literal.value = next,
            Err(kind) => {
                tracing::debug!(column, digits, "literal out of range");
                literal.record(kind);
                literal.value = PLACEHOLDER;
                break;
            },
        }
    }

    literal
}
