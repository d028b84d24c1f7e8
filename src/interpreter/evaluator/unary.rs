use crate::error::Checked;

/// Negates an evaluated operand.
///
/// Every value in `[MIN_VALUE, MAX_VALUE]` has its negation in range as well,
/// so no check is needed. Errors of the operand are carried through.
///
/// # Example
/// ```
/// use linecalc::{error::Checked, interpreter::evaluator::unary::eval_negate};
///
/// assert_eq!(eval_negate(Checked::clean(5)), Checked::clean(-5));
/// ```
#[must_use]
pub fn eval_negate(operand: Checked<i64>) -> Checked<i64> {
    operand.map(|value| -value)
}
