use crate::{
    error::{Checked, ErrorKind},
    util::num::{self, PLACEHOLDER},
};

/// An arithmetic operator joining two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// Returns `true` for `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Applies the operator after the matching safety check accepts it.
    ///
    /// # Errors
    /// Returns the [`ErrorKind`] of the rejecting check.
    pub const fn apply(self, left: i64, right: i64) -> Result<i64, ErrorKind> {
        match self {
            Self::Add => num::add(left, right),
            Self::Sub => num::sub(left, right),
            Self::Mul => num::mul(left, right),
            Self::Div => num::div(left, right),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// Evaluates a binary operation on two evaluated operands.
///
/// The errors of both operands are merged into the result. If the operation
/// itself is rejected, its kind is recorded as well and the result is the
/// placeholder.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column of the operator, for logging.
///
/// # Example
/// ```
/// use linecalc::{
///     error::{Checked, ErrorKind},
///     interpreter::evaluator::binary::{BinaryOperator, eval_binary_op},
/// };
///
/// let sum = eval_binary_op(BinaryOperator::Add, Checked::clean(2), Checked::clean(3), 1);
/// assert_eq!(sum, Checked::clean(5));
///
/// let quotient = eval_binary_op(BinaryOperator::Div, Checked::clean(5), Checked::clean(0), 1);
/// assert!(quotient.errors.has(ErrorKind::DivisionByZero));
/// ```
#[must_use]
pub fn eval_binary_op(op: BinaryOperator,
                      left: Checked<i64>,
                      right: Checked<i64>,
                      column: usize)
                      -> Checked<i64> {
    let mut result = left;
    let right = result.absorb(right);

    match op.apply(result.value, right) {
        Ok(value) => result.value = value,
        Err(kind) => {
            tracing::debug!(column, left = result.value, %op, right, %kind, "operation rejected");
            result.record(kind);
            result.value = PLACEHOLDER;
        },
    }

    result
}
