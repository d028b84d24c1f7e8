/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two already evaluated operands, running
/// the matching safety check first.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles negation of an operand.
pub mod unary;

/// Literal evaluation.
///
/// Accumulates a digit run into a value, diagnosing literals that do not fit.
pub mod literal;
