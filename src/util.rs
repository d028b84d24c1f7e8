/// Numeric safety layer.
///
/// This module fixes the value range and provides the predicates that run
/// before every arithmetic step. Each predicate either accepts the operands
/// or names the error kind the operation would cause, so callers never
/// perform an operation that could overflow or divide by zero.
///
/// The checked wrappers (`add`, `sub`, `mul`, `div`, `append_digit`) combine
/// a predicate with the operation it guards.
pub mod num;
