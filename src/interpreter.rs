/// The evaluator module computes values with overflow-checked arithmetic.
///
/// Operations are applied as soon as the parser has both operands, so no
/// syntax tree is kept. Every operation runs the matching safety check first;
/// a rejected operation records its error kind and yields a placeholder.
///
/// # Responsibilities
/// - Accumulates literals digit by digit, diagnosing oversized ones.
/// - Applies negation and the four arithmetic operators.
/// - Carries the errors of the operands into every result.
pub mod evaluator;
/// The lexer module tokenizes an expression line.
///
/// The lexer reads the raw line and produces digit runs, operators and
/// parentheses, each tagged with the column it starts at. Whitespace is
/// dropped between tokens.
///
/// # Responsibilities
/// - Converts the line into tokens with source columns.
/// - Reports characters outside the alphabet as syntax errors.
pub mod lexer;
/// The parser module drives evaluation according to the grammar.
///
/// A recursive-descent parser with one function per precedence level. Chains
/// of equal precedence are folded left to right, which makes every operator
/// left-associative.
///
/// # Responsibilities
/// - Enforces precedence: `*` and `/` bind tighter than `+` and `-`.
/// - Tells negation apart from subtraction.
/// - Records syntax errors and keeps going, so later problems are found too.
pub mod parser;
