/// Core parsing entry points and the token cursor.
pub mod core;

/// Parsing of left-associative operator chains.
///
/// Addition and subtraction bind looser than multiplication and division;
/// each level folds its chain from left to right.
pub mod binary;

/// Parsing of signed numbers, literals and parenthesized groups.
pub mod unary;
