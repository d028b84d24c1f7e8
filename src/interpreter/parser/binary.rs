use crate::{
    error::Checked,
    interpreter::{
        evaluator::binary::{BinaryOperator, eval_binary_op},
        lexer::Token,
        parser::{core::Cursor, unary::parse_number},
    },
};

/// Parses and evaluates addition and subtraction.
///
/// Handles the left-associative operators `+` and `-`. The running value is
/// folded after each operand, so `a - b - c` evaluates as `(a - b) - c`.
///
/// The rule is: `addition := product (("+" | "-") product)*`
///
/// A `-` reached here always follows a complete product, which ends in a
/// digit or `)`, so it is subtraction. A `-` in operand position is handled
/// by [`parse_number`] as negation.
///
/// # Parameters
/// - `cursor`: The token cursor.
/// - `depth`: Number of enclosing parentheses.
pub fn parse_addition(cursor: &mut Cursor<'_, '_>, depth: usize) -> Checked<i64> {
    let mut left = parse_product(cursor, depth);

    while let Some(op) = cursor.peek().and_then(token_to_binary_operator)
          && op.is_additive()
    {
        let column = cursor.column();
        cursor.advance();
        let right = parse_product(cursor, depth);
        left = eval_binary_op(op, left, right, column);
    }

    left
}

/// Parses and evaluates multiplication and division.
///
/// Handles the left-associative operators `*` and `/`, so `8 / 2 / 2`
/// evaluates as `(8 / 2) / 2`.
///
/// The rule is: `product := number (("*" | "/") number)*`
///
/// # Parameters
/// - `cursor`: The token cursor.
/// - `depth`: Number of enclosing parentheses.
pub fn parse_product(cursor: &mut Cursor<'_, '_>, depth: usize) -> Checked<i64> {
    let mut left = parse_number(cursor, depth);

    while let Some(op) = cursor.peek().and_then(token_to_binary_operator)
          && op.is_multiplicative()
    {
        let column = cursor.column();
        cursor.advance();
        let right = parse_number(cursor, depth);
        left = eval_binary_op(op, left, right, column);
    }

    left
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     evaluator::binary::BinaryOperator,
///     lexer::Token,
///     parser::binary::token_to_binary_operator,
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
