use crate::{
    error::{Checked, ErrorKind},
    interpreter::{
        evaluator::{literal::eval_literal, unary::eval_negate},
        lexer::Token,
        parser::core::{Cursor, MAX_NESTING, parse_expression},
    },
    util::num::PLACEHOLDER,
};

/// Parses and evaluates a possibly negated number.
///
/// A leading `-` negates exactly one value; a second `-` directly after it is
/// a syntax error, so `--5` is rejected while `5 - -3` is `8`.
///
/// Grammar: `number := "-"? value`
///
/// # Parameters
/// - `cursor`: The token cursor.
/// - `depth`: Number of enclosing parentheses.
pub fn parse_number(cursor: &mut Cursor<'_, '_>, depth: usize) -> Checked<i64> {
    if cursor.peek() == Some(Token::Minus) {
        cursor.advance();
        eval_negate(parse_value(cursor, depth))
    } else {
        parse_value(cursor, depth)
    }
}

/// Parses and evaluates an unsigned value.
///
/// Grammar: `value := "(" expression ")" | digits`
///
/// Anything else is a missing operand: a syntax error is recorded, nothing is
/// consumed and the placeholder stands in for the operand.
pub fn parse_value(cursor: &mut Cursor<'_, '_>, depth: usize) -> Checked<i64> {
    match cursor.peek() {
        Some(Token::Digits(digits)) => {
            let column = cursor.column();
            cursor.advance();
            eval_literal(digits, column)
        },
        Some(Token::LParen) => parse_grouping(cursor, depth),
        token => {
            tracing::trace!(column = cursor.column(), ?token, "expected operand");
            Checked::flagged(PLACEHOLDER, ErrorKind::SyntaxError)
        },
    }
}

/// Parses and evaluates a parenthesized expression.
///
/// A missing `)` is recorded as a syntax error; the inner value is still
/// returned so that later operators are checked. Nesting deeper than
/// [`MAX_NESTING`] is rejected without descending further.
fn parse_grouping(cursor: &mut Cursor<'_, '_>, depth: usize) -> Checked<i64> {
    if depth >= MAX_NESTING {
        tracing::debug!(column = cursor.column(), depth, "nesting too deep");
        return Checked::flagged(PLACEHOLDER, ErrorKind::SyntaxError);
    }

    cursor.advance();
    let mut inner = parse_expression(cursor, depth + 1);

    if cursor.peek() == Some(Token::RParen) {
        cursor.advance();
    } else {
        tracing::trace!(column = cursor.column(), "expected ')'");
        inner.record(ErrorKind::SyntaxError);
    }

    inner
}
