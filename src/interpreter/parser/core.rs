use crate::{
    error::{Checked, ErrorKind},
    interpreter::{
        lexer::{Spanned, Token},
        parser::binary::parse_addition,
    },
};

/// Deepest parenthesis nesting accepted before the line is rejected as a
/// syntax error.
pub const MAX_NESTING: usize = 256;

/// Position of the parser inside a tokenized line.
///
/// Every parsing loop advances the cursor at least once per iteration, which
/// bounds the work done on any line by its number of tokens.
#[derive(Debug, Clone)]
pub struct Cursor<'a, 'src> {
    tokens:   &'a [Spanned<'src>],
    position: usize,
    end:      usize,
}

impl<'a, 'src> Cursor<'a, 'src> {
    /// Creates a cursor at the first token.
    ///
    /// `end` is the column reported once every token has been consumed,
    /// normally the length of the line.
    #[must_use]
    pub const fn new(tokens: &'a [Spanned<'src>], end: usize) -> Self {
        Self { tokens,
               position: 0,
               end }
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.position).map(|(token, _)| *token)
    }

    /// Returns the column of the next token, or the end column.
    #[must_use]
    pub fn column(&self) -> usize {
        self.tokens
            .get(self.position)
            .map_or(self.end, |(_, column)| *column)
    }

    /// Consumes the next token.
    pub fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Returns the number of tokens not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }
}

/// Parses and evaluates a whole line.
///
/// Grammar: `start := expression`, where the expression must consume every
/// token. Tokens left over after the expression are recorded as a syntax
/// error.
///
/// # Parameters
/// - `tokens`: The tokenized line.
/// - `end`: Column just past the last character of the line.
///
/// # Returns
/// The value of the line and every error found while computing it.
#[must_use]
pub fn parse_start(tokens: &[Spanned<'_>], end: usize) -> Checked<i64> {
    let mut cursor = Cursor::new(tokens, end);
    let mut result = parse_expression(&mut cursor, 0);

    if cursor.remaining() > 0 {
        tracing::trace!(column = cursor.column(),
                        remaining = cursor.remaining(),
                        "unconsumed input");
        result.record(ErrorKind::SyntaxError);
    }

    result
}

/// Parses and evaluates an expression.
///
/// Grammar: `expression := addition`
///
/// # Parameters
/// - `cursor`: The token cursor.
/// - `depth`: Number of enclosing parentheses.
#[must_use]
pub fn parse_expression(cursor: &mut Cursor<'_, '_>, depth: usize) -> Checked<i64> {
    parse_addition(cursor, depth)
}
