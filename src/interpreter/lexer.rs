use logos::Logos;

use crate::error::{Checked, ErrorKind};

/// Represents a lexical token of an expression line.
///
/// The alphabet is deliberately small: digit runs, the four arithmetic
/// operators and parentheses. Spaces and tabs separate tokens and are
/// otherwise dropped, so they can never appear inside a literal.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'src> {
    /// A run of decimal digits, such as `42`. The value is accumulated by the
    /// parser so that oversized literals can be diagnosed.
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Digits(&'src str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Whitespace,
}

/// A token paired with the byte column it starts at.
pub type Spanned<'src> = (Token<'src>, usize);

/// Splits a line into tokens.
///
/// Characters outside the alphabet are dropped and recorded as
/// [`ErrorKind::SyntaxError`]; the remaining tokens are still returned so the
/// parser can look for further problems.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 - (3)");
/// assert!(tokens.is_clean());
/// assert_eq!(tokens.value,
///            vec![(Token::Digits("12"), 0),
///                 (Token::Minus, 3),
///                 (Token::LParen, 5),
///                 (Token::Digits("3"), 6),
///                 (Token::RParen, 7)]);
///
/// assert!(!tokenize("1 % 2").is_clean());
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Checked<Vec<Spanned<'_>>> {
    let mut tokens = Checked::clean(Vec::new());
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.value.push((tok, lexer.span().start));
        } else {
            tracing::trace!(column = lexer.span().start,
                            slice = lexer.slice(),
                            "unrecognized input");
            tokens.record(ErrorKind::SyntaxError);
        }
    }

    tokens
}
