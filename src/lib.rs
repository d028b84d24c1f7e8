//! # linecalc
//!
//! linecalc is a line-oriented integer calculator written in Rust.
//! It evaluates arithmetic expressions such as `2 + 3 * (4 - -1)` over signed
//! 64-bit integers, checking every step for overflow and division by zero,
//! and answers each line with either the value or a single diagnostic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Checked,
    interpreter::{lexer::tokenize, parser::core::parse_start},
};

/// Serves expression lines over a byte stream.
///
/// This module reads lines from any buffered reader, enforcing the maximum
/// line length, evaluates them and writes back the value or a diagnostic. It
/// is the only part of the crate that performs I/O.
///
/// # Responsibilities
/// - Reads `\r`- or `\n`-terminated lines and flags over-long ones.
/// - Renders the value or the most severe error of each evaluation.
/// - Keeps serving after malformed lines until the input ends.
pub mod driver;
/// Provides error types for evaluation and transport.
///
/// This module defines the severity-ranked error kinds accumulated while a
/// line is evaluated, the diagnostics rendered for them, and the errors that
/// can stop the driver.
///
/// # Responsibilities
/// - Ranks error kinds so only the most severe is reported.
/// - Accumulates errors without aborting evaluation.
/// - Formats user-facing messages with the limits that were violated.
pub mod error;
/// Tokenizes, parses and evaluates expression lines.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the checked evaluator.
/// - Guarantees termination for every finite line.
pub mod interpreter;
/// Numeric safety checks.
///
/// This module provides the value range and the predicates that decide,
/// before an operation is carried out, whether it would overflow or divide by
/// zero.
pub mod util;

/// The outcome of evaluating one line: a value and the errors found.
///
/// The value is a placeholder whenever the error set is non-empty.
pub type Evaluation = Checked<i64>;

/// Evaluates one expression line.
///
/// The whole line must match the grammar
///
/// ```text
/// expression := product (("+" | "-") product)*
/// product    := number (("*" | "/") number)*
/// number     := "-"? value
/// value      := "(" expression ")" | digits
/// ```
///
/// with spaces or tabs allowed between tokens. Evaluation never stops at the
/// first problem: every error found on the line is recorded, and
/// [`ErrorSet::most_severe`](crate::error::ErrorSet::most_severe) selects the
/// one to report.
///
/// This function is pure: it performs no I/O and keeps no state between
/// calls.
///
/// # Examples
/// ```
/// use linecalc::{error::ErrorKind, evaluate};
///
/// let result = evaluate("2 + 3 * 4");
/// assert!(result.is_clean());
/// assert_eq!(result.value, 14);
///
/// let result = evaluate("5 / 0");
/// assert_eq!(result.errors.most_severe(), Some(ErrorKind::DivisionByZero));
/// ```
#[must_use]
pub fn evaluate(line: &str) -> Evaluation {
    let tokens = tokenize(line);
    let mut evaluation = parse_start(&tokens.value, line.len());
    evaluation.errors |= tokens.errors;

    tracing::debug!(line,
                    value = evaluation.value,
                    errors = ?evaluation.errors,
                    "evaluated line");
    evaluation
}
