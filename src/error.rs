/// Evaluation error kinds and the set that accumulates them.
///
/// Defines the severity-ordered error kinds raised while a line is parsed and
/// evaluated, the bit set they are collected into, and the value-plus-errors
/// carrier that every parsing and evaluation step returns.
///
/// # Responsibilities
/// - Ranks error kinds so only the most severe one is ever reported.
/// - Accumulates errors without aborting evaluation.
pub mod eval_error;
/// User-facing diagnostics.
///
/// Renders the most severe error of an evaluation as a single human-readable
/// message, including the limits the line violated.
pub mod diagnostic;
/// Transport errors raised by the line driver.
pub mod driver_error;

pub use diagnostic::Diagnostic;
pub use driver_error::DriverError;
pub use eval_error::{Checked, ErrorKind, ErrorSet};
