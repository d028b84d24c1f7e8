use std::io::Write;

use crate::{
    Evaluation,
    driver::LineEnding,
    error::{Diagnostic, DriverError},
};

/// Renders an evaluation as the text sent back.
///
/// A clean evaluation renders as its base-10 value. Otherwise the message of
/// the most severe recorded error is returned and the value is ignored.
///
/// # Parameters
/// - `evaluation`: The evaluated line.
/// - `max_line_length`: The configured limit, quoted in buffer overflow
///   messages.
#[must_use]
pub fn render(evaluation: &Evaluation, max_line_length: usize) -> String {
    match evaluation.errors.most_severe() {
        None => evaluation.value.to_string(),
        Some(kind) => Diagnostic::new(kind, max_line_length).to_string(),
    }
}

/// Writes replies to the transport.
pub struct ReplyWriter<W> {
    inner:       W,
    line_ending: LineEnding,
}

impl<W: Write> ReplyWriter<W> {
    /// Creates a writer terminating every line with `line_ending`.
    pub const fn new(inner: W, line_ending: LineEnding) -> Self {
        Self { inner,
               line_ending }
    }

    /// Sends one reply followed by a blank separator line, then flushes.
    ///
    /// # Errors
    /// Returns [`DriverError::Io`] if writing fails.
    pub fn send(&mut self, reply: &str) -> Result<(), DriverError> {
        let ending = self.line_ending.as_str();
        write!(self.inner, "{reply}{ending}{ending}")?;
        self.inner.flush()?;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
