use std::io::{BufRead, Write};

use crate::{
    driver::{
        reader::{Line, LineReader},
        reply::{ReplyWriter, render},
    },
    error::{DriverError, ErrorKind},
    evaluate,
};

/// Line input with a maximum-length contract.
///
/// Reads `\r`- or `\n`-terminated lines from a buffered byte stream. Bytes
/// past the maximum length are consumed and dropped, and the line is marked
/// as truncated.
pub mod reader;
/// Reply rendering and output.
///
/// Turns an evaluation into the text sent back and writes it, followed by the
/// configured line ending and a blank separator line.
pub mod reply;

/// Longest line accepted by default, in bytes.
///
/// Leaves room for a terminator in a 256-byte line buffer.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 255;

/// The sequence that ends every reply line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`, as expected by most serial terminals.
    CrLf,
}

impl LineEnding {
    /// Returns the bytes written for this line ending.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Transport parameters of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Longest accepted line, in bytes. Longer lines are truncated and
    /// answered with a buffer overflow diagnostic.
    pub max_line_length: usize,
    /// Line ending appended to every reply.
    pub line_ending:     LineEnding,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { max_line_length: DEFAULT_MAX_LINE_LENGTH,
               line_ending:     LineEnding::default(), }
    }
}

/// Computes the reply for one received line.
///
/// A truncated line is still evaluated, with a buffer overflow added to its
/// errors, so the reply always names the most severe problem.
///
/// # Example
/// ```
/// use linecalc::driver::{DriverConfig, reader::Line, respond};
///
/// let config = DriverConfig::default();
/// assert_eq!(respond(&Line::complete("7 / 2"), &config), "3");
/// assert_eq!(respond(&Line::complete("7 / 0"), &config), "Error: Division by zero.");
/// ```
#[must_use]
pub fn respond(line: &Line, config: &DriverConfig) -> String {
    let mut evaluation = evaluate(&line.text);

    if line.truncated {
        tracing::warn!(max_line_length = config.max_line_length, "input line truncated");
        evaluation.record(ErrorKind::BufferOverflow);
    }

    render(&evaluation, config.max_line_length)
}

/// Answers a single expression given as a whole, such as a command-line
/// argument.
///
/// The text is always exactly one line: an empty expression is answered with
/// a syntax error, and embedded terminators do not split it. Text beyond the
/// maximum line length is dropped and reported as a buffer overflow.
///
/// # Errors
/// Returns [`DriverError::InvalidLineLength`] for a zero maximum line length
/// and [`DriverError::Io`] if writing fails.
///
/// # Example
/// ```
/// use linecalc::driver::{DriverConfig, answer_one};
///
/// let mut output = Vec::new();
/// answer_one("", &mut output, &DriverConfig::default()).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "Error: Invalid syntax.\n\n");
/// ```
pub fn answer_one<W: Write>(expression: &str,
                            output: W,
                            config: &DriverConfig)
                            -> Result<(), DriverError> {
    if config.max_line_length == 0 {
        return Err(DriverError::InvalidLineLength { length: 0 });
    }

    let line = Line::bounded(expression, config.max_line_length);
    ReplyWriter::new(output, config.line_ending).send(&respond(&line, config))
}

/// Answers lines from `input` on `output` until the input ends.
///
/// Malformed lines are answered with a diagnostic and never end the session;
/// only transport failures do.
///
/// # Parameters
/// - `input`: The byte stream lines are read from.
/// - `output`: The byte stream replies are written to.
/// - `config`: Transport parameters.
///
/// # Returns
/// The number of lines answered.
///
/// # Errors
/// Returns [`DriverError::InvalidLineLength`] for a zero maximum line length
/// and [`DriverError::Io`] if reading or writing fails.
///
/// # Example
/// ```
/// use linecalc::driver::{DriverConfig, serve};
///
/// let mut output = Vec::new();
/// let answered = serve("1 + 1\n2 * (3\n".as_bytes(), &mut output, &DriverConfig::default()).unwrap();
///
/// assert_eq!(answered, 2);
/// assert_eq!(String::from_utf8(output).unwrap(), "2\n\nError: Invalid syntax.\n\n");
/// ```
pub fn serve<R, W>(input: R, output: W, config: &DriverConfig) -> Result<usize, DriverError>
    where R: BufRead,
          W: Write
{
    let mut lines = LineReader::new(input, config.max_line_length)?;
    let mut replies = ReplyWriter::new(output, config.line_ending);
    let mut answered = 0;

    tracing::info!(max_line_length = config.max_line_length,
                   line_ending = ?config.line_ending,
                   "serving");

    while let Some(line) = lines.read_line()? {
        let reply = respond(&line, config);
        replies.send(&reply)?;
        answered += 1;
    }

    tracing::info!(answered, "input closed");
    Ok(answered)
}
