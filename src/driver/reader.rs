use std::io::{BufRead, ErrorKind as IoErrorKind};

use crate::error::DriverError;

/// One line received from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The accepted part of the line, without its terminator.
    pub text:      String,
    /// Whether bytes past the maximum length were dropped.
    pub truncated: bool,
}

impl Line {
    /// Wraps text that fit into the line buffer.
    #[must_use]
    pub fn complete(text: impl Into<String>) -> Self {
        Self { text:      text.into(),
               truncated: false, }
    }

    /// Keeps at most `max_line_length` bytes of `text`, cutting at a character
    /// boundary, and marks the line as truncated if anything was dropped.
    ///
    /// Terminators inside `text` are kept, so the result is always one line.
    ///
    /// ## Example
    /// ```
    /// use linecalc::driver::reader::Line;
    ///
    /// assert_eq!(Line::bounded("1+2", 8), Line::complete("1+2"));
    ///
    /// let cut = Line::bounded("1+2+3+4", 4);
    /// assert_eq!(cut.text, "1+2+");
    /// assert!(cut.truncated);
    /// ```
    #[must_use]
    pub fn bounded(text: &str, max_line_length: usize) -> Self {
        if text.len() <= max_line_length {
            return Self::complete(text);
        }

        let mut end = max_line_length;
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        Self { text:      text[..end].to_string(),
               truncated: true, }
    }
}

/// Reads terminated lines from a byte stream.
///
/// A line ends at `\r` or `\n`; a `\n` directly following a `\r` belongs to
/// the same terminator. At most `max_line_length` bytes are kept per line,
/// the rest up to the terminator is consumed and dropped.
pub struct LineReader<R> {
    inner:           R,
    max_line_length: usize,
    skip_lf:         bool,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a reader that keeps at most `max_line_length` bytes per line.
    ///
    /// # Errors
    /// Returns [`DriverError::InvalidLineLength`] if `max_line_length` is zero.
    pub fn new(inner: R, max_line_length: usize) -> Result<Self, DriverError> {
        if max_line_length == 0 {
            return Err(DriverError::InvalidLineLength { length: max_line_length });
        }

        Ok(Self { inner,
                  max_line_length,
                  skip_lf: false })
    }

    /// Reads the next line.
    ///
    /// Blocks until a terminator or the end of the stream is reached. A final
    /// line without terminator is still returned.
    ///
    /// # Returns
    /// - `Ok(Some(line))` for every received line, including empty ones.
    /// - `Ok(None)` once the stream is exhausted.
    ///
    /// # Errors
    /// Returns [`DriverError::Io`] if the underlying stream fails.
    pub fn read_line(&mut self) -> Result<Option<Line>, DriverError> {
        let mut bytes = Vec::new();
        let mut truncated = false;
        let mut received = false;

        while let Some(byte) = self.next_byte()? {
            if std::mem::take(&mut self.skip_lf) && byte == b'\n' {
                continue;
            }
            received = true;

            match byte {
                b'\r' => {
                    self.skip_lf = true;
                    break;
                },
                b'\n' => break,
                _ if bytes.len() < self.max_line_length => bytes.push(byte),
                _ => truncated = true,
            }
        }

        if !received {
            return Ok(None);
        }

        Ok(Some(Line { text: String::from_utf8_lossy(&bytes).into_owned(),
                       truncated }))
    }

    fn next_byte(&mut self) -> Result<Option<u8>, DriverError> {
        loop {
            match self.inner.fill_buf() {
                Ok(available) => {
                    let Some(&byte) = available.first() else {
                        return Ok(None);
                    };
                    self.inner.consume(1);
                    return Ok(Some(byte));
                },
                Err(e) if e.kind() == IoErrorKind::Interrupted => {},
                Err(e) => return Err(e.into()),
            }
        }
    }
}
