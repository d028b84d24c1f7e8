#[derive(Debug)]
/// Represents all errors that can stop the line driver.
///
/// Malformed input is never one of them: it is answered with a
/// [`Diagnostic`](crate::error::Diagnostic) and the driver keeps serving.
pub enum DriverError {
    /// Reading from or writing to the transport failed.
    Io(std::io::Error),
    /// The configured maximum line length cannot hold any input.
    InvalidLineLength {
        /// The rejected length.
        length: usize,
    },
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Transport error: {e}."),
            Self::InvalidLineLength { length } => {
                write!(f, "Invalid maximum line length {length}: must be at least 1.")
            },
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidLineLength { .. } => None,
        }
    }
}

impl From<std::io::Error> for DriverError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
