use crate::{
    error::ErrorKind,
    util::num::{MAX_VALUE, MIN_VALUE},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The message sent back for a line that could not be evaluated.
///
/// Exactly one diagnostic is produced per failed line, for the most severe
/// recorded [`ErrorKind`].
pub enum Diagnostic {
    /// The line was longer than the transport accepts.
    BufferOverflow {
        /// The configured maximum line length, in bytes.
        max_line_length: usize,
    },
    /// The line does not match the grammar.
    SyntaxError,
    /// A literal was larger than the value range allows.
    ValueOverflow {
        /// The largest accepted literal.
        max: i64,
    },
    /// A division had a zero divisor.
    DivisionByZero,
    /// A computed result left the value range.
    ArithmeticOverflow {
        /// The smallest representable result.
        min: i64,
        /// The largest representable result.
        max: i64,
    },
}

impl Diagnostic {
    /// Builds the diagnostic for `kind`, filling in the limits it refers to.
    #[must_use]
    pub const fn new(kind: ErrorKind, max_line_length: usize) -> Self {
        match kind {
            ErrorKind::BufferOverflow => Self::BufferOverflow { max_line_length },
            ErrorKind::SyntaxError => Self::SyntaxError,
            ErrorKind::ValueOverflow => Self::ValueOverflow { max: MAX_VALUE },
            ErrorKind::DivisionByZero => Self::DivisionByZero,
            ErrorKind::ArithmeticOverflow => Self::ArithmeticOverflow { min: MIN_VALUE,
                                                                        max: MAX_VALUE, },
        }
    }

    /// Returns the error kind this diagnostic reports.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BufferOverflow { .. } => ErrorKind::BufferOverflow,
            Self::SyntaxError => ErrorKind::SyntaxError,
            Self::ValueOverflow { .. } => ErrorKind::ValueOverflow,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BufferOverflow { max_line_length } => write!(f,
                                                               "Error: Input is longer than the maximum of {max_line_length} characters."),
            Self::SyntaxError => write!(f, "Error: Invalid syntax."),
            Self::ValueOverflow { max } => {
                write!(f, "Error: Value too large. Literals may not exceed {max}.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::ArithmeticOverflow { min, max } => write!(f,
                                                            "Error: Arithmetic overflow. Results must lie within [{min}, {max}]."),
        }
    }
}

impl std::error::Error for Diagnostic {}
