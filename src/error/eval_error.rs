use bitflags::bitflags;

/// A single kind of evaluation error.
///
/// Variants are declared in decreasing severity, so the derived ordering ranks
/// the most severe kind lowest: `BufferOverflow < SyntaxError < ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The input line was longer than the transport accepts.
    BufferOverflow,
    /// The line does not match the grammar.
    SyntaxError,
    /// A literal does not fit into the value range.
    ValueOverflow,
    /// The right operand of a division was zero.
    DivisionByZero,
    /// An addition, subtraction or multiplication left the value range.
    ArithmeticOverflow,
}

impl ErrorKind {
    /// Every kind, most severe first.
    pub const ALL: [Self; 5] = [Self::BufferOverflow,
                                Self::SyntaxError,
                                Self::ValueOverflow,
                                Self::DivisionByZero,
                                Self::ArithmeticOverflow];

    /// Returns the bit that represents this kind inside an [`ErrorSet`].
    #[must_use]
    pub const fn flag(self) -> ErrorSet {
        match self {
            Self::BufferOverflow => ErrorSet::BUFFER_OVERFLOW,
            Self::SyntaxError => ErrorSet::SYNTAX_ERROR,
            Self::ValueOverflow => ErrorSet::VALUE_OVERFLOW,
            Self::DivisionByZero => ErrorSet::DIVISION_BY_ZERO,
            Self::ArithmeticOverflow => ErrorSet::ARITHMETIC_OVERFLOW,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BufferOverflow => write!(f, "buffer overflow"),
            Self::SyntaxError => write!(f, "syntax error"),
            Self::ValueOverflow => write!(f, "value overflow"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ArithmeticOverflow => write!(f, "arithmetic overflow"),
        }
    }
}

bitflags! {
    /// The set of errors detected while evaluating one line.
    ///
    /// Bits are assigned in decreasing severity, so the lowest set bit is
    /// always the error to report.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ErrorSet: u8 {
        const BUFFER_OVERFLOW     = 1 << 0;
        const SYNTAX_ERROR        = 1 << 1;
        const VALUE_OVERFLOW      = 1 << 2;
        const DIVISION_BY_ZERO    = 1 << 3;
        const ARITHMETIC_OVERFLOW = 1 << 4;
    }
}

impl ErrorSet {
    /// Adds `kind` to the set.
    pub fn record(&mut self, kind: ErrorKind) {
        self.insert(kind.flag());
    }

    /// Returns `true` if `kind` has been recorded.
    #[must_use]
    pub const fn has(self, kind: ErrorKind) -> bool {
        self.contains(kind.flag())
    }

    /// Returns the recorded kinds, most severe first.
    pub fn kinds(self) -> impl Iterator<Item = ErrorKind> {
        ErrorKind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }

    /// Returns the single kind that should be reported, if any.
    ///
    /// # Example
    /// ```
    /// use linecalc::error::{ErrorKind, ErrorSet};
    ///
    /// let mut errors = ErrorSet::empty();
    /// assert_eq!(errors.most_severe(), None);
    ///
    /// errors.record(ErrorKind::ArithmeticOverflow);
    /// errors.record(ErrorKind::SyntaxError);
    /// assert_eq!(errors.most_severe(), Some(ErrorKind::SyntaxError));
    /// ```
    #[must_use]
    pub fn most_severe(self) -> Option<ErrorKind> {
        self.kinds().next()
    }
}

impl From<ErrorKind> for ErrorSet {
    fn from(kind: ErrorKind) -> Self {
        kind.flag()
    }
}

/// A value together with the errors found while producing it.
///
/// Parsing and evaluation steps never abort on an error. They record it here
/// and hand back a placeholder so the caller can keep going. Whenever
/// `errors` is non-empty the value must not be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checked<T> {
    /// The produced value, or a placeholder if `errors` is non-empty.
    pub value:  T,
    /// Errors recorded while producing `value`.
    pub errors: ErrorSet,
}

impl<T> Checked<T> {
    /// Wraps a value produced without errors.
    pub const fn clean(value: T) -> Self {
        Self { value,
               errors: ErrorSet::empty() }
    }

    /// Wraps a placeholder produced by a step that detected `kind`.
    pub const fn flagged(value: T, kind: ErrorKind) -> Self {
        Self { value,
               errors: kind.flag() }
    }

    /// Returns `true` if no error has been recorded.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records one more error without changing the value.
    pub fn record(&mut self, kind: ErrorKind) {
        self.errors.record(kind);
    }

    /// Merges the errors of `other` into `self` and returns its value.
    pub fn absorb<U>(&mut self, other: Checked<U>) -> U {
        self.errors |= other.errors;
        other.value
    }

    /// Replaces the value, keeping the accumulated errors.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked { value:  f(self.value),
                  errors: self.errors, }
    }

    /// Returns the value only if no error has been recorded.
    pub fn into_result(self) -> Result<T, ErrorSet> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }
}
