//! Contains the Error and Result type used by the parser.

/// An error produced while parsing sNBT text.
///
/// Records the byte offset into the input where parsing failed, and what the
/// parser expected to find there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pos: usize,
    expected: String,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected {} at position {}", self.expected, self.pos)
    }
}

impl Error {
    /// Byte offset into the input at which parsing failed.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Description of what was expected at [`position`](Error::position).
    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub(crate) fn expected_at(pos: usize, expected: &str) -> Error {
        Error {
            pos,
            expected: expected.to_owned(),
        }
    }
}
