use thiserror::Error;

/// The result type for the `braces` crate.
pub type Result<T> = std::result::Result<T, ScanError>;

/// The error type for the `braces` crate.
///
/// Scan misses are ordinary outcomes and surface as `None` from the plain scanner methods. This
/// type is only returned by the `try_*` methods, which report why a scan came up empty, and by
/// the configuration layer.
#[derive(Error, Debug)]
pub struct ScanError {
    /// The source of the error.
    pub source: Box<ScanErrorKind>,
}

impl ScanError {
    /// Create a new `ScanError`.
    pub fn new(kind: ScanErrorKind) -> Self {
        ScanError {
            source: Box::new(kind),
        }
    }

    /// The reason of the error.
    #[inline]
    pub fn kind(&self) -> &ScanErrorKind {
        &self.source
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl From<ScanErrorKind> for ScanError {
    fn from(kind: ScanErrorKind) -> Self {
        ScanError::new(kind)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum ScanErrorKind {
    /// The start index does not address a byte of the buffer.
    #[error("Index {index} is out of range for a buffer of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the buffer.
        len: usize,
    },

    /// Delimiter matching was started on a character that opens nothing.
    #[error("'{0}' at {1} is not an opening delimiter")]
    NotAnOpener(char, usize),

    /// The end of a comment was requested for a position that starts no comment.
    #[error("No comment starts at {0}")]
    NotACommentStart(usize),

    /// The closing counterpart of a delimiter was never found.
    #[error("Unterminated '{0}' opened at {1}")]
    UnterminatedDelimiter(char, usize),

    /// A comment runs to the end of the input.
    #[error("Unterminated comment starting at {0}")]
    UnterminatedComment(usize),

    /// Delimiters are nested deeper than the configured limit.
    #[error("Nesting depth exceeds the limit of {0}")]
    NestingTooDeep(usize),

    /// No further token follows.
    #[error("End of input reached")]
    EndOfInput,

    /// The scanner configuration is not usable.
    #[error("Invalid scanner configuration: {0}")]
    InvalidConfig(String),

    /// A scanner configuration could not be deserialized.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ScanError {
    fn from(error: serde_json::Error) -> Self {
        ScanError::new(ScanErrorKind::Json(error))
    }
}
