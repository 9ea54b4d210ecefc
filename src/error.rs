//! Error model: a rich, position-aware parse error plus the small enum of
//! failure kinds every fallible entry point in this crate can produce.

use std::fmt;

/// The kind of failure behind an [`Error`], exposed separately so callers can
/// branch on it without matching the full (data-carrying) variant.
///
/// The source format's `None` kind (an explicit "no error" sentinel) has no
/// member here: `Result<T, Error>` already encodes success in its `Ok` arm,
/// so a sentinel error value would be redundant. See `DESIGN.md`, O1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    KeyNotFound,
    Filesystem,
    Parsing,
    ParsingWrongType,
    WrongType,
    WrongIndex,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::KeyNotFound => "KeyNotFound",
            ErrorKind::Filesystem => "FilesystemError",
            ErrorKind::Parsing => "ParsingError",
            ErrorKind::ParsingWrongType => "ParsingErrorWrongType",
            ErrorKind::WrongType => "WrongType",
            ErrorKind::WrongIndex => "WrongIndex",
        };
        f.write_str(s)
    }
}

/// Whether a [`ParseError`] represents a structural syntax failure or a
/// type-expectation mismatch discovered while parsing (e.g. a string-state
/// transition that required a specific follow-up character and didn't get
/// one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    Syntax,
    WrongType,
}

/// A parse failure with enough context to render a `rustc`-style pointer
/// diagnostic: `line:col`, the offending line verbatim, and a caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub line_text: String,
}

impl ParseError {
    pub fn new(
        kind: ParseErrorKind,
        message: impl Into<String>,
        line: usize,
        column: usize,
        line_text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
            line_text: line_text.into(),
        }
    }

    pub fn syntax(
        message: impl Into<String>,
        line: usize,
        column: usize,
        line_text: impl Into<String>,
    ) -> Self {
        Self::new(ParseErrorKind::Syntax, message, line, column, line_text)
    }

    pub fn wrong_type(
        message: impl Into<String>,
        line: usize,
        column: usize,
        line_text: impl Into<String>,
    ) -> Self {
        Self::new(ParseErrorKind::WrongType, message, line, column, line_text)
    }

    /// Render the `line:col`, offending line, and caret pointer.
    fn render(&self) -> String {
        let line_text = self.line_text.strip_suffix('\n').unwrap_or(&self.line_text);
        let caret = " ".repeat(self.column) + "^";
        format!(
            "{}:{}: {}\n{}\n{}",
            self.line, self.column, self.message, line_text, caret
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for ParseError {}

/// The crate-wide error type. Every fallible `try_`-prefixed method returns
/// `Result<T, Error>`; the corresponding panicking convenience (`at`,
/// `as_str`, ...) unwraps it with `Display` as the panic message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    #[error("index {index} out of range (len {len})")]
    WrongIndex { index: usize, len: usize },

    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error(transparent)]
    Parsing(#[from] ParseError),

    #[error("filesystem error{}: {message}", path.as_deref().map(|p| format!(" ({p})")).unwrap_or_default())]
    Filesystem {
        path: Option<String>,
        message: String,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::KeyNotFound(_) => ErrorKind::KeyNotFound,
            Error::WrongIndex { .. } => ErrorKind::WrongIndex,
            Error::WrongType { .. } => ErrorKind::WrongType,
            Error::Parsing(pe) => match pe.kind {
                ParseErrorKind::Syntax => ErrorKind::Parsing,
                ParseErrorKind::WrongType => ErrorKind::ParsingWrongType,
            },
            Error::Filesystem { .. } => ErrorKind::Filesystem,
        }
    }

    pub fn wrong_type(expected: &'static str, actual: &'static str) -> Self {
        Error::WrongType { expected, actual }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound(key.into())
    }

    pub fn wrong_index(index: usize, len: usize) -> Self {
        Error::WrongIndex { index, len }
    }

    pub fn filesystem(path: Option<String>, message: impl Into<String>) -> Self {
        Error::Filesystem {
            path,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::filesystem(None, err.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
