//! Error handling and diagnostics for the Lox scanner
//!
//! Lexical errors are recoverable diagnostics recorded alongside the token
//! stream. The aggregate outcome of a scan is an [`ExitStatus`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// The kinds of lexical error the scanner can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that starts no token
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    /// A string literal not closed before a newline or end of input
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical diagnostic tied to the line it occurred on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line; for unterminated strings, the line the literal opened on
    pub line: usize,
    /// 0-based character column of the offending character or opening quote
    pub column: usize,
}

impl LexError {
    /// Create a new lexical error
    pub fn new(kind: LexErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    pub fn unexpected_character(c: char, line: usize, column: usize) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(c), line, column)
    }

    pub fn unterminated_string(line: usize, column: usize) -> Self {
        Self::new(LexErrorKind::UnterminatedString, line, column)
    }
}

/// Process exit status summarising a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitStatus {
    #[default]
    Success,
    /// At least one lexical error was reported
    DataError,
}

impl ExitStatus {
    /// Numeric process exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::DataError => 65,
        }
    }

    /// Fold another error occurrence in; once failed, stays failed
    pub fn record_error(&mut self) {
        *self = Self::DataError;
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// Errors raised by the command-line driver
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error reading file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for the command-line driver
pub type CliResult<T> = Result<T, CliError>;
