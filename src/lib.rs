//! # Lox Scanner
//!
//! A lexical scanner for the Lox scripting language: punctuation, one and
//! two character operators, string and number literals, and `//` comments.
//!
//! ## Architecture
//!
//! - `lexer`: Cursor, character classification and the scanner itself
//! - `error`: Lexical diagnostics, exit status and CLI errors
//! - `report`: Text rendering of a scan result
//!
//! Scanning never aborts. Lexical errors are recorded in scan order next to
//! the tokens, and the aggregate outcome is an [`ExitStatus`] of 0 or 65.

pub mod error;
pub mod lexer;
pub mod report;

// Re-export commonly used types
pub use error::{ExitStatus, LexError, LexErrorKind};
pub use lexer::{Lexed, Literal, ScanOutput, Scanner, Token, TokenKind};

/// Version of the scanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a complete source text
///
/// # Arguments
///
/// * `source` - The full source text
///
/// # Returns
///
/// The tokens and lexical errors in scan order. The token sequence always
/// ends with a single EOF token.
pub fn tokenize(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}
