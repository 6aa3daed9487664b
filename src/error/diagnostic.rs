//! Diagnostic formatting for better error messages
//!
//! Renders a lexical error with the surrounding source lines for human
//! readers. The plain `[line N] Error: ...` form used by the token report is
//! the `Display` of [`LexError`] itself.

use super::{LexError, LexErrorKind};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a LexError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a LexError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a LexError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    fn title(&self) -> &'static str {
        match self.error.kind {
            LexErrorKind::UnexpectedCharacter(_) => "unexpected character",
            LexErrorKind::UnterminatedString => "unterminated string",
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}: ", "error".red().bold()));
        output.push_str(self.title());
        output.push('\n');
        output.push_str(&format!(
            "  {} line {}: {}\n",
            "-->".blue().bold(),
            self.error.line,
            self.error.kind
        ));

        if let Some(source) = self.source {
            output.push_str(&self.format_source_context(source));
        }

        output
    }

    /// Format the offending line and its neighbours
    fn format_source_context(&self, source: &str) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();
        let line = self.error.line;

        if line == 0 || line > lines.len() {
            return output;
        }

        let line_idx = line - 1;
        let width = (line + 1).to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line, width = width).blue().bold(),
            lines[line_idx]
        ));

        if self.error.column <= lines[line_idx].chars().count() {
            let padding = " ".repeat(width + 3 + self.error.column);
            output.push_str(&format!("{}{}\n", padding, "^".red().bold()));
        }

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line + 1, width = width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
