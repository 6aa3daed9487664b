//! Token report output
//!
//! Writes a scan result as text: one line per valid token on the output
//! stream, one line per lexical error on the error stream, in scan order.

use std::io::{self, Write};

use crate::error::Diagnostic;
use crate::lexer::{Lexed, ScanOutput};

/// How lexical errors are rendered on the error stream
#[derive(Debug, Clone, Copy, Default)]
pub enum ErrorStyle<'a> {
    /// `[line N] Error: ...`
    #[default]
    Plain,
    /// Colored diagnostic with the surrounding source lines
    Pretty { source: &'a str },
}

/// Write every record of `output` to `out` or `err`
pub fn write_output<O, E>(output: &ScanOutput, out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    write_output_styled(output, ErrorStyle::Plain, out, err)
}

/// Like [`write_output`], with a choice of error rendering
pub fn write_output_styled<O, E>(
    output: &ScanOutput,
    style: ErrorStyle<'_>,
    out: &mut O,
    err: &mut E,
) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    for record in output.records() {
        match record {
            Lexed::Token(token) => writeln!(out, "{}", token)?,
            Lexed::Error(error) => match style {
                ErrorStyle::Plain => writeln!(err, "{}", error)?,
                ErrorStyle::Pretty { source } => {
                    write!(err, "{}", Diagnostic::with_source(error, source))?
                }
            },
        }
    }

    out.flush()?;
    err.flush()
}
