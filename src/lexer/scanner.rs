//! Scanner implementation for the Lox language
//!
//! This module implements lexical analysis, converting source code into a
//! stream of tokens interleaved with recoverable lexical errors.

use tracing::{debug, trace};

use super::cursor::{CharClass, Cursor};
use super::token::{Literal, Token, TokenKind};
use crate::error::{ExitStatus, LexError};

/// One record of scan output, in source order
#[derive(Debug, Clone, PartialEq)]
pub enum Lexed {
    Token(Token),
    Error(LexError),
}

/// Everything a scan produced
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    records: Vec<Lexed>,
    status: ExitStatus,
}

impl ScanOutput {
    /// Tokens and errors in the order they were scanned
    pub fn records(&self) -> &[Lexed] {
        &self.records
    }

    /// Valid tokens only, ending with EOF
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.records.iter().filter_map(|record| match record {
            Lexed::Token(token) => Some(token),
            Lexed::Error(_) => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &LexError> {
        self.records.iter().filter_map(|record| match record {
            Lexed::Error(error) => Some(error),
            Lexed::Token(_) => None,
        })
    }

    pub fn had_error(&self) -> bool {
        !self.status.is_success()
    }

    pub fn exit_status(&self) -> ExitStatus {
        self.status
    }
}

/// Scanner for Lox source code
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    records: Vec<Lexed>,
    status: ExitStatus,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over the full source text
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            records: Vec::new(),
            status: ExitStatus::Success,
        }
    }

    /// Scan the whole source, always terminating with an EOF token
    pub fn scan_tokens(mut self) -> ScanOutput {
        debug!(bytes = self.cursor.source().len(), "scan started");

        while let Some(c) = self.cursor.peek() {
            self.scan_token(c);
        }

        let eof = Token::eof(self.cursor.line());
        self.records.push(Lexed::Token(eof));

        debug!(
            records = self.records.len(),
            lines = self.cursor.line(),
            status = self.status.code(),
            "scan finished"
        );

        ScanOutput {
            records: self.records,
            status: self.status,
        }
    }

    /// Scan a single lexeme starting at `c`
    fn scan_token(&mut self, c: char) {
        let start = self.cursor.index();

        match CharClass::of(c) {
            CharClass::Newline | CharClass::Whitespace => {
                self.cursor.advance();
            }

            CharClass::Punctuation => {
                self.cursor.advance();
                if let Some(kind) = TokenKind::punctuation(c) {
                    self.add_token(kind, start, Literal::None);
                }
            }

            CharClass::OperatorStart => self.scan_operator(c, start),

            CharClass::Quote => self.scan_string(start),

            CharClass::Digit => self.scan_number(start),

            CharClass::Other => {
                let column = self.cursor.column_of(start);
                self.cursor.advance();
                self.error(LexError::unexpected_character(c, self.cursor.line(), column));
            }
        }
    }

    /// Longest match over `=`, `!`, `<`, `>` and `/`, including `//` comments
    fn scan_operator(&mut self, c: char, start: usize) {
        self.cursor.advance();

        if c == '/' && self.cursor.match_char('/') {
            self.skip_line_comment();
            return;
        }

        let composite = self
            .cursor
            .peek()
            .and_then(|next| TokenKind::composite(c, next));

        if let Some(kind) = composite {
            self.cursor.advance();
            self.add_token(kind, start, Literal::None);
        } else if let Some(kind) = TokenKind::operator(c) {
            self.add_token(kind, start, Literal::None);
        }
    }

    /// Skip to the end of the line, leaving the newline for the main loop
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Scan a string literal; contents are taken verbatim
    fn scan_string(&mut self, start: usize) {
        let line = self.cursor.line();
        let column = self.cursor.column_of(start);
        // Opening quote
        self.cursor.advance();
        let content_start = self.cursor.index();

        self.cursor.eat_while(|c| c != '"' && c != '\n');

        if self.cursor.peek() != Some('"') {
            self.error(LexError::unterminated_string(line, column));
            return;
        }

        let value = self.cursor.slice_from(content_start).to_string();
        // Closing quote
        self.cursor.advance();

        self.add_token(TokenKind::String, start, Literal::String(value));
    }

    /// Scan a number literal of the form `digits ("." digits)?`
    fn scan_number(&mut self, start: usize) {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        // A dot only belongs to the number when a digit follows it
        let has_fraction = self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        // digits only; too many of them parse to infinity
        let value = self.cursor.slice_from(start).parse::<f64>().unwrap_or(f64::INFINITY);
        self.add_token(TokenKind::Number, start, Literal::Number(value));
    }

    /// Add a token spanning `start` to the cursor
    fn add_token(&mut self, kind: TokenKind, start: usize, literal: Literal) {
        let lexeme = self.cursor.slice_from(start);
        trace!(kind = kind.name(), lexeme, line = self.cursor.line(), "token");
        self.records.push(Lexed::Token(Token::new(
            kind,
            lexeme,
            literal,
            self.cursor.line(),
        )));
    }

    /// Record a lexical error and keep scanning
    fn error(&mut self, error: LexError) {
        trace!(line = error.line, kind = %error.kind, "lexical error");
        self.status.record_error();
        self.records.push(Lexed::Error(error));
    }
}
