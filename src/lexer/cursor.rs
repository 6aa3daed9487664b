//! Scan state and character classification
//!
//! The cursor owns the position within the source: a byte offset that only
//! moves forward, and a line counter bumped on every consumed newline.

/// Class of the character under the cursor, used to pick a scan branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Newline,
    Whitespace,
    /// A complete single-character token: `(){},.-+;*`
    Punctuation,
    /// May begin a two-character operator or comment: `=!<>/`
    OperatorStart,
    Quote,
    Digit,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            '\n' => Self::Newline,
            ' ' | '\t' => Self::Whitespace,
            '(' | ')' | '{' | '}' | ',' | '.' | '-' | '+' | ';' | '*' => Self::Punctuation,
            '=' | '!' | '<' | '>' | '/' => Self::OperatorStart,
            '"' => Self::Quote,
            '0'..='9' => Self::Digit,
            _ => Self::Other,
        }
    }
}

/// Read-only source plus the mutable scan position
#[derive(Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    index: usize,
    line: usize,
    /// Byte offset where the current line begins
    line_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            index: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Byte offset of the next unread character
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current 1-based line
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-based character column of byte offset `at` on the current line
    pub fn column_of(&self, at: usize) -> usize {
        self.source[self.line_start..at].chars().count()
    }

    /// Character under the cursor
    pub fn peek(&self) -> Option<char> {
        self.source[self.index..].chars().next()
    }

    /// Character one past the cursor
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.index..].chars();
        chars.next();
        chars.next()
    }

    /// Consume one character, counting newlines
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.index;
        }
        Some(c)
    }

    /// Consume the next character if it equals `expected`
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while `predicate` holds
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Source text between `start` and the cursor
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.index]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }
}
