//! Token definitions for the Lox language
//!
//! This module defines the closed set of token kinds, the decoded literal
//! payloads, and the token record produced by the scanner.

use std::fmt;

/// A token in the Lox language
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text matched (empty for EOF)
    pub lexeme: String,
    pub literal: Literal,
    /// 1-based line the token starts on
    pub line: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Literal, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Create the end-of-input token
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), Literal::None, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}

/// Token kinds in the Lox language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Comma,      // ,
    Dot,        // .
    Minus,      // -
    Plus,       // +
    Semicolon,  // ;
    Star,       // *

    // One or two character operators
    Bang,         // !
    BangEqual,    // !=
    Equal,        // =
    EqualEqual,   // ==
    Greater,      // >
    GreaterEqual, // >=
    Less,         // <
    LessEqual,    // <=
    Slash,        // /

    // Literals
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Kind of a character that is a complete token on its own
    pub fn punctuation(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            '{' => Some(Self::LeftBrace),
            '}' => Some(Self::RightBrace),
            ',' => Some(Self::Comma),
            '.' => Some(Self::Dot),
            '-' => Some(Self::Minus),
            '+' => Some(Self::Plus),
            ';' => Some(Self::Semicolon),
            '*' => Some(Self::Star),
            _ => None,
        }
    }

    /// Kind of a lone operator character that may also start a
    /// two-character operator
    pub fn operator(c: char) -> Option<Self> {
        match c {
            '!' => Some(Self::Bang),
            '=' => Some(Self::Equal),
            '<' => Some(Self::Less),
            '>' => Some(Self::Greater),
            '/' => Some(Self::Slash),
            _ => None,
        }
    }

    /// Kind of a two-character operator
    pub fn composite(first: char, second: char) -> Option<Self> {
        match (first, second) {
            ('!', '=') => Some(Self::BangEqual),
            ('=', '=') => Some(Self::EqualEqual),
            ('<', '=') => Some(Self::LessEqual),
            ('>', '=') => Some(Self::GreaterEqual),
            _ => None,
        }
    }

    /// Get keyword kind from a reserved word
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "and" => Some(Self::And),
            "class" => Some(Self::Class),
            "else" => Some(Self::Else),
            "false" => Some(Self::False),
            "fun" => Some(Self::Fun),
            "for" => Some(Self::For),
            "if" => Some(Self::If),
            "nil" => Some(Self::Nil),
            "or" => Some(Self::Or),
            "print" => Some(Self::Print),
            "return" => Some(Self::Return),
            "super" => Some(Self::Super),
            "this" => Some(Self::This),
            "true" => Some(Self::True),
            "var" => Some(Self::Var),
            "while" => Some(Self::While),
            _ => None,
        }
    }

    /// Tag used for this kind in token output
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Slash => "SLASH",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded literal value carried by a token
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// No payload; printed as `null`
    None,
    String(String),
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("null"),
            Self::String(value) => f.write_str(value),
            // Integral values still get a fractional digit: 123 -> 123.0.
            // Literals beyond f64 range are infinite and print as `inf`.
            Self::Number(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            Self::Number(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("and"), Some(TokenKind::And));
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("print"), Some(TokenKind::Print));
        assert_eq!(TokenKind::keyword("nil"), Some(TokenKind::Nil));
        assert_eq!(TokenKind::keyword("While"), None);
        assert_eq!(TokenKind::keyword("let"), None);
    }

    #[test]
    fn test_operator_tables() {
        assert_eq!(TokenKind::punctuation('*'), Some(TokenKind::Star));
        assert_eq!(TokenKind::punctuation('/'), None);
        assert_eq!(TokenKind::operator('/'), Some(TokenKind::Slash));
        assert_eq!(TokenKind::composite('!', '='), Some(TokenKind::BangEqual));
        assert_eq!(TokenKind::composite('=', '!'), None);
        // `//` starts a comment, not an operator
        assert_eq!(TokenKind::composite('/', '/'), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenKind::GreaterEqual.to_string(), "GREATER_EQUAL");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_number_literal_display() {
        assert_eq!(Literal::Number(123.0).to_string(), "123.0");
        assert_eq!(Literal::Number(1.5).to_string(), "1.5");
        assert_eq!(Literal::Number(0.25).to_string(), "0.25");
        assert_eq!(Literal::Number(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_overflowing_number_display() {
        assert_eq!(Literal::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Literal::Number(1e300).to_string().len(), 303);
    }

    #[test]
    fn test_token_display() {
        let paren = Token::new(TokenKind::LeftParen, "(", Literal::None, 1);
        assert_eq!(paren.to_string(), "LEFT_PAREN ( null");

        let string = Token::new(
            TokenKind::String,
            "\"foo\"",
            Literal::String("foo".to_string()),
            1,
        );
        assert_eq!(string.to_string(), "STRING \"foo\" foo");

        assert_eq!(Token::eof(3).to_string(), "EOF  null");
    }
}
