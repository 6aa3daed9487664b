//! Lexical analysis module
//!
//! This module handles tokenization of Lox source code.

pub mod cursor;
pub mod scanner;
pub mod token;

pub use cursor::CharClass;
pub use scanner::{Lexed, ScanOutput, Scanner};
pub use token::{Literal, Token, TokenKind};
