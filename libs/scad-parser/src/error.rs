//! # Syntax Errors
//!
//! Error types for the SCAD lexer and parser. Both carry the 1-based
//! position of the offending token and the text that was found there.
//!
//! ## Example
//!
//! ```rust
//! use scad_parser::parse;
//!
//! let err = parse("cube(10)").unwrap_err();
//! let parse_err = err.as_parse().unwrap();
//! assert_eq!(parse_err.expected, vec!["';'".to_string()]);
//! ```

use crate::lexer::Token;
use scad_ast::Position;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// Malformed token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} at line {line}, column {column}")]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    /// The offending character or the opening delimiter of an unterminated literal.
    pub found: String,
    pub message: String,
}

impl LexError {
    pub(crate) fn new(position: Position, found: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line: position.line,
            column: position.column,
            found: found.into(),
            message: message.into(),
        }
    }

    /// Position of the error.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Grammar violation or rejected language feature.
///
/// `expected` lists the human-readable alternatives that would have been
/// accepted; it is empty for hard feature rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub found: String,
    pub expected: Vec<String>,
    pub message: String,
}

impl ParseError {
    /// Create a parse error at an explicit position.
    pub fn new(
        position: Position,
        found: impl Into<String>,
        expected: &[&str],
        message: impl Into<String>,
    ) -> Self {
        Self {
            line: position.line,
            column: position.column,
            found: found.into(),
            expected: expected.iter().map(|e| (*e).to_string()).collect(),
            message: message.into(),
        }
    }

    /// Unexpected token where one of `expected` was required.
    ///
    /// The message is derived from the expected list.
    pub fn unexpected(token: &Token, expected: &[&str]) -> Self {
        let message = format!(
            "Expected {} but found {}",
            describe_alternatives(expected),
            describe_found(token)
        );
        Self::new(token.position(), token.lexeme(), expected, message)
    }

    /// Hard rejection of an unsupported construct; nothing is expected instead.
    pub fn unsupported(token: &Token, message: impl Into<String>) -> Self {
        Self::new(token.position(), token.lexeme(), &[], message)
    }

    /// Position of the error.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Fixed-format rendering consumed by automated repair loops.
    ///
    /// The layout is a stable external contract:
    ///
    /// ```text
    /// Parse Error at line L, column C:
    /// Found: "F"
    /// Expected: a, b, c
    /// Message: M
    /// ```
    ///
    /// ```rust
    /// use scad_parser::ParseError;
    /// use scad_ast::Position;
    ///
    /// let err = ParseError::new(Position::new(2, 5), ";", &["')'"], "Expected ')' but found ';'");
    /// assert_eq!(
    ///     err.to_retry_context(),
    ///     "Parse Error at line 2, column 5:\nFound: \";\"\nExpected: ')'\nMessage: Expected ')' but found ';'"
    /// );
    /// ```
    pub fn to_retry_context(&self) -> String {
        format!(
            "Parse Error at line {}, column {}:\nFound: \"{}\"\nExpected: {}\nMessage: {}",
            self.line,
            self.column,
            self.found,
            self.expected.join(", "),
            self.message
        )
    }
}

fn describe_alternatives(expected: &[&str]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

fn describe_found(token: &Token) -> String {
    if token.is_eof() {
        "end of input".to_string()
    } else {
        format!("'{}'", token.value)
    }
}

// =============================================================================
// SYNTAX ERROR
// =============================================================================

/// Either stage of `parse` failing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Position of the error.
    pub fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
        }
    }

    /// Returns the parse error, if this is one.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Lex(_) => None,
        }
    }

    /// Returns the lex error, if this is one.
    pub fn as_lex(&self) -> Option<&LexError> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(_) => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
