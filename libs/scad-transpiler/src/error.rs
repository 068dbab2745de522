//! # Error Types
//!
//! Error types for transpilation and for the whole compile pipeline. All
//! errors are explicit and carry the position of the offending token or node.
//!
//! ## Error Policy
//!
//! - The first error aborts the pipeline; there are no partial results
//! - Nothing is logged and swallowed; every failure reaches the caller
//! - Every error can be rendered as a fixed-format retry context

use scad_ast::Position;
use scad_parser::{LexError, ParseError, SyntaxError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// TRANSPILE ERROR
// =============================================================================

/// A structurally valid node that cannot be lowered to the builder API.
///
/// ## Example
///
/// ```rust
/// use scad_transpiler::{compile, TranspileOptions};
///
/// let err = compile("text(\"hi\");", &TranspileOptions::default()).unwrap_err();
/// assert_eq!(err.kind().as_str(), "transpile");
/// assert_eq!(err.found(), Some("text"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}{}", at(.position))]
pub struct TranspileError {
    /// What went wrong.
    pub message: String,
    /// Position of the node, when the error is tied to one.
    pub position: Option<Position>,
    /// Source name of the construct (`cube`, `difference`, ...).
    pub construct: Option<String>,
}

impl TranspileError {
    /// Error tied to a node.
    pub fn at(construct: &str, position: Position, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
            construct: Some(construct.to_string()),
        }
    }
}

fn at(position: &Option<Position>) -> String {
    match position {
        Some(p) => format!(" at line {}, column {}", p.line, p.column),
        None => String::new(),
    }
}

// =============================================================================
// COMPILE ERROR
// =============================================================================

/// Which stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Malformed token.
    Lex,
    /// Grammar violation or rejected construct.
    Parse,
    /// Node that cannot be lowered.
    Transpile,
}

impl ErrorKind {
    /// Lowercase name, identical to the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lex => "lex",
            Self::Parse => "parse",
            Self::Transpile => "transpile",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of any stage of [`crate::compile`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CompileError {
    /// Lexing failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Transpilation failed.
    #[error(transparent)]
    Transpile(#[from] TranspileError),
}

impl From<SyntaxError> for CompileError {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lex(e) => Self::Lex(e),
            SyntaxError::Parse(e) => Self::Parse(e),
        }
    }
}

impl CompileError {
    /// Stage that failed.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Transpile(_) => ErrorKind::Transpile,
        }
    }

    /// Position of the offending token or node.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => Some(e.position()),
            Self::Transpile(e) => e.position,
        }
    }

    /// 1-based line of the offending token or node.
    pub fn line(&self) -> Option<usize> {
        self.position().map(|p| p.line)
    }

    /// 1-based column of the offending token or node.
    pub fn column(&self) -> Option<usize> {
        self.position().map(|p| p.column)
    }

    /// Offending lexeme, or the construct name for transpile errors.
    pub fn found(&self) -> Option<&str> {
        match self {
            Self::Lex(e) => Some(e.found.as_str()),
            Self::Parse(e) => Some(e.found.as_str()),
            Self::Transpile(e) => e.construct.as_deref(),
        }
    }

    /// Accepted alternatives; only parse errors carry any.
    pub fn expected(&self) -> &[String] {
        match self {
            Self::Parse(e) => e.expected.as_slice(),
            Self::Lex(_) | Self::Transpile(_) => &[],
        }
    }

    /// Human-readable message without position.
    pub fn message(&self) -> &str {
        match self {
            Self::Lex(e) => e.message.as_str(),
            Self::Parse(e) => e.message.as_str(),
            Self::Transpile(e) => e.message.as_str(),
        }
    }

    /// Fixed-format rendering for automated repair loops.
    ///
    /// Parse errors use [`ParseError::to_retry_context`] verbatim; the other
    /// kinds follow the same four-line layout with their own heading.
    ///
    /// ```rust
    /// use scad_transpiler::{compile, TranspileOptions};
    ///
    /// let err = compile("cube(1) # 2;", &TranspileOptions::default()).unwrap_err();
    /// assert_eq!(
    ///     err.to_retry_context(),
    ///     "Lex Error at line 1, column 9:\nFound: \"#\"\nExpected: \nMessage: Unexpected character '#'"
    /// );
    /// ```
    pub fn to_retry_context(&self) -> String {
        if let Self::Parse(e) = self {
            return e.to_retry_context();
        }

        let heading = match self {
            Self::Lex(_) => "Lex Error",
            _ => "Transpile Error",
        };
        let location = match self.position() {
            Some(p) => format!(" at line {}, column {}", p.line, p.column),
            None => String::new(),
        };
        format!(
            "{}{}:\nFound: \"{}\"\nExpected: {}\nMessage: {}",
            heading,
            location,
            self.found().unwrap_or(""),
            self.expected().join(", "),
            self.message()
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
