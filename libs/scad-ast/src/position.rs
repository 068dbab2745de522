//! # Source Position
//!
//! 1-based line/column pair attached to every token and AST node.
//!
//! ```rust
//! use scad_ast::Position;
//!
//! let pos = Position::new(3, 7);
//! assert_eq!(pos.to_string(), "3:7");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a 1-based line and column.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position of the first character of a source.
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
