//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks byte offset and 1-based line/column as it advances.
//!
//! ## Example
//!
//! ```rust
//! use scad_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("hello");
//! assert_eq!(cursor.peek(), Some('h'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('e'));
//! ```

use scad_ast::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
///
/// ## Example
///
/// ```rust
/// use scad_parser::lexer::Cursor;
///
/// let mut cursor = Cursor::new("cube");
/// assert_eq!(cursor.advance(), Some('c'));
/// assert_eq!(cursor.offset(), 1);
/// assert_eq!(cursor.position().column, 2);
/// ```
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Current line (1-based).
    line: usize,
    /// Current column (1-based, in characters).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current line/column.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Current byte offset into the source.
    pub fn offset(&self) -> usize {
        self.byte
    }

    /// Source text between a previous offset and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte]
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    ///
    /// ```rust
    /// use scad_parser::lexer::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek(), Some('a'));
    /// assert_eq!(cursor.peek(), Some('a')); // Still 'a'
    /// ```
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Peek at the character one ahead of current.
    pub fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Peek `n` characters ahead (0 is the current character).
    ///
    /// ```rust
    /// use scad_parser::lexer::Cursor;
    ///
    /// let cursor = Cursor::new("1e+5");
    /// assert_eq!(cursor.peek_nth(2), Some('+'));
    /// assert_eq!(cursor.peek_nth(9), None);
    /// ```
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.byte..].chars().nth(n)
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at end of input
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.byte += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ```rust
    /// use scad_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc123");
    /// cursor.advance_while(|c| c.is_alphabetic());
    /// assert_eq!(cursor.peek(), Some('1'));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
