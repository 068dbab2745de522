//! # Tokens
//!
//! Token types for the SCAD lexer.
//!
//! ## Example
//!
//! ```rust
//! use scad_parser::lexer::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Number, "10", 1, 6);
//! assert_eq!(token.kind, TokenKind::Number);
//! assert_eq!(token.position().column, 6);
//! ```

use scad_ast::Position;
use serde::{Deserialize, Serialize};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// ## Example
///
/// ```rust
/// use scad_parser::lexer::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Cube, "cube", 1, 1);
/// assert_eq!(token.value, "cube");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Token text. String literals hold their contents without quotes;
    /// the end-of-stream token holds an empty string.
    pub value: String,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `value`: Token text
    /// - `line`, `column`: 1-based start position
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// Start position of the token.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Text shown as "found" in diagnostics.
    pub fn lexeme(&self) -> &str {
        if self.is_eof() {
            "EOF"
        } else {
            &self.value
        }
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
///
/// Every keyword of the supported subset has its own variant; words that are
/// not keywords become [`TokenKind::Identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Primitives
    Cube,
    Sphere,
    Cylinder,
    Polyhedron,
    Square,
    Circle,
    Polygon,
    Text,

    // Transforms
    Translate,
    Rotate,
    Scale,
    Mirror,
    Color,
    Resize,
    Multmatrix,
    Offset,
    Hull,
    Minkowski,

    // Booleans
    Union,
    Difference,
    Intersection,

    // Extrusions
    LinearExtrude,
    RotateExtrude,

    // Control flow and definitions (recognized only to be rejected)
    For,
    If,
    Else,
    Let,
    Each,
    Module,
    Function,
    Include,
    Use,

    // Literals
    /// Number literal like `10`, `3.14` or `1e-3`
    Number,
    /// String literal like `"hello"`
    String,
    True,
    False,
    Undef,

    // Identifiers
    /// Special variable like `$fn`
    SpecialVar,
    /// Any other word
    Identifier,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Power,
    /// `!`
    Not,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `.`
    Dot,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,

    /// End of stream; always the last token.
    Eof,
}

impl TokenKind {
    /// Looks up the keyword for an identifier-shaped word.
    ///
    /// ```rust
    /// use scad_parser::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("linear_extrude"), Some(TokenKind::LinearExtrude));
    /// assert_eq!(TokenKind::keyword("Cube"), None);
    /// ```
    pub fn keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "cube" => Self::Cube,
            "sphere" => Self::Sphere,
            "cylinder" => Self::Cylinder,
            "polyhedron" => Self::Polyhedron,
            "square" => Self::Square,
            "circle" => Self::Circle,
            "polygon" => Self::Polygon,
            "text" => Self::Text,
            "translate" => Self::Translate,
            "rotate" => Self::Rotate,
            "scale" => Self::Scale,
            "mirror" => Self::Mirror,
            "color" => Self::Color,
            "resize" => Self::Resize,
            "multmatrix" => Self::Multmatrix,
            "offset" => Self::Offset,
            "hull" => Self::Hull,
            "minkowski" => Self::Minkowski,
            "union" => Self::Union,
            "difference" => Self::Difference,
            "intersection" => Self::Intersection,
            "linear_extrude" => Self::LinearExtrude,
            "rotate_extrude" => Self::RotateExtrude,
            "for" => Self::For,
            "if" => Self::If,
            "else" => Self::Else,
            "let" => Self::Let,
            "each" => Self::Each,
            "module" => Self::Module,
            "function" => Self::Function,
            "include" => Self::Include,
            "use" => Self::Use,
            "true" => Self::True,
            "false" => Self::False,
            "undef" => Self::Undef,
            _ => return None,
        };
        Some(kind)
    }

    /// Primitive keyword (`cube`, `circle`, ...).
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Cube
                | Self::Sphere
                | Self::Cylinder
                | Self::Polyhedron
                | Self::Square
                | Self::Circle
                | Self::Polygon
                | Self::Text
        )
    }

    /// Transform keyword (`translate`, `hull`, ...).
    pub const fn is_transform(&self) -> bool {
        matches!(
            self,
            Self::Translate
                | Self::Rotate
                | Self::Scale
                | Self::Mirror
                | Self::Color
                | Self::Resize
                | Self::Multmatrix
                | Self::Offset
                | Self::Hull
                | Self::Minkowski
        )
    }

    /// Boolean operation keyword.
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Union | Self::Difference | Self::Intersection)
    }

    /// Extrusion keyword.
    pub const fn is_extrude(&self) -> bool {
        matches!(self, Self::LinearExtrude | Self::RotateExtrude)
    }

    /// Keywords reserved only so they can be rejected with a precise message.
    pub const fn is_rejected_keyword(&self) -> bool {
        matches!(
            self,
            Self::For
                | Self::If
                | Self::Else
                | Self::Let
                | Self::Each
                | Self::Module
                | Self::Function
                | Self::Include
                | Self::Use
        )
    }

    /// Keyword tokens that are also argument names
    /// (`linear_extrude(scale = 2)`, `text(text = "hi")`, ...).
    pub const fn doubles_as_argument_name(&self) -> bool {
        matches!(self, Self::Scale | Self::Color | Self::Offset | Self::Text)
    }

    /// Binary arithmetic operators; never valid in this subset.
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Multiply | Self::Divide | Self::Modulo | Self::Power
        )
    }

    /// Comparison, logical and conditional operators; never valid in this subset.
    pub const fn is_logical(&self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::Less
                | Self::Greater
                | Self::LessEqual
                | Self::GreaterEqual
                | Self::And
                | Self::Or
                | Self::Question
        )
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Polyhedron => "polyhedron",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Polygon => "polygon",
            Self::Text => "text",
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Mirror => "mirror",
            Self::Color => "color",
            Self::Resize => "resize",
            Self::Multmatrix => "multmatrix",
            Self::Offset => "offset",
            Self::Hull => "hull",
            Self::Minkowski => "minkowski",
            Self::Union => "union",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
            Self::LinearExtrude => "linear_extrude",
            Self::RotateExtrude => "rotate_extrude",
            Self::For => "for",
            Self::If => "if",
            Self::Else => "else",
            Self::Let => "let",
            Self::Each => "each",
            Self::Module => "module",
            Self::Function => "function",
            Self::Include => "include",
            Self::Use => "use",
            Self::Number => "number",
            Self::String => "string",
            Self::True => "true",
            Self::False => "false",
            Self::Undef => "undef",
            Self::SpecialVar => "special variable",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Multiply => "'*'",
            Self::Divide => "'/'",
            Self::Modulo => "'%'",
            Self::Power => "'^'",
            Self::Not => "'!'",
            Self::Assign => "'='",
            Self::Equal => "'=='",
            Self::NotEqual => "'!='",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::And => "'&&'",
            Self::Or => "'||'",
            Self::Question => "'?'",
            Self::Colon => "':'",
            Self::Dot => "'.'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Eof => "end of input",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(TokenKind::keyword("union"), Some(TokenKind::Union));
        assert_eq!(TokenKind::keyword("unions"), None);
        assert_eq!(TokenKind::keyword("UNION"), None);
    }

    #[test]
    fn test_categories_are_disjoint() {
        let words = [
            "cube", "sphere", "translate", "hull", "union", "difference", "linear_extrude", "for",
            "module",
        ];
        for word in words {
            let kind = TokenKind::keyword(word).unwrap();
            let hits = [
                kind.is_primitive(),
                kind.is_transform(),
                kind.is_boolean(),
                kind.is_extrude(),
                kind.is_rejected_keyword(),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert_eq!(hits, 1, "{word} should be in exactly one category");
        }
    }

    #[test]
    fn test_argument_name_keywords() {
        assert!(TokenKind::Scale.doubles_as_argument_name());
        assert!(TokenKind::Text.doubles_as_argument_name());
        assert!(!TokenKind::Cube.doubles_as_argument_name());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::RParen.display(), "')'");
        assert_eq!(TokenKind::Identifier.display(), "identifier");
    }

    #[test]
    fn test_eof_lexeme() {
        assert_eq!(Token::new(TokenKind::Eof, "", 3, 1).lexeme(), "EOF");
    }

    #[test]
    fn test_token_json_uses_type_field() {
        let json = serde_json::to_value(Token::new(TokenKind::SpecialVar, "$fn", 1, 1)).unwrap();
        assert_eq!(json["type"], "SPECIAL_VAR");
        assert_eq!(json["value"], "$fn");
    }
}
