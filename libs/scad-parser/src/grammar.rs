//! # Expected-Token Descriptions
//!
//! Every `expected` entry a [`crate::ParseError`] can carry is defined here,
//! so the same grammar position always reports the same alternatives.
//! Punctuation entries come from [`TokenKind::display`].

use crate::lexer::TokenKind;

pub const CLOSE_PAREN: &str = TokenKind::RParen.display();
const CLOSE_BRACKET: &str = TokenKind::RBracket.display();
const OPEN_BRACE: &str = TokenKind::LBrace.display();
pub const CLOSE_BRACE: &str = TokenKind::RBrace.display();
const COMMA: &str = TokenKind::Comma.display();
pub const SEMICOLON: &str = TokenKind::Semicolon.display();

pub const NUMBER: &str = "number";
pub const BOOLEAN: &str = "boolean";
pub const STRING: &str = "string";
pub const VECTOR: &str = "vector";

/// The only expressible value forms.
pub const VALUE_FORMS: &[&str] = &[NUMBER, BOOLEAN, STRING, VECTOR];

/// What may start a statement.
pub const STATEMENT_START: &[&str] = &[
    "primitive",
    "transform",
    "boolean operation",
    "extrusion",
    "special variable assignment",
];

/// What may follow a transform, boolean or extrusion call.
pub const CHILDREN_START: &[&str] = &[OPEN_BRACE, SEMICOLON, "statement"];

/// Separators inside an argument list.
pub const ARGUMENT_SEPARATORS: &[&str] = &[COMMA, CLOSE_PAREN];

/// Separators inside a vector literal.
pub const VECTOR_SEPARATORS: &[&str] = &[COMMA, CLOSE_BRACKET];

/// Right-hand side of a special variable assignment.
pub const SPECIAL_VALUE_FORMS: &[&str] = &[NUMBER, VECTOR];
