//! # SCAD Parser (Pure Rust)
//!
//! Lexer and recursive-descent parser for a restricted OpenSCAD subset:
//! primitives, transforms, boolean operations, extrusions and `$fn`/`$fa`/`$fs`
//! assignments. Expressions, variables, control flow and user modules are
//! rejected with errors that name the unsupported construct.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Program (scad-ast)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use scad_parser::parse;
//!
//! let program = parse("translate([5, 0, 0]) rotate([0, 0, 45]) cube(10);").unwrap();
//! assert_eq!(program.body.len(), 1);
//! assert_eq!(program.node_count(), 3);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the pipeline:
//!
//! ```text
//! scad-parser → scad-ast → scad-transpiler
//! ```

mod arguments;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;

pub use error::{LexError, ParseError, SyntaxError};
pub use lexer::{lex, Token, TokenKind};

use scad_ast::Program;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse SCAD source code into a [`Program`].
///
/// Lexes the whole source first; the first lex or parse error aborts.
///
/// ## Example
///
/// ```rust
/// use scad_parser::parse;
///
/// let err = parse("for (i = [0:3]) cube(i);").unwrap_err();
/// let parse_err = err.as_parse().unwrap();
/// assert!(parse_err.message.contains("for loops"));
/// assert!(parse_err.expected.is_empty());
/// ```
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    let tokens = lex(source)?;
    Ok(parse_tokens(&tokens)?)
}

/// Parse an existing token stream. The stream must end with EOF.
///
/// ```rust
/// use scad_parser::{lex, parse_tokens};
///
/// let tokens = lex("sphere(d = 4);").unwrap();
/// let program = parse_tokens(&tokens).unwrap();
/// assert_eq!(program.body[0].node_type(), "PrimitiveCall");
/// ```
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, ParseError> {
    parser::Parser::new(tokens)?.parse()
}
