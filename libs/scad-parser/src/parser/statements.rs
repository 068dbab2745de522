//! # Statement Parsing
//!
//! One dispatcher serves the top level and every child block. Each leading
//! token is classified as primitive, transform, boolean operation,
//! extrusion, special variable assignment, or a rejected construct.
//!
//! ## Grammar
//!
//! ```text
//! statement = primitive_call | transform | boolean_op | extrude | special_assign
//! special_assign = SPECIAL_VAR "=" value ";"
//! ```

use super::Parser;
use crate::error::ParseError;
use crate::grammar;
use crate::lexer::{Token, TokenKind};
use scad_ast::{Node, SpecialValue, SpecialVar, SpecialVarAssign, Value};

impl<'t> Parser<'t> {
    /// Parse a single statement.
    pub(super) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let token = self.peek();
        let kind = token.kind;

        if kind.is_primitive() {
            return self.parse_primitive_call();
        }
        if kind.is_transform() {
            return self.parse_transform();
        }
        if kind.is_boolean() {
            return self.parse_boolean_op();
        }
        if kind.is_extrude() {
            return self.parse_extrude();
        }
        if kind.is_rejected_keyword() {
            return Err(reject_keyword(token));
        }

        match kind {
            TokenKind::SpecialVar => self.parse_special_assignment(),
            TokenKind::Identifier => Err(self.reject_identifier(token)),
            TokenKind::Multiply | TokenKind::Not | TokenKind::Modulo => Err(ParseError::unsupported(
                token,
                format!("The '{}' modifier is not supported", token.value),
            )),
            TokenKind::LBrace => Err(ParseError::unsupported(
                token,
                "Bare blocks are not supported; group statements with union() { ... }",
            )),
            _ => Err(ParseError::unexpected(token, grammar::STATEMENT_START)),
        }
    }

    /// Parse `$fn = 32;`.
    fn parse_special_assignment(&mut self) -> Result<Node, ParseError> {
        let name_token = self.advance();
        let Some(name) = SpecialVar::from_name(&name_token.value) else {
            return Err(ParseError::unsupported(
                name_token,
                format!(
                    "Assignment to '{}' is not supported; only $fn, $fa and $fs may be assigned",
                    name_token.value
                ),
            ));
        };

        self.expect(TokenKind::Assign)?;

        let value_token = self.peek();
        let value = match self.parse_value()? {
            Value::Number(n) => Some(SpecialValue::Number(n)),
            vector @ Value::Vector(_) => vector.as_numbers().map(SpecialValue::Vector),
            _ => None,
        };
        let Some(value) = value else {
            return Err(ParseError::new(
                value_token.position(),
                value_token.lexeme(),
                grammar::SPECIAL_VALUE_FORMS,
                format!("{} must be a number or a vector of numbers", name.name()),
            ));
        };

        self.expect(TokenKind::Semicolon)?;

        Ok(Node::SpecialVarAssign(SpecialVarAssign {
            name,
            value,
            position: name_token.position(),
        }))
    }

    /// Identifier-led statements: plain assignment or a call to an unknown module.
    fn reject_identifier(&self, token: &Token) -> ParseError {
        if self.peek_next_is(TokenKind::Assign) {
            ParseError::unsupported(
                token,
                format!(
                    "Variable assignment '{} = ...' is not supported; only special variables ($fn, $fa, $fs) may be assigned",
                    token.value
                ),
            )
        } else if self.peek_next_is(TokenKind::LParen) {
            ParseError::unsupported(
                token,
                format!(
                    "Unknown module '{}'; user-defined modules are not supported",
                    token.value
                ),
            )
        } else {
            ParseError::unexpected(token, grammar::STATEMENT_START)
        }
    }
}

/// Control flow, definitions and file inclusion.
fn reject_keyword(token: &Token) -> ParseError {
    let message = match token.kind {
        TokenKind::For => "for loops are not supported",
        TokenKind::If => "if statements are not supported",
        TokenKind::Else => "else branches are not supported (if statements are not supported)",
        TokenKind::Let => "let expressions are not supported",
        TokenKind::Each => "each is not supported",
        TokenKind::Module => "module definitions are not supported",
        TokenKind::Function => "function definitions are not supported",
        TokenKind::Include => "include statements are not supported",
        TokenKind::Use => "use statements are not supported",
        _ => "unsupported statement",
    };
    ParseError::unsupported(token, message)
}

// =============================================================================
// TESTS
// =============================================================================
