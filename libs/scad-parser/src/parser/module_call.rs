//! # Module Call Parsing
//!
//! Parses module calls and arguments.
//!
//! ## Responsibilities
//!
//! - Primitive calls: `cube(10);`
//! - Calls with children: `translate([1,2,3]) cube(5);`, `union() { ... }`
//! - Argument parsing (positional and named)

use super::Parser;
use crate::arguments::{self, ArgumentList};
use crate::error::ParseError;
use crate::grammar;
use crate::lexer::{Token, TokenKind};
use scad_ast::{BooleanKind, BooleanOp, Extrude, Node, PrimitiveCall, Transform};

impl<'t> Parser<'t> {
    /// Parse primitive call.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// primitive_call = primitive "(" arguments ")" ";"
    /// ```
    pub(super) fn parse_primitive_call(&mut self) -> Result<Node, ParseError> {
        let keyword = self.advance();
        let args = self.parse_arguments(keyword)?;
        let primitive = arguments::primitive(&args)?;

        if self.check(TokenKind::LBrace) {
            return Err(ParseError::new(
                self.peek().position(),
                self.peek().lexeme(),
                &[grammar::SEMICOLON],
                format!("{} is a primitive and cannot have children", keyword.value),
            ));
        }
        self.expect(TokenKind::Semicolon)?;

        Ok(Node::PrimitiveCall(PrimitiveCall {
            primitive,
            position: keyword.position(),
        }))
    }

    /// Parse transform with children.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// transform = transform_name "(" arguments ")" children
    /// ```
    pub(super) fn parse_transform(&mut self) -> Result<Node, ParseError> {
        let keyword = self.advance();
        let args = self.parse_arguments(keyword)?;
        let transform = arguments::transform(&args)?;
        let children = self.parse_children()?;

        Ok(Node::Transform(Transform {
            transform,
            children,
            position: keyword.position(),
        }))
    }

    /// Parse boolean operation. Arguments are parsed and discarded.
    pub(super) fn parse_boolean_op(&mut self) -> Result<Node, ParseError> {
        let keyword = self.advance();
        let op = match keyword.kind {
            TokenKind::Difference => BooleanKind::Difference,
            TokenKind::Intersection => BooleanKind::Intersection,
            _ => BooleanKind::Union,
        };
        self.parse_arguments(keyword)?;
        let children = self.parse_children()?;

        Ok(Node::BooleanOp(BooleanOp {
            op,
            children,
            position: keyword.position(),
        }))
    }

    /// Parse `linear_extrude(...)` or `rotate_extrude(...)` with children.
    pub(super) fn parse_extrude(&mut self) -> Result<Node, ParseError> {
        let keyword = self.advance();
        let args = self.parse_arguments(keyword)?;
        let extrude = arguments::extrude(&args)?;
        let children = self.parse_children()?;

        Ok(Node::Extrude(Extrude {
            extrude,
            children,
            position: keyword.position(),
        }))
    }

    /// Parse the children of a call.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// children = "{" statement* "}" ";"? | ";" | statement
    /// ```
    fn parse_children(&mut self) -> Result<Vec<Node>, ParseError> {
        self.nested(|parser| {
            if parser.match_token(TokenKind::LBrace) {
                let children = parser.parse_statement_list(TokenKind::RBrace)?;
                parser.match_token(TokenKind::Semicolon);
                Ok(children)
            } else if parser.match_token(TokenKind::Semicolon) {
                Ok(Vec::new())
            } else if parser.is_at_end() {
                Err(ParseError::unexpected(parser.peek(), grammar::CHILDREN_START))
            } else {
                Ok(vec![parser.parse_statement()?])
            }
        })
    }

    /// Parse arguments list, including the parentheses.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// arguments = "(" (argument ("," argument)* ","?)? ")"
    /// argument = value | name "=" value
    /// ```
    fn parse_arguments(&mut self, keyword: &'t Token) -> Result<ArgumentList, ParseError> {
        self.expect(TokenKind::LParen)?;
        let mut args = ArgumentList::new(keyword);

        loop {
            self.tick()?;

            if self.match_token(TokenKind::RParen) {
                return Ok(args);
            }

            self.parse_argument(&mut args)?;

            if self.match_token(TokenKind::Comma) {
                continue;
            }
            if self.match_token(TokenKind::RParen) {
                return Ok(args);
            }
            return Err(ParseError::unexpected(self.peek(), grammar::ARGUMENT_SEPARATORS));
        }
    }

    /// Parse single argument.
    ///
    /// An argument is named when its first token is an identifier, a special
    /// variable or a keyword that doubles as an argument name, and the next
    /// token is `=`.
    fn parse_argument(&mut self, args: &mut ArgumentList) -> Result<(), ParseError> {
        let token = self.peek();
        let is_name = matches!(token.kind, TokenKind::Identifier | TokenKind::SpecialVar)
            || token.kind.doubles_as_argument_name();

        if is_name && self.peek_next_is(TokenKind::Assign) {
            self.advance(); // name
            self.advance(); // =
            let value_token = self.peek();
            let value = self.parse_value()?;
            args.push_named(token, value_token, value)
        } else {
            let value = self.parse_value()?;
            args.push_positional(token, value);
            Ok(())
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::parse;
    use scad_ast::{BooleanKind, CubeSize, Node, Primitive, TransformOp};

    fn parse_err(source: &str) -> crate::ParseError {
        parse(source).unwrap_err().as_parse().cloned().unwrap()
    }

    #[test]
    fn test_parse_cube_with_center() {
        let program = parse("cube(10, center=true);").unwrap();
        match &program.body[0] {
            Node::PrimitiveCall(call) => match &call.primitive {
                Primitive::Cube(args) => {
                    assert_eq!(args.size, Some(CubeSize::Scalar(10.0)));
                    assert_eq!(args.center, Some(true));
                }
                other => panic!("Expected cube, got {other:?}"),
            },
            other => panic!("Expected PrimitiveCall, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_comma_in_arguments() {
        assert!(parse("cube([1, 2, 3], true,);").is_ok());
    }

    #[test]
    fn test_missing_semicolon_after_primitive() {
        let err = parse_err("cube(10)");
        assert_eq!(err.expected, vec!["';'"]);
        assert_eq!(err.message, "Expected ';' but found end of input");
    }

    #[test]
    fn test_primitive_with_children_is_rejected() {
        let err = parse_err("cube(10) { sphere(1); }");
        assert!(err.message.contains("cannot have children"));
        assert_eq!((err.line, err.column), (1, 10));
    }

    #[test]
    fn test_transform_with_block_and_trailing_semicolon() {
        let program = parse("translate([1, 2, 3]) { cube(1); sphere(1); };").unwrap();
        assert_eq!(program.body.len(), 1);
        assert_eq!(program.body[0].children().len(), 2);
    }

    #[test]
    fn test_transform_with_semicolon_has_no_children() {
        let program = parse("translate([1, 0, 0]);").unwrap();
        assert!(program.body[0].children().is_empty());
    }

    #[test]
    fn test_transform_at_end_of_input() {
        let err = parse_err("translate([1, 0, 0])");
        assert_eq!(err.expected, vec!["'{'", "';'", "statement"]);
    }

    #[test]
    fn test_boolean_arguments_are_discarded() {
        let program = parse("difference(convexity = 3) { cube(2); sphere(1); }").unwrap();
        match &program.body[0] {
            Node::BooleanOp(op) => {
                assert_eq!(op.op, BooleanKind::Difference);
                assert_eq!(op.children.len(), 2);
            }
            other => panic!("Expected BooleanOp, got {other:?}"),
        }
    }

    #[test]
    fn test_keyword_named_argument() {
        let program = parse("linear_extrude(height = 5, scale = 2) square(1);").unwrap();
        assert_eq!(program.body[0].node_type(), "Extrude");
    }

    #[test]
    fn test_missing_argument_separator() {
        let err = parse_err("cube(10 20);");
        assert_eq!(err.expected, vec!["','", "')'"]);
        assert_eq!(err.found, "20");
    }

    #[test]
    fn test_missing_open_paren() {
        let err = parse_err("cube 10;");
        assert_eq!(err.expected, vec!["'('"]);
    }

    #[test]
    fn test_transform_position_is_keyword_position() {
        let program = parse("\n  rotate(45) cube(1);").unwrap();
        assert_eq!(program.body[0].position(), scad_ast::Position::new(2, 3));
        match &program.body[0] {
            Node::Transform(t) => assert!(matches!(t.transform, TransformOp::Rotate { .. })),
            other => panic!("Expected Transform, got {other:?}"),
        }
    }
}
