//! # Value Parsing
//!
//! Literal values: numbers (optionally signed), booleans, strings and
//! bracketed vectors. Expressions are rejected with a message naming the
//! offending construct.
//!
//! ## Grammar
//!
//! ```text
//! value  = ("-" | "+")? NUMBER | "true" | "false" | STRING | vector
//! vector = "[" (value ("," value)* ","?)? "]"
//! ```

use super::Parser;
use crate::error::ParseError;
use crate::grammar;
use crate::lexer::{Token, TokenKind};
use scad_ast::Value;

impl<'t> Parser<'t> {
    /// Parse a value and reject any operator that follows it.
    pub(super) fn parse_value(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value_form()?;

        let next = self.peek();
        if next.kind.is_arithmetic() {
            return Err(ParseError::unsupported(
                next,
                format!(
                    "Arithmetic expressions are not supported; write the result as a literal instead of using '{}'",
                    next.value
                ),
            ));
        }
        if next.kind.is_logical() {
            return Err(ParseError::unsupported(
                next,
                format!("Comparison and logical operators are not supported ('{}')", next.value),
            ));
        }
        if next.kind == TokenKind::Colon {
            return Err(ParseError::unsupported(next, "Range expressions are not supported"));
        }

        Ok(value)
    }

    fn parse_value_form(&mut self) -> Result<Value, ParseError> {
        let token = self.peek();

        match token.kind {
            TokenKind::Number => {
                self.advance();
                number(token).map(Value::Number)
            }
            TokenKind::Minus | TokenKind::Plus => {
                self.advance();
                let digits = self.expect(TokenKind::Number)?;
                let n = number(digits)?;
                Ok(Value::Number(if token.kind == TokenKind::Minus { -n } else { n }))
            }
            TokenKind::True => {
                self.advance();
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Bool(false))
            }
            TokenKind::String => {
                self.advance();
                Ok(Value::String(token.value.clone()))
            }
            TokenKind::LBracket => self.parse_vector(),
            TokenKind::Undef => Err(ParseError::new(
                token.position(),
                token.lexeme(),
                grammar::VALUE_FORMS,
                "undef is not a supported value",
            )),
            TokenKind::Identifier if self.peek_next_is(TokenKind::LParen) => Err(ParseError::new(
                token.position(),
                token.lexeme(),
                grammar::VALUE_FORMS,
                format!("Function calls are not supported ('{}(...)'); use a literal value", token.value),
            )),
            TokenKind::Identifier | TokenKind::SpecialVar => Err(ParseError::new(
                token.position(),
                token.lexeme(),
                grammar::VALUE_FORMS,
                format!("Variables are not supported ('{}'); use a literal value", token.value),
            )),
            kind if kind.is_rejected_keyword() => Err(ParseError::unsupported(
                token,
                format!("'{}' is not supported inside values", token.value),
            )),
            _ => Err(ParseError::unexpected(token, grammar::VALUE_FORMS)),
        }
    }

    /// Parse a vector literal; nested vectors count towards the depth limit.
    fn parse_vector(&mut self) -> Result<Value, ParseError> {
        self.expect(TokenKind::LBracket)?;

        self.nested(|parser| {
            let mut items = Vec::new();
            loop {
                parser.tick()?;

                if parser.match_token(TokenKind::RBracket) {
                    return Ok(Value::Vector(items));
                }

                items.push(parser.parse_value()?);

                if parser.match_token(TokenKind::Comma) {
                    continue;
                }
                if parser.match_token(TokenKind::RBracket) {
                    return Ok(Value::Vector(items));
                }
                return Err(ParseError::unexpected(parser.peek(), grammar::VECTOR_SEPARATORS));
            }
        })
    }
}

/// Literal value of a NUMBER token; literals that overflow to infinity are rejected.
fn number(token: &Token) -> Result<f64, ParseError> {
    let invalid = |message: &str| ParseError::new(token.position(), token.lexeme(), &[grammar::NUMBER], message);
    let n = token.value.parse::<f64>().map_err(|_| invalid("Invalid number"))?;
    if !n.is_finite() {
        return Err(invalid(&format!("Number out of range: {}", token.value)));
    }
    Ok(n)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use scad_ast::Value;

    fn value(source: &str) -> Result<Value, crate::ParseError> {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let mut parser = Parser::new(&tokens)?;
        parser.parse_value()
    }

    #[test]
    fn test_signed_numbers() {
        assert_eq!(value("-2.5").unwrap(), Value::Number(-2.5));
        assert_eq!(value("+3").unwrap(), Value::Number(3.0));
        assert_eq!(value("1e3").unwrap(), Value::Number(1000.0));
    }

    #[test]
    fn test_overflowing_number_is_rejected() {
        for source in ["1e999", "-1e999", "[1, 1e400]"] {
            let err = value(source).unwrap_err();
            assert!(err.message.starts_with("Number out of range"), "{source}");
            assert_eq!(err.expected, vec!["number"]);
        }
    }

    #[test]
    fn test_nested_vector_with_trailing_comma() {
        let v = value("[[1, 2], [true, \"a\"],]").unwrap();
        assert_eq!(
            v,
            Value::Vector(vec![
                Value::Vector(vec![Value::Number(1.0), Value::Number(2.0)]),
                Value::Vector(vec![Value::Bool(true), Value::String("a".into())]),
            ])
        );
    }

    #[test]
    fn test_empty_vector() {
        assert_eq!(value("[]").unwrap(), Value::Vector(Vec::new()));
    }

    #[test]
    fn test_arithmetic_is_rejected() {
        let err = value("10 * 2").unwrap_err();
        assert!(err.message.contains("Arithmetic"));
        assert!(err.expected.is_empty());
        assert_eq!(err.found, "*");
    }

    #[test]
    fn test_range_is_rejected() {
        let err = value("[0 : 10]").unwrap_err();
        assert!(err.message.contains("Range"));
    }

    #[test]
    fn test_variable_reference_lists_value_forms() {
        let err = value("width").unwrap_err();
        assert!(err.message.contains("Variables are not supported"));
        assert_eq!(err.expected, vec!["number", "boolean", "string", "vector"]);
    }

    #[test]
    fn test_function_call_in_value() {
        let err = value("sin(30)").unwrap_err();
        assert!(err.message.contains("Function calls"));
    }

    #[test]
    fn test_negated_vector_is_rejected() {
        let err = value("-[1, 2]").unwrap_err();
        assert_eq!(err.expected, vec!["number"]);
    }

    #[test]
    fn test_list_comprehension_is_rejected() {
        let err = value("[for (i = [0:3]) i]").unwrap_err();
        assert!(err.message.contains("'for'"));
    }

    #[test]
    fn test_unclosed_vector() {
        let err = value("[1, 2").unwrap_err();
        assert_eq!(err.expected, vec!["','", "']'"]);
    }
}
