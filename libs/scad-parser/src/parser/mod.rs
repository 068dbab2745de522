//! # SCAD Parser
//!
//! Recursive descent parser for the SCAD subset.
//! Produces a [`Program`] or fails on the first grammar violation; there is
//! no error recovery and no partial result.
//!
//! ## Example
//!
//! ```rust
//! use scad_parser::lexer::Lexer;
//! use scad_parser::parser::Parser;
//!
//! let tokens = Lexer::new("cube(10);").tokenize().unwrap();
//! let program = Parser::new(&tokens).unwrap().parse().unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

mod module_call;
mod statements;
mod values;

use crate::error::ParseError;
use crate::grammar;
use crate::lexer::{Token, TokenKind};
use config::constants::{iteration_ceiling, MAX_NESTING_DEPTH};
use scad_ast::{Position, Program};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a borrowed token slice.
///
/// The slice is never modified; the parser only moves an index over it.
pub struct Parser<'t> {
    /// Token stream, ending with EOF.
    tokens: &'t [Token],
    /// Current token index.
    current: usize,
    /// Current nesting depth (child blocks and vector literals).
    depth: usize,
    /// Loop iterations consumed so far.
    iterations: usize,
    /// Iteration ceiling derived from the token count.
    iteration_limit: usize,
}

impl<'t> Parser<'t> {
    /// Create a new parser.
    ///
    /// ## Errors
    ///
    /// The token stream must be non-empty and end with an EOF token.
    pub fn new(tokens: &'t [Token]) -> Result<Self, ParseError> {
        match tokens.last() {
            Some(last) if last.is_eof() => Ok(Self {
                tokens,
                current: 0,
                depth: 0,
                iterations: 0,
                iteration_limit: iteration_ceiling(tokens.len()),
            }),
            Some(last) => Err(ParseError::new(
                last.position(),
                last.lexeme(),
                &[TokenKind::Eof.display()],
                "Token stream must end with EOF",
            )),
            None => Err(ParseError::new(
                Position::start(),
                "",
                &[TokenKind::Eof.display()],
                "Token stream is empty",
            )),
        }
    }

    /// Parse the entire token stream into a program.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let position = self.peek().position();
        let body = self.parse_statement_list(TokenKind::Eof)?;
        Ok(Program { body, position })
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token. Past the end this is the EOF token.
    fn peek(&self) -> &'t Token {
        let index = self.current.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Check the kind of the token after the current one.
    fn peek_next_is(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.current + 1)
            .is_some_and(|token| token.kind == kind)
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Check if at end of file.
    fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed (EOF is never consumed)
    fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if !token.is_eof() {
            self.current += 1;
        }
        token
    }

    /// Consume token if it matches expected kind.
    ///
    /// ## Returns
    ///
    /// Ok with consumed token, or Err naming the expected kind
    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(self.peek(), &[kind.display()]))
        }
    }

    /// Try to consume token if it matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // GUARDS
    // =========================================================================

    /// Count one loop iteration against the ceiling.
    fn tick(&mut self) -> Result<(), ParseError> {
        self.iterations += 1;
        if self.iterations > self.iteration_limit {
            let token = self.peek();
            return Err(ParseError::new(
                token.position(),
                token.lexeme(),
                &[],
                format!("Parser iteration limit of {} exceeded", self.iteration_limit),
            ));
        }
        Ok(())
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::unsupported(
                self.peek(),
                format!("Nesting depth exceeds the limit of {MAX_NESTING_DEPTH}"),
            ));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // =========================================================================
    // STATEMENT LISTS
    // =========================================================================

    /// Parse statements until `terminator`, skipping stray semicolons.
    ///
    /// A closing brace terminator is consumed; EOF is not.
    fn parse_statement_list(&mut self, terminator: TokenKind) -> Result<Vec<scad_ast::Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            self.tick()?;

            if self.match_token(TokenKind::Semicolon) {
                continue;
            }
            if self.check(terminator) {
                self.advance();
                return Ok(nodes);
            }
            if self.is_at_end() {
                return Err(ParseError::unexpected(self.peek(), &[grammar::CLOSE_BRACE]));
            }

            nodes.push(self.parse_statement()?);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
