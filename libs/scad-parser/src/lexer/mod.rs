//! # SCAD Lexer
//!
//! Tokenizes source text into tokens. Fails on the first malformed token;
//! no partial token stream is ever returned.
//!
//! ## Example
//!
//! ```rust
//! use scad_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("cube(10);").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Cube);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::LexError;
use scad_ast::Position;

// =============================================================================
// LEXER
// =============================================================================

/// SCAD lexer.
///
/// Converts source text into a stream of tokens terminated by exactly one
/// [`TokenKind::Eof`].
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens ending with the EOF token, or the first lex error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.skip_whitespace_and_comments()?;
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof = self.cursor.position();
        self.tokens.push(Token::new(TokenKind::Eof, "", eof.line, eof.column));

        Ok(self.tokens)
    }

    /// Skip whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            self.cursor.advance_while(char::is_whitespace);

            match (self.cursor.peek(), self.cursor.peek_next()) {
                (Some('/'), Some('/')) => {
                    self.cursor.advance_while(|c| c != '\n');
                }
                (Some('/'), Some('*')) => {
                    let start = self.cursor.position();
                    self.cursor.advance(); // /
                    self.cursor.advance(); // *
                    loop {
                        match (self.cursor.peek(), self.cursor.peek_next()) {
                            (Some('*'), Some('/')) => {
                                self.cursor.advance();
                                self.cursor.advance();
                                break;
                            }
                            (Some(_), _) => {
                                self.cursor.advance();
                            }
                            (None, _) => {
                                return Err(LexError::new(start, "/*", "Unterminated block comment"));
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.offset();
        let Some(c) = self.cursor.advance() else {
            return Ok(());
        };

        let kind = match c {
            // Single-character tokens
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '?' => TokenKind::Question,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '%' => TokenKind::Modulo,
            '^' => TokenKind::Power,
            '.' => TokenKind::Dot,
            // Comment starts were consumed before scan_token
            '/' => TokenKind::Divide,

            // One- or two-character tokens
            '=' => self.one_or_two('=', TokenKind::Assign, TokenKind::Equal),
            '!' => self.one_or_two('=', TokenKind::Not, TokenKind::NotEqual),
            '<' => self.one_or_two('=', TokenKind::Less, TokenKind::LessEqual),
            '>' => self.one_or_two('=', TokenKind::Greater, TokenKind::GreaterEqual),
            '&' => self.doubled('&', TokenKind::And, start)?,
            '|' => self.doubled('|', TokenKind::Or, start)?,

            '"' => return self.scan_string(start),
            '0'..='9' => return self.scan_number(start, start_byte),
            'a'..='z' | 'A'..='Z' | '_' => return self.scan_identifier(start, start_byte),
            '$' => return self.scan_special_variable(start, start_byte),

            other => {
                return Err(LexError::new(
                    start,
                    other.to_string(),
                    format!("Unexpected character '{}'", other),
                ));
            }
        };

        let text = self.cursor.slice_from(start_byte);
        self.push(kind, text, start);
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, text: &str, start: Position) {
        self.tokens.push(Token::new(kind, text, start.line, start.column));
    }

    /// `=`-suffixed operators: consume the second character when present.
    fn one_or_two(&mut self, second: char, single: TokenKind, double: TokenKind) -> TokenKind {
        if self.cursor.peek() == Some(second) {
            self.cursor.advance();
            double
        } else {
            single
        }
    }

    /// `&&` and `||`: the single character has no meaning on its own.
    fn doubled(&mut self, c: char, kind: TokenKind, start: Position) -> Result<TokenKind, LexError> {
        if self.cursor.peek() == Some(c) {
            self.cursor.advance();
            Ok(kind)
        } else {
            Err(LexError::new(
                start,
                c.to_string(),
                format!("Unexpected character '{c}' (did you mean '{c}{c}'?)"),
            ))
        }
    }

    /// Scan a string literal. The opening quote is already consumed.
    ///
    /// Backslash escapes are kept verbatim: the backslash and the character
    /// after it both become part of the value.
    fn scan_string(&mut self, start: Position) -> Result<(), LexError> {
        let mut value = String::new();
        loop {
            match self.cursor.advance() {
                Some('"') => break,
                Some('\\') => {
                    value.push('\\');
                    match self.cursor.peek() {
                        Some('\n') | None => return Err(unterminated_string(start)),
                        Some(_) => {
                            if let Some(escaped) = self.cursor.advance() {
                                value.push(escaped);
                            }
                        }
                    }
                }
                Some('\n') | None => return Err(unterminated_string(start)),
                Some(c) => value.push(c),
            }
        }

        self.push(TokenKind::String, &value, start);
        Ok(())
    }

    /// Scan a number literal. The first digit is already consumed.
    ///
    /// A fraction is only taken when a digit follows the `.`, and an exponent
    /// only when a digit follows the `e`/`E` (after an optional sign); in both
    /// cases the unconsumed characters are lexed as separate tokens.
    fn scan_number(&mut self, start: Position, start_byte: usize) -> Result<(), LexError> {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.') && is_digit(self.cursor.peek_next()) {
            self.cursor.advance(); // .
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        if matches!(self.cursor.peek(), Some('e') | Some('E')) {
            let digit_follows = match self.cursor.peek_next() {
                Some('+') | Some('-') => is_digit(self.cursor.peek_nth(2)),
                next => is_digit(next),
            };
            if digit_follows {
                self.cursor.advance(); // e
                if matches!(self.cursor.peek(), Some('+') | Some('-')) {
                    self.cursor.advance();
                }
                self.cursor.advance_while(|c| c.is_ascii_digit());
            }
        }

        let text = self.cursor.slice_from(start_byte);
        self.push(TokenKind::Number, text, start);
        Ok(())
    }

    /// Scan an identifier or keyword.
    fn scan_identifier(&mut self, start: Position, start_byte: usize) -> Result<(), LexError> {
        self.cursor.advance_while(is_word_char);

        let text = self.cursor.slice_from(start_byte);
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.push(kind, text, start);
        Ok(())
    }

    /// Scan a special variable ($fn, $fa, etc.).
    fn scan_special_variable(&mut self, start: Position, start_byte: usize) -> Result<(), LexError> {
        if !self.cursor.peek().is_some_and(is_word_char) {
            return Err(LexError::new(
                start,
                "$",
                "Expected a special variable name after '$'",
            ));
        }
        self.cursor.advance_while(is_word_char);

        let text = self.cursor.slice_from(start_byte);
        self.push(TokenKind::SpecialVar, text, start);
        Ok(())
    }
}

fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn unterminated_string(start: Position) -> LexError {
    LexError::new(start, "\"", "Unterminated string")
}

/// Tokenize `source`.
///
/// ```rust
/// use scad_parser::lexer::{lex, TokenKind};
///
/// let kinds: Vec<_> = lex("1.").unwrap().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_cube() {
        let tokens = lex("cube(10);").unwrap();

        // cube, (, 10, ), ;, EOF = 6 tokens
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].kind, TokenKind::Cube);
        assert_eq!(tokens[1].kind, TokenKind::LParen);
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].value, "10");
        assert_eq!(tokens[3].kind, TokenKind::RParen);
        assert_eq!(tokens[4].kind, TokenKind::Semicolon);
        assert_eq!(tokens[5].kind, TokenKind::Eof);
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens = lex("cube(1);\n  sphere(2);").unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        let sphere = tokens.iter().find(|t| t.kind == TokenKind::Sphere).unwrap();
        assert_eq!((sphere.line, sphere.column), (2, 3));
    }

    #[test]
    fn test_tokenize_with_comments() {
        assert_eq!(
            kinds("// comment\ncube /* inline */ (1);"),
            vec![
                TokenKind::Cube,
                TokenKind::LParen,
                TokenKind::Number,
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_reports_start() {
        let err = lex("cube(1);\n  /* never closed").unwrap_err();
        assert_eq!((err.line, err.column), (2, 3));
        assert_eq!(err.found, "/*");
    }

    #[test]
    fn test_divide_is_not_a_comment() {
        assert_eq!(kinds("4 / 2"), vec![TokenKind::Number, TokenKind::Divide, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            kinds("== != <= >= && || = ! < >"),
            vec![
                TokenKind::Equal,
                TokenKind::NotEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Assign,
                TokenKind::Not,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_lone_ampersand_and_pipe_fail() {
        assert_eq!(lex("a & b").unwrap_err().found, "&");
        let err = lex("a | b").unwrap_err();
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn test_string_keeps_backslashes() {
        let tokens = lex(r#""a\"b\n""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].value, r#"a\"b\n"#);
    }

    #[test]
    fn test_newline_in_string_is_unterminated() {
        let err = lex("text(\"abc\ndef\");").unwrap_err();
        assert_eq!(err.message, "Unterminated string");
        assert_eq!((err.line, err.column), (1, 6));
    }

    #[test]
    fn test_number_forms() {
        let tokens = lex("3.14 1e5 2E-3 7e+2").unwrap();
        let values: Vec<_> = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["3.14", "1e5", "2E-3", "7e+2", ""]);
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        let tokens = lex("1.").unwrap();
        assert_eq!(tokens[0].value, "1");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[1].value, ".");
    }

    #[test]
    fn test_bare_exponent_is_identifier() {
        let tokens = lex("1e").unwrap();
        assert_eq!((tokens[0].kind, tokens[0].value.as_str()), (TokenKind::Number, "1"));
        assert_eq!((tokens[1].kind, tokens[1].value.as_str()), (TokenKind::Identifier, "e"));
    }

    #[test]
    fn test_signed_exponent_without_digit() {
        assert_eq!(
            kinds("1e+"),
            vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Plus, TokenKind::Eof]
        );
    }

    #[test]
    fn test_tokenize_special_variable() {
        let tokens = lex("$fn").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::SpecialVar);
        assert_eq!(tokens[0].value, "$fn");
    }

    #[test]
    fn test_bare_dollar_fails() {
        assert!(lex("$ = 3;").is_err());
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("true false undef center linear_extrude"),
            vec![
                TokenKind::True,
                TokenKind::False,
                TokenKind::Undef,
                TokenKind::Identifier,
                TokenKind::LinearExtrude,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unknown_character() {
        let err = lex("#cube(1);").unwrap_err();
        assert_eq!(err.found, "#");
        assert_eq!(err.message, "Unexpected character '#'");
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_eq!(kinds("  \n\t "), vec![TokenKind::Eof]);
    }
}
