//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core dispatch.

use jackc_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};

/// Lexer for the Jack programming language.
///
/// The lexer transforms source code text into a stream of tokens. It
/// handles whitespace, `//` and `/* */` comments, identifiers, keywords,
/// single-character symbols, integer constants, and string constants.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    fn span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// This is the main entry point for tokenization: skip whitespace and
    /// comments, then dispatch on the current character per the fixed Jack
    /// lexical grammar.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        let c = self.cursor.current_char();
        let kind = match c {
            '"' => self.lex_string()?,
            c if c.is_ascii_digit() => self.lex_number()?,
            c if is_identifier_start(c) => self.lex_identifier(),
            c if super::operator::is_symbol_char(c) => {
                self.cursor.advance();
                TokenKind::Symbol(c)
            }
            c => {
                let span = self.span();
                self.cursor.advance();
                return Err(LexError::UnexpectedChar { ch: c, span });
            }
        };

        Ok(Some(Token::new(kind, self.span())))
    }
}

/// Jack identifiers start with a letter or underscore (JLS: "a sequence of
/// letters, digits, and underscores not starting with a digit").
pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Keyword;

    fn tokenize(src: &str) -> Vec<Token> {
        Lexer::new(src).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn empty_source_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn keywords_and_symbols() {
        let tokens = tokenize("class Main { }");
        assert_eq!(
            tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
            vec![
                TokenKind::Keyword(Keyword::Class),
                TokenKind::Identifier("Main".into()),
                TokenKind::Symbol('{'),
                TokenKind::Symbol('}'),
            ]
        );
    }

    #[test]
    fn unexpected_character_is_an_error() {
        let mut lexer = Lexer::new("@");
        assert!(matches!(lexer.next_token(), Err(LexError::UnexpectedChar { ch: '@', .. })));
    }
}
