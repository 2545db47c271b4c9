//! String constant lexing.

use crate::error::{LexError, Result};
use crate::token::TokenKind;
use crate::Lexer;
use jackc_util::Span;

impl<'a> Lexer<'a> {
    /// Lexes a `"..."` string constant.
    ///
    /// Jack string constants cannot contain `"` or newline and have no
    /// escape sequences (JLS §1). The text between the quotes is taken
    /// verbatim, bit-for-bit, as the constant's value.
    pub fn lex_string(&mut self) -> Result<TokenKind> {
        self.cursor.advance(); // opening '"'
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Err(LexError::UnterminatedString {
                    span: Span::new(
                        self.token_start,
                        self.cursor.position(),
                        self.cursor.line(),
                        self.cursor.column(),
                    ),
                });
            }
            if self.cursor.current_char() == '"' {
                break;
            }
            self.cursor.advance();
        }

        let content = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance(); // closing '"'

        Ok(TokenKind::StringConst(content))
    }
}
