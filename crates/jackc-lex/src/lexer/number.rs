//! Integer constant lexing.

use crate::error::{LexError, Result};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of decimal digits into an integer constant.
    ///
    /// Jack has no hex/octal/binary/float literals, only unsigned decimal
    /// integers in `0..=32767` (the Hack platform's signed 16-bit word
    /// width). A digit run that doesn't fit is a lexical error, not a
    /// silently-wrapped value.
    pub fn lex_number(&mut self) -> Result<TokenKind> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        match text.parse::<u16>() {
            Ok(n) if n <= 32767 => Ok(TokenKind::IntConst(n)),
            _ => Err(LexError::IntegerOverflow {
                text: text.to_string(),
                span: jackc_util::Span::new(
                    self.token_start,
                    self.cursor.position(),
                    self.cursor.line(),
                    self.cursor.column(),
                ),
            }),
        }
    }
}
