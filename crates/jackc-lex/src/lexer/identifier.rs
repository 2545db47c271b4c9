//! Identifier and keyword lexing.

use super::core::is_identifier_continue;
use crate::token::{Keyword, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads the maximal run of identifier-continue characters starting at
    /// the cursor, then classifies the text against the fixed keyword set.
    /// Jack has no concept of a reserved-word-as-identifier escape.
    pub fn lex_identifier(&mut self) -> TokenKind {
        while is_identifier_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        match Keyword::from_str(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier(text.to_string()),
        }
    }
}
