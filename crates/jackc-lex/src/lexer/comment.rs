//! Comment and whitespace skipping.

use crate::error::{LexError, Result};
use crate::Lexer;
use jackc_util::Span;

impl<'a> Lexer<'a> {
    /// Skips whitespace, `//` line comments, and `/* ... */` block comments
    /// (API comments, `/** ... */`, fold into the same block-comment rule,
    /// since Jack doesn't distinguish them) until the next real token or EOF.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            match self.cursor.current_char() {
                c if c.is_whitespace() => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                '/' if self.cursor.peek_char(1) == '*' => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<()> {
        let start = self.cursor.position();
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();

        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedComment {
                    span: Span::new(start, self.cursor.position(), start_line, start_column),
                });
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::{Keyword, TokenKind};
    use crate::Lexer;

    fn tokenize(src: &str) -> crate::error::Result<Vec<TokenKind>> {
        Lexer::new(src)
            .map(|r| r.map(|t| t.kind))
            .collect()
    }

    #[test]
    fn line_comment_is_skipped() {
        let tokens = tokenize("// a comment\nclass").unwrap();
        assert_eq!(tokens, vec![TokenKind::Keyword(Keyword::Class)]);
    }

    #[test]
    fn block_comment_is_skipped() {
        let tokens = tokenize("/* a\nmultiline\ncomment */ class").unwrap();
        assert_eq!(tokens, vec![TokenKind::Keyword(Keyword::Class)]);
    }

    #[test]
    fn doc_style_block_comment_is_skipped() {
        let tokens = tokenize("/** API doc */ class").unwrap();
        assert_eq!(tokens, vec![TokenKind::Keyword(Keyword::Class)]);
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        assert!(matches!(
            tokenize("/* never closed"),
            Err(LexError::UnterminatedComment { .. })
        ));
    }

    #[test]
    fn comment_between_tokens() {
        let tokens = tokenize("class /* x */ Main").unwrap();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Keyword(Keyword::Class),
                TokenKind::Identifier("Main".into()),
            ]
        );
    }
}
