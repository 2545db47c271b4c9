//! Lexical error types.

use jackc_util::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char, span: Span },

    #[error("unterminated string constant")]
    UnterminatedString { span: Span },

    #[error("unterminated block comment")]
    UnterminatedComment { span: Span },

    #[error("integer constant too big: {text}")]
    IntegerOverflow { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span, .. }
            | LexError::UnterminatedComment { span, .. }
            | LexError::IntegerOverflow { span, .. } => *span,
        }
    }
}

pub type Result<T> = std::result::Result<T, LexError>;
