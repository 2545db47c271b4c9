//! Errors produced by the Compilation Engine.

use jackc_lex::LexError;
use jackc_util::Span;
use thiserror::Error;

/// Failures that abort compilation of a single file (spec §7).
///
/// A `Lex` error propagates verbatim from the tokenizer. `Expected` and
/// `UnexpectedEof` are the two ways the `expect(literal)` primitive can
/// fail. `UnresolvedIdentifier` is the corrected behavior for a symbol
/// lookup that must resolve (array base, let-target, method receiver) but
/// doesn't (the source masks this with `None`); this implementation
/// surfaces it instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("unresolved identifier '{name}'")]
    UnresolvedIdentifier { name: String, span: Span },
}

impl ParseError {
    /// The source location the error occurred at, for driver-level reporting.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span(),
            ParseError::Expected { span, .. } => *span,
            ParseError::UnexpectedEof { .. } => Span::DUMMY,
            ParseError::UnresolvedIdentifier { span, .. } => *span,
        }
    }
}
