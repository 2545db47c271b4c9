//! jackc-lex - the Jack tokenizer.
//!
//! Converts Jack source text into a stream of [`Token`]s: keywords, the
//! fixed single-character symbol set, identifiers, integer constants, and
//! string constants. The tokenizer holds no state beyond its `Cursor`:
//! every `Lexer` is tied to one source string and produces one token
//! stream, matching the per-file isolation the rest of the pipeline
//! assumes.

pub mod cursor;
pub mod error;
mod lexer;
#[cfg(test)]
mod proptests;
pub mod token;

pub use error::{LexError, Result};
pub use lexer::Lexer;
pub use token::{Keyword, Token, TokenKind};
