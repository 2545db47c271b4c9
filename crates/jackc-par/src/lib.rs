//! jackc-par - the Compilation Engine.
//!
//! This is the hard part of the pipeline: a single-pass, recursive-descent
//! parser for the Jack grammar that generates VM code as it recognizes each
//! production, with one token of lookahead where the grammar needs it
//! (disambiguating `name`, `name[`, `name(`, and `name.` term forms). Per
//! spec, no AST is built: [`Parser`] drives a token vector from
//! `jackc_lex`, consults and updates a `jackc_sym::SymbolTable`, and calls
//! `jackc_gen::VmWriter` directly as each construct is recognized.
//!
//! The module split mirrors the grammar: [`items`] covers class and
//! subroutine structure, [`stmt`] covers the five statement forms, [`expr`]
//! covers expressions, terms, and subroutine calls.

mod error;
mod expr;
mod items;
mod stmt;

pub use error::ParseError;

use jackc_gen::{Segment, VmWriter};
use jackc_lex::{Keyword, Lexer, Token, TokenKind};
use jackc_sym::{SymbolKind, SymbolTable};
use jackc_util::Span;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Compiles one Jack source file into VM instruction text.
///
/// Constructs a fresh [`Parser`] (and, transitively, a fresh `SymbolTable`
/// and `VmWriter`) for this file only, per spec §5: none of that state is
/// shared across compilations.
pub fn compile(source: &str) -> Result<String> {
    let mut tokens = Vec::new();
    for token in Lexer::new(source) {
        tokens.push(token?);
    }

    let mut parser = Parser::new(tokens);
    parser.compile_class()?;
    Ok(parser.writer.output())
}

/// Recursive-descent parser fused with VM code generation.
///
/// Owns every piece of per-file state the spec calls out as instance data
/// rather than module-level globals: the token buffer and cursor, the
/// enclosing class's name (for unqualified-call qualification), the symbol
/// table, the VM writer, and the `if`/`while` label counters.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    class_name: String,
    symbols: SymbolTable,
    writer: VmWriter,
    if_counter: u32,
    while_counter: u32,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            class_name: String::new(),
            symbols: SymbolTable::new(),
            writer: VmWriter::new(),
            if_counter: 0,
            while_counter: 0,
        }
    }

    // -- token cursor -------------------------------------------------

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    /// Moves the cursor forward. Past the last token this is a no-op:
    /// `current()` then returns `None`, which every caller treats as
    /// "unexpected end of input" rather than crashing.
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn current_span(&self) -> Span {
        self.current().map(|t| t.span).unwrap_or(Span::DUMMY)
    }

    fn describe_current(&self) -> String {
        match self.current() {
            Some(t) => t.text(),
            None => "end of input".to_string(),
        }
    }

    fn is_symbol(&self, c: char) -> bool {
        matches!(self.current(), Some(t) if t.kind == TokenKind::Symbol(c))
    }

    fn peek_is_symbol(&self, c: char) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::Symbol(c))
    }

    fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self.current(), Some(t) if t.kind == TokenKind::Keyword(kw))
    }

    /// The `expect(literal)` primitive from spec §4.4, specialized to a symbol.
    fn expect_symbol(&mut self, c: char) -> Result<()> {
        match self.current() {
            Some(t) if t.kind == TokenKind::Symbol(c) => {
                self.advance();
                Ok(())
            }
            Some(t) => Err(ParseError::Expected {
                expected: format!("'{c}'"),
                found: t.text(),
                span: t.span,
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: format!("'{c}'"),
            }),
        }
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<()> {
        match self.current() {
            Some(t) if t.kind == TokenKind::Keyword(kw) => {
                self.advance();
                Ok(())
            }
            Some(t) => Err(ParseError::Expected {
                expected: format!("'{}'", kw.as_str()),
                found: t.text(),
                span: t.span,
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: format!("'{}'", kw.as_str()),
            }),
        }
    }

    fn expect_identifier(&mut self) -> Result<String> {
        match self.current() {
            Some(Token {
                kind: TokenKind::Identifier(name),
                ..
            }) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            Some(t) => Err(ParseError::Expected {
                expected: "identifier".to_string(),
                found: t.text(),
                span: t.span,
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: "identifier".to_string(),
            }),
        }
    }

    // -- symbol resolution ---------------------------------------------

    /// Resolves `name` to its runtime segment and index, or a
    /// `ResolutionError` (spec §7) if it is declared in neither scope.
    fn resolve(&self, name: &str, span: Span) -> Result<(Segment, u16)> {
        let kind = self
            .symbols
            .kind_of(name)
            .ok_or_else(|| ParseError::UnresolvedIdentifier {
                name: name.to_string(),
                span,
            })?;
        let index = self
            .symbols
            .index_of(name)
            .expect("kind_of resolved implies index_of resolves");
        Ok((segment_for(kind), index))
    }
}

/// The source-kind-to-runtime-segment mapping from spec §3: `static` and
/// `argument`/`local` map onto their like-named segment; `field` maps onto
/// `this`, since fields live in the object the `this` pointer anchors.
fn segment_for(kind: SymbolKind) -> Segment {
    match kind {
        SymbolKind::Static => Segment::Static,
        SymbolKind::Field => Segment::This,
        SymbolKind::Argument => Segment::Argument,
        SymbolKind::Local => Segment::Local,
    }
}
