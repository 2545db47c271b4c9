//! jackc-util - shared diagnostics and source-location types for the Jack
//! compiler pipeline.
//!
//! Every crate in the workspace (`jackc-lex`, `jackc-sym`, `jackc-gen`,
//! `jackc-par`, `jackc-drv`) depends on this crate for two things: reporting
//! errors and warnings (`diagnostic`), and tracking where in the source a
//! token, statement, or symbol came from (`span`). Neither module owns any
//! compiler-phase-specific state; per §5, each compiled file gets its own
//! fresh `Handler` and `SourceMap` entry, never a shared global.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult, SourceMapError, SourceMapResult};
pub use span::{FileId, Span};
