//! Driver-level errors: the `#[from]` composition point for every phase
//! below it, in the manner of `faxt::error::FaxtError`.

use std::path::PathBuf;

use jackc_lex::LexError;
use jackc_par::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Lex { path: PathBuf, source: LexError },

    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("'{}' is neither a .jack file nor a directory", path.display())]
    InvalidPath { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, DriverError>;
