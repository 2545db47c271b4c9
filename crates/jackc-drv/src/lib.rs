//! jackc-drv - the Driver.
//!
//! Parses CLI arguments, discovers `.jack` source files, and runs the
//! Compilation Engine (`jackc_par::compile`) over each one in turn, writing
//! `.vm` output beside each source file. Per spec §5 every file gets a fresh
//! Tokenizer/Symbol Table/Writer; the driver itself holds no cross-file
//! compiler state, only the small amount of bookkeeping (paths, an overall
//! exit status) that batching a directory requires.

mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use jackc_lex::Lexer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use error::{DriverError, Result};

/// `jackc [OPTIONS] <PATH>` (spec §6, expanded).
#[derive(ClapParser, Debug)]
#[command(name = "jackc")]
#[command(author, version, about = "Jack language compiler", long_about = None)]
pub struct Config {
    /// A `.jack` file, or a directory of `.jack` files to compile.
    pub path: PathBuf,

    /// Print each file as it is compiled.
    #[arg(short, long)]
    pub verbose: bool,

    /// Dump the token stream for each input file to stderr instead of
    /// compiling it. Does not affect exit codes or `.vm` output.
    #[arg(long)]
    pub emit_tokens: bool,
}

/// Entry point called from `main`. Parses arguments, initializes logging,
/// and runs the driver, translating its result into a process exit code.
pub fn run() -> ExitCode {
    let config = Config::parse();
    init_logging(config.verbose);

    match compile_path(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

/// Compiles `config.path`, whether it names a single file or a directory.
///
/// Returns `Ok(true)` if every file compiled successfully, `Ok(false)` if at
/// least one file in a directory batch failed (the driver logs each failure
/// and keeps going per spec §7), and `Err` for a failure that aborts the
/// whole run (a single-file compile, or a directory that can't be read).
pub fn compile_path(config: &Config) -> Result<bool> {
    if config.path.is_dir() {
        let files = discover_jack_files(&config.path)?;
        let mut all_ok = true;
        for file in files {
            if let Err(e) = compile_file(&file, config) {
                tracing::error!("{e}");
                all_ok = false;
            }
        }
        Ok(all_ok)
    } else if config.path.is_file() {
        compile_file(&config.path, config)?;
        Ok(true)
    } else {
        Err(DriverError::InvalidPath {
            path: config.path.clone(),
        })
    }
}

/// Non-recursive, filename-sorted `.jack` discovery (spec §6).
fn discover_jack_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| DriverError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "jack"))
        .collect();
    files.sort();
    Ok(files)
}

fn compile_file(path: &Path, config: &Config) -> Result<()> {
    tracing::debug!(file = %path.display(), "reading source");
    let source = std::fs::read_to_string(path).map_err(|e| DriverError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if config.emit_tokens {
        return emit_tokens(path, &source);
    }

    tracing::debug!(file = %path.display(), "compiling");
    let vm = jackc_par::compile(&source).map_err(|e| DriverError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let out_path = path.with_extension("vm");
    std::fs::write(&out_path, vm).map_err(|e| DriverError::Io {
        path: out_path.clone(),
        source: e,
    })?;

    if config.verbose {
        tracing::info!(file = %path.display(), output = %out_path.display(), "compiled");
    }
    Ok(())
}

fn emit_tokens(path: &Path, source: &str) -> Result<()> {
    for token in Lexer::new(source) {
        let token = token.map_err(|e| DriverError::Lex {
            path: path.to_path_buf(),
            source: e,
        })?;
        eprintln!("{:?}", token);
    }
    Ok(())
}
