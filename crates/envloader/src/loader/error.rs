//! Error types for dotenv loading.
//!
//! Responsibilities:
//! - Define error variants for path resolution, file reading, and parsing.
//!
//! Does NOT handle:
//! - Applying entries to a store (infallible, see store.rs).
//!
//! Invariants:
//! - Errors NEVER include raw .env line contents or values to prevent secret
//!   leakage; parse errors carry the line number only.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving, reading, or parsing a dotenv file.
#[derive(Error, Debug)]
pub enum EnvError {
    /// No regular file exists at the resolved path.
    #[error("no env file found at {path}")]
    FileNotFound { path: PathBuf },

    /// The current working directory could not be determined while resolving
    /// a relative path.
    #[error("unable to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The file exists but could not be read as UTF-8 text (permissions,
    /// invalid encoding).
    ///
    /// SAFETY: carries the `ErrorKind` only, never file contents.
    #[error("failed to read env file at {path}: {kind}")]
    Read { path: PathBuf, kind: ErrorKind },

    /// A line is not a valid `KEY=VALUE` assignment (no `=` delimiter, an
    /// empty key, or a NUL byte in the key or value).
    ///
    /// SAFETY: carries the 1-based line number only, never the line contents.
    #[error("invalid assignment on line {line} of {path}")]
    Parse { path: PathBuf, line: usize },
}
