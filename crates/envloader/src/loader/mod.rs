//! Dotenv file loading and typed environment access.
//!
//! Responsibilities:
//! - Resolve a dotenv path against the current working directory.
//! - Parse `KEY=VALUE` lines into entries (pure, no side effects).
//! - Apply parsed entries to an [`EnvStore`] with overwrite semantics.
//! - Provide typed accessors that read live from the store.
//!
//! Does NOT handle:
//! - Variable interpolation or expansion (`${OTHER}` stays literal).
//! - Multi-file overlays or environment diffing.
//! - Escape sequences beyond stripping one pair of surrounding double quotes.
//!
//! Invariants / Assumptions:
//! - Parsing completes before any store write; a file that fails to parse
//!   applies nothing.
//! - Errors and log events never include raw line contents or values.
//! - Process-environment mutation assumes single-threaded use.

mod dotenv;
mod error;
mod file;
mod parser;
mod store;

pub use dotenv::DotEnv;
pub use error::EnvError;
pub use file::EnvFile;
pub use parser::Entry;
pub use store::{EnvStore, MemoryStore, ProcessEnv};
