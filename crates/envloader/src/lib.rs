//! Dotenv loading for process configuration.
//!
//! This crate reads `.env`-style files of `KEY=VALUE` lines and applies them
//! to the process environment (or any injected [`EnvStore`]), with typed
//! accessors layered on top of live environment lookups.

mod constants;
mod loader;

pub use constants::DEFAULT_ENV_FILE;
pub use loader::{DotEnv, Entry, EnvError, EnvFile, EnvStore, MemoryStore, ProcessEnv};
