//! The `DotEnv` facade: load a dotenv file into a store and read it back
//! through typed accessors.
//!
//! Responsibilities:
//! - Resolve, parse, and apply in one construction step.
//! - Provide typed accessors (`value`, `int`, `bool`, `get`, `all`) that
//!   read live from the store on every call.
//!
//! Does NOT handle:
//! - Parsing details (see parser.rs) or path resolution (see file.rs).
//!
//! Invariants / Assumptions:
//! - Construction succeeds only after the whole file parsed; a parse error
//!   applies nothing.
//! - Entries are applied first-to-last with overwrite, so a key appearing
//!   multiple times ends with its last occurrence.
//! - Accessors never consult a parse-time snapshot; external changes to the
//!   store after load are visible.
//! - Log events carry key names, counts, and line numbers, never values.

use std::collections::HashMap;
use std::path::Path;

use super::error::EnvError;
use super::file::EnvFile;
use super::store::{EnvStore, ProcessEnv};
use crate::constants::{DEFAULT_ENV_FILE, FALSE_LITERALS, TRUE_LITERALS};

/// A loaded dotenv file over an environment store.
///
/// For `ProcessEnv` (the default) construction mutates the calling process's
/// environment table, which child processes inherit (the same consequence
/// as a shell `export` for every parsed key).
#[derive(Debug)]
pub struct DotEnv<S: EnvStore = ProcessEnv> {
    file: EnvFile,
    store: S,
}

impl DotEnv<ProcessEnv> {
    /// Load `.env` from the current working directory into the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`DotEnv::from_path_with_store`].
    pub fn load() -> Result<Self, EnvError> {
        Self::from_path(DEFAULT_ENV_FILE)
    }

    /// Load the file at `path` into the process environment. Relative paths
    /// are resolved against the current working directory.
    ///
    /// # Errors
    ///
    /// See [`DotEnv::from_path_with_store`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        Self::from_path_with_store(path, ProcessEnv)
    }
}

impl<S: EnvStore> DotEnv<S> {
    /// Load the file at `path` into an injected store.
    ///
    /// Substituting a [`MemoryStore`](super::MemoryStore) keeps tests and
    /// dry runs from touching real process state.
    ///
    /// # Errors
    ///
    /// - `EnvError::FileNotFound` / `EnvError::CurrentDir` from resolution.
    /// - `EnvError::Read` if the file exists but cannot be read as UTF-8.
    /// - `EnvError::Parse` if a line is not a valid assignment.
    pub fn from_path_with_store(path: impl AsRef<Path>, store: S) -> Result<Self, EnvError> {
        let file = EnvFile::resolve(path)?;
        let mut loaded = Self { file, store };
        loaded.apply()?;
        Ok(loaded)
    }

    fn apply(&mut self) -> Result<(), EnvError> {
        let entries = self.file.parse()?;
        let count = entries.len();

        for entry in &entries {
            if let Some(existing) = self.store.get(&entry.key)
                && existing != entry.value
            {
                tracing::warn!(
                    key = %entry.key,
                    line = entry.line,
                    "overwriting existing environment variable"
                );
            }
            self.store.set(&entry.key, &entry.value);
        }

        tracing::debug!(path = %self.file.path().display(), count, "applied env file");
        Ok(())
    }

    /// Re-parse the same file and re-apply it (last-write-wins over current
    /// store contents).
    ///
    /// # Errors
    ///
    /// `EnvError::Read` or `EnvError::Parse`, as for construction. On error
    /// nothing is applied.
    pub fn reload(&mut self) -> Result<(), EnvError> {
        self.apply()
    }

    /// The resolved absolute path of the loaded file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Current value for `key`, or `None` when unset. Never fails.
    pub fn value(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    /// Current value for `key`, or `default` when unset.
    pub fn value_or(&self, key: &str, default: &str) -> String {
        self.value(key).unwrap_or_else(|| default.to_string())
    }

    /// Alias for [`DotEnv::value`] (the subscript-style lookup).
    pub fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    /// Value for `key` parsed as a base-10 integer. Unset and unparseable
    /// collapse to `None`; no distinction is surfaced.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.value(key)?.parse().ok()
    }

    /// Like [`DotEnv::int`], falling back to `default`.
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.int(key).unwrap_or(default)
    }

    /// Value for `key` as a boolean: `true`/`yes`/`1` and `false`/`no`/`0`,
    /// case-insensitively. Anything else, including unset, is `None`.
    pub fn bool(&self, key: &str) -> Option<bool> {
        let value = self.value(key)?.to_lowercase();
        if TRUE_LITERALS.contains(&value.as_str()) {
            Some(true)
        } else if FALSE_LITERALS.contains(&value.as_str()) {
            Some(false)
        } else {
            None
        }
    }

    /// Like [`DotEnv::bool`], falling back to `default`.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.bool(key).unwrap_or(default)
    }

    /// Snapshot of every variable currently in the store, the full table
    /// rather than just the keys this loader set.
    pub fn all(&self) -> HashMap<String, String> {
        self.store.snapshot()
    }
}
