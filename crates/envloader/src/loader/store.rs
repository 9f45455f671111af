//! Environment table abstraction.
//!
//! Responsibilities:
//! - Define the `EnvStore` seam the loader writes to and accessors read from.
//! - Implement it over the real process environment (`ProcessEnv`) and over
//!   an in-memory map (`MemoryStore`) for tests and dry runs.
//!
//! Does NOT handle:
//! - Parsing or file I/O (see parser.rs / file.rs).
//!
//! Invariants / Assumptions:
//! - `set` has insert-or-overwrite semantics (setenv with overwrite enabled).
//! - `ProcessEnv` mutation assumes single-threaded use; the process
//!   environment is global unsynchronized state shared with the rest of the
//!   process and inherited by child processes.

use std::collections::HashMap;

/// A mutable key/value table with live reads and snapshotting.
///
/// Accessors go through `get` on every call rather than a parse-time cache,
/// so externally-made changes are always visible.
pub trait EnvStore {
    /// Current value for `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite `key`.
    fn set(&mut self, key: &str, value: &str);

    /// Snapshot of the full table, not limited to keys this loader set.
    fn snapshot(&self) -> HashMap<String, String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: mutating the process environment is only sound while no
        // other thread reads or writes it; this crate assumes
        // start-of-process, single-threaded loading.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn snapshot(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }
}

/// In-memory environment table for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    vars: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }

    fn snapshot(&self) -> HashMap<String, String> {
        self.vars.clone()
    }
}
