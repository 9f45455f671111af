//! Centralized constants for the envloader crate.

/// Default dotenv file name, resolved relative to the current working
/// directory when no explicit path is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Literals the `bool` accessor maps to `true` (matched case-insensitively).
pub(crate) const TRUE_LITERALS: [&str; 3] = ["true", "yes", "1"];

/// Literals the `bool` accessor maps to `false` (matched case-insensitively).
pub(crate) const FALSE_LITERALS: [&str; 3] = ["false", "no", "0"];
