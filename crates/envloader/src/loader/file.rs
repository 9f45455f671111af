//! Path resolution and parsing for a dotenv file.
//!
//! Responsibilities:
//! - Resolve a (possibly relative) path against the current working
//!   directory and verify a regular file exists there.
//! - Read the file as UTF-8 and parse it into entries, without side effects.
//!
//! Does NOT handle:
//! - Applying entries to a store (see dotenv.rs).
//!
//! Invariants:
//! - Resolution joins the cwd onto relative input without canonicalizing, so
//!   the stored path is the absolute form of the input.
//! - Existence is checked once, at resolution time. Read failures after that
//!   point (permissions, invalid UTF-8) are reported as `EnvError::Read`,
//!   not silently swallowed.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::EnvError;
use super::parser::{self, Entry};

/// A resolved dotenv file. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    /// Resolve `path` against the current working directory and verify a
    /// regular file exists there.
    ///
    /// # Errors
    ///
    /// - `EnvError::CurrentDir` if the working directory cannot be determined
    ///   while resolving a relative path.
    /// - `EnvError::FileNotFound` if no regular file exists at the resolved
    ///   path.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let path = path.as_ref();
        let resolved = if path.is_relative() {
            std::env::current_dir()
                .map_err(EnvError::CurrentDir)?
                .join(path)
        } else {
            path.to_path_buf()
        };

        if !resolved.is_file() {
            return Err(EnvError::FileNotFound { path: resolved });
        }

        Ok(Self { path: resolved })
    }

    /// The resolved absolute path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file into entries, in file order.
    ///
    /// Pure with respect to the environment: nothing is applied. Useful for
    /// dry-run inspection of what a load would set.
    ///
    /// # Errors
    ///
    /// - `EnvError::Read` if the file cannot be read as UTF-8 text.
    /// - `EnvError::Parse` if a line is not a valid assignment.
    pub fn parse(&self) -> Result<Vec<Entry>, EnvError> {
        let content = fs::read_to_string(&self.path).map_err(|e| EnvError::Read {
            path: self.path.clone(),
            kind: e.kind(),
        })?;

        parser::parse_str(&content).map_err(|malformed| EnvError::Parse {
            path: self.path.clone(),
            line: malformed.line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_absolute_path_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "KEY=1\n").unwrap();

        let file = EnvFile::resolve(&path).unwrap();
        assert_eq!(file.path(), path);
    }

    #[test]
    fn test_resolve_missing_file_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".notexistenv");

        match EnvFile::resolve(&path) {
            Err(EnvError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_directory_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(
            EnvFile::resolve(temp_dir.path()),
            Err(EnvError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_is_pure_and_repeatable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "A=1\nB=2\n").unwrap();

        let file = EnvFile::resolve(&path).unwrap();
        let first = file.parse().unwrap();
        let second = file.parse().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_parse_invalid_utf8_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, [0x4b, 0x45, 0x59, 0x3d, 0xff, 0xfe]).unwrap();

        let file = EnvFile::resolve(&path).unwrap();
        match file.parse() {
            Err(EnvError::Read { kind, .. }) => {
                assert_eq!(kind, std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_carries_line_number_not_content() {
        let secret = "supersecret_token_12345";
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, format!("PASSWORD={secret}\nNOT AN ASSIGNMENT\n")).unwrap();

        let file = EnvFile::resolve(&path).unwrap();
        let err = file.parse().unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("line 2"), "unexpected message: {rendered}");
        assert!(
            !rendered.contains(secret),
            "error message must not leak file contents: {rendered}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_permission_denied_is_read_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "KEY=1\n").unwrap();

        let file = EnvFile::resolve(&path).unwrap();

        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_mode(0o000);
        fs::set_permissions(&path, permissions).unwrap();

        let result = file.parse();

        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_mode(0o644);
        fs::set_permissions(&path, permissions).unwrap();

        match result {
            Err(EnvError::Read { kind, .. }) => {
                assert!(
                    matches!(
                        kind,
                        std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::Other
                    ),
                    "expected PermissionDenied or Other, got {kind:?}"
                );
            }
            // Running as root can still read the file; acceptable.
            Ok(_) => {}
            Err(other) => panic!("expected Read error, got {other}"),
        }
    }
}
