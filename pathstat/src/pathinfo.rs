//! Path value object: lexical components and existence/type/size queries.

use std::path::{Path, PathBuf};

use crate::error;
use crate::permissions::PermissionInfo;
use crate::query::{self, ErrorMode};
use crate::times::TimestampInfo;

/// A filesystem path with read-only metadata accessors.
///
/// The wrapped path is stored verbatim; it is not validated, normalized, or
/// required to exist. Lexical accessors ([`Self::base_name`] and friends)
/// never touch the filesystem, while every other accessor issues a fresh OS
/// query on each call, so successive calls may observe different results if
/// the underlying entry changes concurrently.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathInfo {
    path: PathBuf,
    mode: ErrorMode,
}

impl PathInfo {
    /// Wraps `path` with the default [`ErrorMode::Silent`] policy.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: ErrorMode::default(),
        }
    }

    /// Returns a copy of this value that applies the given error mode to its
    /// fallible queries.
    #[must_use]
    pub fn with_error_mode(self, mode: ErrorMode) -> Self {
        Self { mode, ..self }
    }

    /// The error mode applied to this value's fallible queries.
    pub const fn error_mode(&self) -> ErrorMode {
        self.mode
    }

    /// Returns the lexical parent of this path, carrying the error mode over.
    ///
    /// No OS query is made and the parent is not required to exist. A bare
    /// file name yields `"."`; the root directory is its own parent.
    #[must_use]
    pub fn parent(&self) -> Self {
        Self {
            path: lexical_parent(&self.path),
            mode: self.mode,
        }
    }

    /// The directory portion of the path; identical to what [`Self::parent`]
    /// renders.
    pub fn dir_name(&self) -> String {
        lexical_parent(&self.path).to_string_lossy().into_owned()
    }

    /// The final component of the path, or `""` when there is none.
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
    }

    /// The final component of the path without its extension.
    ///
    /// The split is on the last dot of the base name, so a hidden file like
    /// `.bashrc` has an empty stem.
    pub fn stem(&self) -> String {
        let base = self.base_name();
        match base.rfind('.') {
            Some(index) => base[..index].to_owned(),
            None => base,
        }
    }

    /// The lower-cased extension of the final component, or `""` when there
    /// is none.
    ///
    /// The split is on the last dot of the base name, so a hidden file like
    /// `.bashrc` is all extension.
    pub fn extension(&self) -> String {
        let base = self.base_name();
        match base.rfind('.') {
            Some(index) => base[index + 1..].to_lowercase(),
            None => String::new(),
        }
    }

    /// Resolves the canonical absolute form of the path: symbolic links
    /// followed, `.` and `..` collapsed.
    ///
    /// The query fails when the path does not exist or cannot be resolved.
    pub fn canonical(&self) -> Result<Option<PathBuf>, error::Error> {
        query::fallible(self.mode, || self.path.canonicalize())
    }

    /// Whether the path currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether the path exists and is a regular file (symbolic links are
    /// followed).
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// Whether the path itself is a symbolic link (not followed).
    pub fn is_symlink(&self) -> bool {
        self.path.is_symlink()
    }

    /// Whether the path exists and is a directory.
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    /// The size in bytes of the regular file at this path.
    ///
    /// The query fails when the path does not exist, is not a regular file,
    /// or its metadata cannot be read.
    pub fn size(&self) -> Result<Option<u64>, error::Error> {
        query::fallible(self.mode, || {
            let metadata = std::fs::metadata(&self.path)?;
            if !metadata.is_file() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("not a regular file: {}", self.path.display()),
                ));
            }
            Ok(metadata.len())
        })
    }

    /// The wrapped path, verbatim.
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// A permissions view of the same path, with the same error mode.
    pub fn permissions(&self) -> PermissionInfo {
        PermissionInfo::new(self.path.clone()).with_error_mode(self.mode)
    }

    /// A timestamps view of the same path, with the same error mode.
    pub fn times(&self) -> TimestampInfo {
        TimestampInfo::new(self.path.clone()).with_error_mode(self.mode)
    }
}

impl std::fmt::Display for PathInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

fn lexical_parent(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        // The root (or an empty path) is its own parent.
        None => path.to_path_buf(),
    }
}
