//! Filesystem timestamps for a path.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error;
use crate::query::{self, ErrorMode};
use crate::sys::fs;

/// Timestamp metadata view of a filesystem path.
///
/// Each accessor issues a fresh OS query for the relevant Unix epoch-seconds
/// value and converts it into a UTC instant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimestampInfo {
    path: PathBuf,
    mode: ErrorMode,
}

impl TimestampInfo {
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

    /// Last access time (atime).
    ///
    /// The query fails when the path does not exist.
    pub fn accessed(&self) -> Result<Option<DateTime<Utc>>, error::Error> {
        self.query_time(fs::access_time)
    }

    /// Last content modification time (mtime).
    ///
    /// The query fails when the path does not exist.
    pub fn modified(&self) -> Result<Option<DateTime<Utc>>, error::Error> {
        self.query_time(fs::modification_time)
    }

    /// Last metadata change time (ctime).
    ///
    /// The query fails when the path does not exist.
    pub fn changed(&self) -> Result<Option<DateTime<Utc>>, error::Error> {
        self.query_time(fs::change_time)
    }

    fn query_time(
        &self,
        op: fn(&Path) -> std::io::Result<i64>,
    ) -> Result<Option<DateTime<Utc>>, error::Error> {
        query::fallible(self.mode, || {
            let seconds = op(&self.path)?;
            DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("timestamp out of range: {seconds}"),
                )
            })
        })
    }
}
