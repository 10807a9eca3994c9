//! Permission bits and access predicates for a path.

use std::path::PathBuf;

use crate::error;
use crate::query::{self, ErrorMode};
use crate::sys::fs::{self, PathExt};

/// Symbolic rendering table: owner, group, other; read, write, execute.
/// These are the standard POSIX masks, used regardless of the host's native
/// permission-bit layout.
const SYMBOLIC_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Permission metadata view of a filesystem path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermissionInfo {
    path: PathBuf,
    mode: ErrorMode,
}

impl PermissionInfo {
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

    /// Whether the calling process may read the path. False for a
    /// nonexistent path; never fails.
    pub fn is_readable(&self) -> bool {
        self.path.readable()
    }

    /// Whether the calling process may write to the path. False for a
    /// nonexistent path; never fails.
    pub fn is_writable(&self) -> bool {
        self.path.writable()
    }

    /// Whether the calling process may execute (or search) the path. False
    /// for a nonexistent path; never fails.
    pub fn is_executable(&self) -> bool {
        self.path.executable()
    }

    /// The raw mode bits of the path, file-type bits included.
    ///
    /// The query fails when the path does not exist or its metadata cannot
    /// be read.
    pub fn raw(&self) -> Result<Option<u32>, error::Error> {
        query::fallible(self.mode, || fs::permission_bits(&self.path))
    }

    /// The low twelve permission bits (special bits plus the three rwx
    /// triplets) rendered as four zero-padded octal digits, e.g. `"0644"`.
    ///
    /// Propagates absence or failure from [`Self::raw`].
    pub fn octal(&self) -> Result<Option<String>, error::Error> {
        Ok(self.raw()?.map(render_octal))
    }

    /// A nine-character `rwxr-xr--` style rendering of the permission bits.
    ///
    /// Propagates absence or failure from [`Self::raw`].
    pub fn symbolic(&self) -> Result<Option<String>, error::Error> {
        Ok(self.raw()?.map(render_symbolic))
    }

    /// Numeric group id of the path's group.
    ///
    /// The query fails when the path does not exist or the id cannot be
    /// determined on the host platform.
    pub fn group_id(&self) -> Result<Option<u32>, error::Error> {
        query::fallible(self.mode, || fs::group_id(&self.path))
    }

    /// Numeric user id of the path's owner.
    ///
    /// The query fails when the path does not exist or the id cannot be
    /// determined on the host platform.
    pub fn owner_id(&self) -> Result<Option<u32>, error::Error> {
        query::fallible(self.mode, || fs::owner_id(&self.path))
    }
}

fn render_octal(bits: u32) -> String {
    format!("{:04o}", bits & 0o7777)
}

fn render_symbolic(bits: u32) -> String {
    SYMBOLIC_BITS
        .iter()
        .map(|&(bit, ch)| if bits & bit == 0 { '-' } else { ch })
        .collect()
}

#[cfg(test)]
#[expect(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    #[test]
    fn octal_rendering() {
        assert_eq!(render_octal(0o644), "0644");
        assert_eq!(render_octal(0o100_644), "0644");
        assert_eq!(render_octal(0o4755), "4755");
        assert_eq!(render_octal(0), "0000");
    }

    #[test]
    fn symbolic_rendering() {
        assert_eq!(render_symbolic(0o000), "---------");
        assert_eq!(render_symbolic(0o777), "rwxrwxrwx");
        assert_eq!(render_symbolic(0o750), "rwxr-x---");
        assert_eq!(render_symbolic(0o644), "rw-r--r--");
        // File-type bits don't leak into the rendering.
        assert_eq!(render_symbolic(0o100_644), "rw-r--r--");
    }

    #[test]
    fn symbolic_positions_match_their_masks() {
        for (position, &(bit, ch)) in SYMBOLIC_BITS.iter().enumerate() {
            let rendered = render_symbolic(bit);
            for (i, c) in rendered.chars().enumerate() {
                assert_eq!(c, if i == position { ch } else { '-' });
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn mode_0644_file() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "hello")?;
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o644))?;

        let perms = PermissionInfo::new(&file);
        assert!(perms.is_readable());
        assert!(perms.is_writable());
        assert!(!perms.is_executable());
        assert_eq!(perms.octal()?, Some("0644".to_owned()));
        assert_eq!(perms.symbolic()?, Some("rw-r--r--".to_owned()));
        assert_eq!(perms.raw()?.map(|bits| bits & 0o7777), Some(0o644));

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn owner_and_group_ids() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "hello")?;

        let perms = PermissionInfo::new(&file);
        assert_eq!(perms.owner_id()?, Some(nix::unistd::geteuid().as_raw()));
        assert!(perms.group_id()?.is_some());

        Ok(())
    }

    #[test]
    fn nonexistent_path_behavior() -> Result<()> {
        let perms = PermissionInfo::new("/definitely/not/here");
        assert!(!perms.is_readable());
        assert!(!perms.is_writable());
        assert!(!perms.is_executable());
        assert_eq!(perms.raw()?, None);
        assert_eq!(perms.octal()?, None);
        assert_eq!(perms.symbolic()?, None);
        assert_eq!(perms.owner_id()?, None);
        assert_eq!(perms.group_id()?, None);

        let raising = perms.with_error_mode(ErrorMode::Raising);
        assert_eq!(raising.error_mode(), ErrorMode::Raising);
        assert!(!raising.is_readable());
        assert!(raising.raw().is_err());
        assert!(raising.octal().is_err());
        assert!(raising.symbolic().is_err());
        assert!(raising.owner_id().is_err());
        assert!(raising.group_id().is_err());

        Ok(())
    }
}
