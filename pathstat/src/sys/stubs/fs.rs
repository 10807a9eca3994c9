use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(not(unix))]
impl crate::sys::fs::PathExt for Path {
    fn readable(&self) -> bool {
        self.exists()
    }

    fn writable(&self) -> bool {
        self.metadata()
            .is_ok_and(|metadata| !metadata.permissions().readonly())
    }

    fn executable(&self) -> bool {
        false
    }
}

/// Synthesizes mode bits from the read-only attribute; this platform has no
/// native permission-bit layout to report.
pub(crate) fn permission_bits(path: &Path) -> std::io::Result<u32> {
    let readonly = path.metadata()?.permissions().readonly();
    Ok(if readonly { 0o444 } else { 0o666 })
}

pub(crate) fn owner_id(path: &Path) -> std::io::Result<u32> {
    path.metadata()?;
    Err(unsupported("file ownership"))
}

pub(crate) fn group_id(path: &Path) -> std::io::Result<u32> {
    path.metadata()?;
    Err(unsupported("file group membership"))
}

pub(crate) fn access_time(path: &Path) -> std::io::Result<i64> {
    epoch_seconds(path.metadata()?.accessed()?)
}

pub(crate) fn modification_time(path: &Path) -> std::io::Result<i64> {
    epoch_seconds(path.metadata()?.modified()?)
}

/// The closest analogue to a metadata change time available here is the
/// creation time.
pub(crate) fn change_time(path: &Path) -> std::io::Result<i64> {
    epoch_seconds(path.metadata()?.created()?)
}

fn unsupported(what: &str) -> std::io::Error {
    std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        format!("{what} is not available on this platform"),
    )
}

fn epoch_seconds(time: SystemTime) -> std::io::Result<i64> {
    let duration = time
        .duration_since(UNIX_EPOCH)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;

    i64::try_from(duration.as_secs())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}
