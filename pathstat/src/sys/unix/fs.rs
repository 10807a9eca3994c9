use std::os::unix::fs::MetadataExt;
use std::path::Path;

impl crate::sys::fs::PathExt for Path {
    fn readable(&self) -> bool {
        nix::unistd::access(self, nix::unistd::AccessFlags::R_OK).is_ok()
    }

    fn writable(&self) -> bool {
        nix::unistd::access(self, nix::unistd::AccessFlags::W_OK).is_ok()
    }

    fn executable(&self) -> bool {
        nix::unistd::access(self, nix::unistd::AccessFlags::X_OK).is_ok()
    }
}

/// Full `st_mode` bits for the path, file-type bits included.
pub(crate) fn permission_bits(path: &Path) -> std::io::Result<u32> {
    Ok(path.metadata()?.mode())
}

pub(crate) fn owner_id(path: &Path) -> std::io::Result<u32> {
    Ok(path.metadata()?.uid())
}

pub(crate) fn group_id(path: &Path) -> std::io::Result<u32> {
    Ok(path.metadata()?.gid())
}

/// Last access time (atime), in Unix epoch seconds.
pub(crate) fn access_time(path: &Path) -> std::io::Result<i64> {
    Ok(path.metadata()?.atime())
}

/// Last content modification time (mtime), in Unix epoch seconds.
pub(crate) fn modification_time(path: &Path) -> std::io::Result<i64> {
    Ok(path.metadata()?.mtime())
}

/// Last metadata change time (ctime), in Unix epoch seconds.
pub(crate) fn change_time(path: &Path) -> std::io::Result<i64> {
    Ok(path.metadata()?.ctime())
}
