use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

#[cfg(unix)]
const EXECUTE_BITS: u32 = 0o111;
#[cfg(unix)]
const WORLD_WRITABLE_BIT: u32 = 0o002;

/// Locates the ssh client on PATH and validates it before it is spawned.
pub(crate) fn ssh_path() -> io::Result<PathBuf> {
    let located = which::which("ssh")
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("ssh not found in PATH: {err}")))?;
    validate_executable_path(&located)
}

fn validate_executable_path(path: &Path) -> io::Result<PathBuf> {
    let canonical = fs::canonicalize(path).map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("unable to canonicalize ssh path '{}': {err}", path.display()),
        )
    })?;

    let metadata = fs::metadata(&canonical).map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("unable to inspect ssh path '{}': {err}", canonical.display()),
        )
    })?;

    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("ssh path '{}' is not a regular file", canonical.display()),
        ));
    }

    #[cfg(unix)]
    {
        let mode = metadata.permissions().mode();
        if mode & WORLD_WRITABLE_BIT != 0 {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("ssh path '{}' is world-writable", canonical.display()),
            ));
        }
        if mode & EXECUTE_BITS == 0 {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("ssh path '{}' is not executable", canonical.display()),
            ));
        }
    }

    Ok(canonical)
}

#[cfg(test)]
#[path = "test/command_path.rs"]
mod tests;
