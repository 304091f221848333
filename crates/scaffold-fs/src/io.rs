//! Atomic file writes and permission handling

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Create `dir` and any missing ancestors.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    tracing::debug!(?dir, "Creating directory");
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Write content atomically to a file.
///
/// Writes to a locked temporary file in the same directory, syncs it, then
/// renames it over `path`. Missing parent directories are created. When
/// `path` is a symlink the file it points to is replaced, and an existing
/// file keeps its permissions.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = if path.is_symlink() {
        let resolved = match fs::canonicalize(path) {
            Ok(resolved) => resolved,
            // Dangling link: create the file it names
            Err(_) => {
                let link = fs::read_link(path).map_err(|e| Error::io(path, e))?;
                match path.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                }
            }
        };
        tracing::debug!(link = ?path, target = ?resolved, "Writing through symlink");
        resolved
    } else {
        path.to_path_buf()
    };

    if let Some(parent) = target.parent() {
        ensure_dir(parent)?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = target.with_file_name(&temp_name);

    let result = write_temp(&temp_path, &target, content)
        .and_then(|_| fs::rename(&temp_path, &target).map_err(|e| Error::io(&target, e)));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Fill the temporary file and give it the permissions of `target`, if any.
fn write_temp(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: target.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all())
        .map_err(|e| Error::io(temp_path, e))?;

    if let Ok(existing) = fs::metadata(target) {
        temp_file
            .set_permissions(existing.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}

/// Add the executable bits (`+x`) to `path`.
#[cfg(unix)]
pub fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .map_err(|e| Error::io(path, e))?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions).map_err(|e| Error::io(path, e))
}

/// Executable bits do not exist on this platform.
#[cfg(not(unix))]
pub fn set_executable(path: &Path) -> Result<()> {
    tracing::debug!(?path, "Skipping executable bit on non-unix platform");
    Ok(())
}
