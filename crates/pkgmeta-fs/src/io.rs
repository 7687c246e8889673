//! Atomic I/O operations with file locking

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial write.
/// A symlinked target is written through to the file it points at, and an
/// existing file keeps its permissions. The temp file is removed when any
/// step fails.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = resolve_symlink(&path.to_native())?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let permissions = fs::metadata(&target)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = target.with_file_name(&temp_name);

    if let Err(err) = replace_with_temp(&temp_path, &target, content, permissions) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    tracing::trace!(path = %path, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Follow a symlink to the file it names; other paths come back unchanged.
fn resolve_symlink(native_path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(native_path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(native_path) {
            Ok(real) => Ok(real),
            // Dangling link: replace the link itself
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(native_path.to_path_buf()),
            Err(e) => Err(Error::io(native_path, e)),
        },
        Ok(_) => Ok(native_path.to_path_buf()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(native_path.to_path_buf()),
        Err(e) => Err(Error::io(native_path, e)),
    }
}

fn replace_with_temp(
    temp_path: &Path,
    target: &Path,
    content: &[u8],
    permissions: Option<Permissions>,
) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    fs::rename(temp_path, target).map_err(|e| Error::io(target, e))
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Query filesystem metadata, surfacing a missing path as an `Io` error.
pub fn metadata(path: &NormalizedPath) -> Result<fs::Metadata> {
    let native_path = path.to_native();
    fs::metadata(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// List regular files directly inside `dir` whose name ends with `suffix`.
///
/// Symlinks count when they point at a regular file. Subdirectories are
/// skipped even when their name matches. Results are
/// sorted by name.
pub fn list_files_with_suffix(dir: &NormalizedPath, suffix: &str) -> Result<Vec<NormalizedPath>> {
    let native_dir = dir.to_native();
    let entries = fs::read_dir(&native_dir).map_err(|e| Error::io(&native_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_dir, e))?;
        let name = entry.file_name();
        let candidate = dir.join(&name.to_string_lossy());
        if !candidate.has_suffix(suffix) {
            continue;
        }

        // Follows symlinks; a dangling link is not a candidate
        let entry_path = entry.path();
        let is_file = match fs::metadata(&entry_path) {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => return Err(Error::io(&entry_path, e)),
        };
        if is_file {
            files.push(candidate);
        }
    }

    files.sort();
    Ok(files)
}
