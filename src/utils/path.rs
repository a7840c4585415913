//! Path utilities

use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Mode applied to configuration files after every write
pub const CONFIG_FILE_MODE: u32 = 0o644;

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Normalize a path (expand tilde, resolve relative paths)
pub fn normalize_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(expanded)
    }
}

/// Check if a file exists and is readable
pub fn check_file_readable(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::not_found(path));
    }
    Ok(())
}

/// Raw file content; configuration files are not required to be UTF-8
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    check_file_readable(path)?;
    std::fs::read(path).map_err(|e| Error::io("read", path, e))
}

/// File content as text, with invalid UTF-8 replaced by `U+FFFD`
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Set `0644` on a configuration file. No-op off unix.
pub fn set_config_permissions(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(CONFIG_FILE_MODE))
            .map_err(|e| Error::io("chmod", path, e))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

/// Replace the contents of `path` without ever leaving it half-written.
///
/// The content goes to a temporary file in the same directory, is synced to
/// disk, gets mode `0644` and is then renamed over `path`. Missing parent
/// directories are created. A symlinked `path` is resolved first so the
/// link itself survives.
pub fn write_atomic(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let content = content.as_ref();
    let resolved;
    let path = if path.is_symlink() {
        resolved = std::fs::canonicalize(path).map_err(|e| Error::io("resolve link", path, e))?;
        resolved.as_path()
    } else {
        path
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| Error::io("create directory", &parent, e))?;

    let mut temp = tempfile::NamedTempFile::new_in(&parent)
        .map_err(|e| Error::io("create temp file", &parent, e))?;
    temp.write_all(content)
        .map_err(|e| Error::io("write", temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io("sync", temp.path(), e))?;
    set_config_permissions(temp.path())?;

    temp.persist(path)
        .map_err(|e| Error::io("rename", path, e.error))?;

    debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
