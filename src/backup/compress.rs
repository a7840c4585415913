//! Backup compression

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Suffix carried by compressed backups
pub const COMPRESSED_SUFFIX: &str = ".xz";

/// Compresses and decompresses backup files in place.
///
/// `compress` replaces `path` with its compressed twin and returns the new
/// path. `decompress` writes the plain sibling next to a compressed file,
/// keeps the compressed one and returns the sibling's path.
pub trait Compressor: Send + Sync {
    fn name(&self) -> &str;

    fn compress(&self, path: &Path) -> Result<PathBuf>;

    fn decompress(&self, path: &Path) -> Result<PathBuf>;
}

/// Runs the `xz` binary as a blocking subprocess
#[derive(Debug, Clone, Copy, Default)]
pub struct XzCompressor;

impl XzCompressor {
    fn run(&self, args: &[&str], path: &Path) -> Result<()> {
        let output = Command::new("xz")
            .args(args)
            .arg(path)
            .output()
            .map_err(|e| self.failure(path, e.to_string()))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = match stderr.trim() {
            "" => format!("exited with {}", output.status),
            msg => msg.to_string(),
        };
        Err(self.failure(path, detail))
    }

    fn failure(&self, path: &Path, detail: String) -> Error {
        Error::ExternalTool {
            tool: self.name().to_string(),
            path: path.to_path_buf(),
            detail,
        }
    }
}

impl Compressor for XzCompressor {
    fn name(&self) -> &str {
        "xz"
    }

    fn compress(&self, path: &Path) -> Result<PathBuf> {
        self.run(&["-9e"], path)?;
        Ok(compressed_path(path))
    }

    fn decompress(&self, path: &Path) -> Result<PathBuf> {
        self.run(&["-d", "-k", "-f"], path)?;
        Ok(decompressed_path(path))
    }
}

pub fn is_compressed(path: &Path) -> bool {
    path.to_string_lossy().ends_with(COMPRESSED_SUFFIX)
}

/// `path` with the compressed suffix appended
pub fn compressed_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(COMPRESSED_SUFFIX);
    PathBuf::from(name)
}

/// `path` with the compressed suffix removed, if present
pub fn decompressed_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match raw.strip_suffix(COMPRESSED_SUFFIX) {
        Some(stripped) => PathBuf::from(stripped),
        None => path.to_path_buf(),
    }
}
