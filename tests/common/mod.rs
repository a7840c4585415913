//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use time::macros::datetime;
use time::OffsetDateTime;

use shalias::backup::compress::{compressed_path, decompressed_path, Compressor};
use shalias::{BackupManager, Error, Result};

/// In-process stand-in for `xz`: compressing renames the file to `.xz`,
/// decompressing copies it back next to the archive.
pub struct RenameCompressor;

impl Compressor for RenameCompressor {
    fn name(&self) -> &str {
        "rename"
    }

    fn compress(&self, path: &Path) -> Result<PathBuf> {
        let packed = compressed_path(path);
        std::fs::rename(path, &packed).map_err(|e| Error::Io {
            op: "rename",
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(packed)
    }

    fn decompress(&self, path: &Path) -> Result<PathBuf> {
        let plain = decompressed_path(path);
        std::fs::copy(path, &plain).map_err(|e| Error::Io {
            op: "copy",
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(plain)
    }
}

/// Clock advancing one second per call
pub fn ticking_clock() -> impl Fn() -> OffsetDateTime + Send + Sync + 'static {
    let tick = AtomicI64::new(0);
    move || {
        datetime!(2026-05-10 08:00:00 UTC) + time::Duration::seconds(tick.fetch_add(1, Ordering::SeqCst))
    }
}

/// Backup manager for `original` writing into `<dir>/backups`
pub fn test_manager(dir: &Path, original: &Path) -> BackupManager {
    BackupManager::new(original)
        .with_backup_dir(dir.join("backups"))
        .with_compressor(RenameCompressor)
        .with_clock(ticking_clock())
}
