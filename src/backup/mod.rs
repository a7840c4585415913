//! Backup management module
//!
//! Backups are plain copies named `<file>.bak<YYYYMMDD_HHMMSS>` and live in
//! `~/.shellbackup` unless configured otherwise. After every new backup the
//! whole set is rotated by age: the newest half of the cap stays as is, the
//! rest of the cap is compressed, and anything older is deleted. Rotation
//! keeps no state between runs.

pub mod compress;
pub mod rotation;

use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use time::OffsetDateTime;

use crate::error::{Error, Result};
use crate::model::Config;
use crate::utils::path::{expand_tilde, set_config_permissions};
use compress::{is_compressed, Compressor, XzCompressor};
use rotation::{effective_max, tier_for, RotationOutcome, RotationReport, Tier};

/// Default backup directory name under the home directory
pub const BACKUP_DIR_NAME: &str = ".shellbackup";

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub modified: SystemTime,
    pub size: u64,
    pub compressed: bool,
}

type Clock = Box<dyn Fn() -> OffsetDateTime + Send + Sync>;
type Remover = Box<dyn Fn(&Path) -> std::io::Result<()> + Send + Sync>;

fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// `YYYYMMDD_HHMMSS`
pub fn format_timestamp(at: OffsetDateTime) -> String {
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        at.year(),
        at.month() as u8,
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

/// `~/.shellbackup`, or `None` without a home directory
pub fn default_backup_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(BACKUP_DIR_NAME))
}

/// Backup manager for one configuration file
pub struct BackupManager {
    original: PathBuf,
    backup_dir: PathBuf,
    max_backups: usize,
    compressor: Box<dyn Compressor>,
    clock: Clock,
    remover: Remover,
}

impl BackupManager {
    /// Manager using `~/.shellbackup`, the default cap and `xz`
    pub fn new(original: impl Into<PathBuf>) -> Self {
        let original = original.into();
        let backup_dir = default_backup_dir().unwrap_or_else(|| parent_dir(&original));
        Self {
            original,
            backup_dir,
            max_backups: effective_max(0),
            compressor: Box::new(XzCompressor),
            clock: Box::new(local_now),
            remover: Box::new(|path: &Path| std::fs::remove_file(path)),
        }
    }

    /// Manager honouring the `[backup]` section of the app config
    pub fn from_config(original: impl Into<PathBuf>, config: &Config) -> Self {
        let manager = Self::new(original).with_max_backups(config.backup.max_count);
        match config.backup.directory.as_deref() {
            Some(dir) => manager.with_backup_dir(expand_tilde(dir)),
            None => manager,
        }
    }

    pub fn with_backup_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backup_dir = dir.into();
        self
    }

    /// Set the cap; zero selects the default of 20
    pub fn with_max_backups(mut self, max_backups: usize) -> Self {
        self.max_backups = effective_max(max_backups);
        self
    }

    pub fn with_compressor(mut self, compressor: impl Compressor + 'static) -> Self {
        self.compressor = Box::new(compressor);
        self
    }

    pub fn with_clock(mut self, clock: impl Fn() -> OffsetDateTime + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace how rotation deletes backups beyond the cap
    pub fn with_remover(
        mut self,
        remover: impl Fn(&Path) -> std::io::Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.remover = Box::new(remover);
        self
    }

    pub fn original(&self) -> &Path {
        &self.original
    }

    pub fn max_backups(&self) -> usize {
        self.max_backups
    }

    /// Configured backup directory. It may not exist yet.
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Directory new backups go to, created on demand.
    ///
    /// Falls back to the original file's directory when the configured one
    /// cannot be created.
    fn writable_backup_dir(&self) -> PathBuf {
        if self.backup_dir.is_dir() {
            return self.backup_dir.clone();
        }
        match std::fs::create_dir_all(&self.backup_dir) {
            Ok(()) => self.backup_dir.clone(),
            Err(e) => {
                let fallback = parent_dir(&self.original);
                warn!(
                    "cannot create backup directory {}: {}; using {}",
                    self.backup_dir.display(),
                    e,
                    fallback.display()
                );
                fallback
            }
        }
    }

    /// Substring that identifies backups of this file: `<file>.bak`
    pub fn backup_pattern(&self) -> String {
        let file_name = self
            .original
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "config".to_string());
        format!("{}.bak", file_name)
    }

    /// Copy the original into the backup directory, then rotate.
    ///
    /// A backup taken within the same second as an earlier one overwrites
    /// it. Rotation failures are logged and do not fail the backup.
    pub fn create_backup(&self) -> Result<PathBuf> {
        if !self.original.is_file() {
            return Err(Error::not_found(&self.original));
        }

        let name = format!("{}{}", self.backup_pattern(), format_timestamp((self.clock)()));
        let backup_path = self.writable_backup_dir().join(name);

        std::fs::copy(&self.original, &backup_path)
            .map_err(|e| Error::io("copy", &backup_path, e))?;
        info!(
            "backed up {} to {}",
            self.original.display(),
            backup_path.display()
        );

        let report = self.rotate();
        if !report.is_clean() {
            warn!(
                "rotation left {} backup(s) unprocessed",
                report.failures().count()
            );
        }
        Ok(backup_path)
    }

    /// Apply the keep/compress/delete policy to every backup of this file.
    ///
    /// Each backup is handled on its own; a failure is recorded in the
    /// report and the pass moves on.
    pub fn rotate(&self) -> RotationReport {
        let mut report = RotationReport::default();

        let backups = match self.sorted_backups() {
            Ok(backups) => backups,
            Err(e) => {
                warn!("rotation skipped: {}", e);
                return report;
            }
        };

        for (rank, (path, _)) in backups.into_iter().enumerate() {
            let outcome = match tier_for(rank, self.max_backups) {
                Tier::Keep => RotationOutcome::Kept,
                Tier::Compress if is_compressed(&path) => RotationOutcome::AlreadyCompressed,
                Tier::Compress => match self.compressor.compress(&path) {
                    Ok(packed) => {
                        debug!("compressed {}", packed.display());
                        RotationOutcome::Compressed(packed)
                    }
                    Err(e) => {
                        warn!("failed to compress backup {}: {}", path.display(), e);
                        RotationOutcome::CompressFailed(e.to_string())
                    }
                },
                Tier::Delete => match (self.remover)(&path) {
                    Ok(()) => {
                        debug!("deleted {}", path.display());
                        RotationOutcome::Deleted
                    }
                    Err(e) => {
                        warn!("failed to delete backup {}: {}", path.display(), e);
                        RotationOutcome::DeleteFailed(e.to_string())
                    }
                },
            };
            report.push(path, outcome);
        }

        report
    }

    /// Every backup of this file, in directory order.
    ///
    /// Nothing is created: while the configured directory does not exist,
    /// backups can only be in the fallback directory.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>> {
        let dir = if self.backup_dir.is_dir() {
            self.backup_dir.clone()
        } else {
            parent_dir(&self.original)
        };
        let pattern = self.backup_pattern();

        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io("read directory", &dir, e)),
        };

        let mut backups = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io("read directory", &dir, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if is_file && entry.file_name().to_string_lossy().contains(&pattern) {
                backups.push(entry.path());
            }
        }

        Ok(backups)
    }

    /// Backups with metadata, newest first
    pub fn list_entries(&self) -> Result<Vec<BackupEntry>> {
        let mut entries = Vec::new();
        for path in self.list_backups()? {
            let Ok(metadata) = std::fs::metadata(&path) else {
                continue;
            };
            entries.push(BackupEntry {
                file_name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
                size: metadata.len(),
                compressed: is_compressed(&path),
                path,
            });
        }

        entries.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| b.file_name.cmp(&a.file_name))
        });
        Ok(entries)
    }

    /// The backup with the newest modification time
    pub fn last_backup_path(&self) -> Result<Option<PathBuf>> {
        Ok(self
            .sorted_backups()?
            .into_iter()
            .next()
            .map(|(path, _)| path))
    }

    /// Copy `backup` over the original file.
    ///
    /// A compressed backup is first decompressed next to itself. The
    /// compressed file is kept and the decompressed copy is removed again,
    /// so the backup set is unchanged.
    pub fn restore_from_backup(&self, backup: &Path) -> Result<()> {
        if !backup.is_file() {
            return Err(Error::not_found(backup));
        }

        if !is_compressed(backup) {
            return self.copy_over_original(backup);
        }

        let source = self.compressor.decompress(backup)?;
        let result = self.copy_over_original(&source);
        if let Err(e) = std::fs::remove_file(&source) {
            warn!("could not remove {}: {}", source.display(), e);
        }
        result
    }

    fn copy_over_original(&self, source: &Path) -> Result<()> {
        if !source.is_file() {
            return Err(Error::not_found(source));
        }

        std::fs::copy(source, &self.original)
            .map_err(|e| Error::io("copy", &self.original, e))?;
        set_config_permissions(&self.original)?;

        info!(
            "restored {} from {}",
            self.original.display(),
            source.display()
        );
        Ok(())
    }

    /// Restore from the newest backup; returns the backup used
    pub fn restore_from_last_backup(&self) -> Result<PathBuf> {
        let last = self.last_backup_path()?.ok_or(Error::NoBackup)?;
        self.restore_from_backup(&last)?;
        Ok(last)
    }

    /// Backups sorted newest first by mtime, ties broken by name.
    ///
    /// Names embed the timestamp, so the tie-break keeps same-tick copies in
    /// creation order. Files whose metadata cannot be read are skipped.
    fn sorted_backups(&self) -> Result<Vec<(PathBuf, SystemTime)>> {
        let mut backups: Vec<(PathBuf, SystemTime)> = self
            .list_backups()?
            .into_iter()
            .filter_map(|path| {
                let modified = std::fs::metadata(&path).and_then(|m| m.modified()).ok()?;
                Some((path, modified))
            })
            .collect();

        backups.sort_by(|(a_path, a_time), (b_path, b_time)| {
            b_time
                .cmp(a_time)
                .then_with(|| b_path.file_name().cmp(&a_path.file_name()))
        });
        Ok(backups)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
