//! Backup rotation policy

use std::path::PathBuf;

use crate::model::DEFAULT_MAX_BACKUPS;

/// What rotation does with a backup at a given age rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Newest backups, left as they are
    Keep,
    /// Middle band, compressed if not already
    Compress,
    /// Beyond the cap, deleted
    Delete,
}

/// Cap on retained backups; zero means "use the default"
pub fn effective_max(max_backups: usize) -> usize {
    if max_backups == 0 {
        DEFAULT_MAX_BACKUPS
    } else {
        max_backups
    }
}

/// Number of newest backups that stay uncompressed: the newer half of the cap
pub fn uncompressed_count(max_backups: usize) -> usize {
    effective_max(max_backups).div_ceil(2)
}

/// Tier for the backup at `rank` (0 = newest)
pub fn tier_for(rank: usize, max_backups: usize) -> Tier {
    let max = effective_max(max_backups);
    if rank >= max {
        Tier::Delete
    } else if rank >= uncompressed_count(max) {
        Tier::Compress
    } else {
        Tier::Keep
    }
}

/// Result of handling one backup during rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    Kept,
    AlreadyCompressed,
    Compressed(PathBuf),
    Deleted,
    CompressFailed(String),
    DeleteFailed(String),
}

impl RotationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            RotationOutcome::CompressFailed(_) | RotationOutcome::DeleteFailed(_)
        )
    }
}

/// Every backup visited by a rotation pass, newest first, with its outcome
#[derive(Debug, Default)]
pub struct RotationReport {
    pub outcomes: Vec<(PathBuf, RotationOutcome)>,
}

impl RotationReport {
    pub fn push(&mut self, path: PathBuf, outcome: RotationOutcome) {
        self.outcomes.push((path, outcome));
    }

    pub fn failures(&self) -> impl Iterator<Item = &(PathBuf, RotationOutcome)> {
        self.outcomes.iter().filter(|(_, outcome)| outcome.is_failure())
    }

    pub fn compressed(&self) -> usize {
        self.count(|o| matches!(o, RotationOutcome::Compressed(_)))
    }

    pub fn deleted(&self) -> usize {
        self.count(|o| matches!(o, RotationOutcome::Deleted))
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    fn count(&self, pred: impl Fn(&RotationOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}
