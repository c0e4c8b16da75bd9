// src/watch/baseline.rs

//! Last-known snapshot of a single watched path.

use std::fmt;

use crate::watch::snapshot::FileSnapshot;

/// Why a path was reported as changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The path had no baseline (its start-up stat failed) and has now been
    /// observed for the first time.
    Appeared,
    /// Size, mode, mtime or the directory flag differ from the baseline.
    Modified,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Appeared => f.write_str("appeared"),
            ChangeKind::Modified => f.write_str("modified"),
        }
    }
}

/// Owned baseline for one path.
///
/// Each poller holds its own `Baseline`, so the read-compare-write in
/// [`Baseline::observe`] is never interleaved with another task.
#[derive(Debug, Clone, Default)]
pub struct Baseline {
    snapshot: Option<FileSnapshot>,
}

impl Baseline {
    pub fn new(initial: Option<FileSnapshot>) -> Self {
        Self { snapshot: initial }
    }

    pub fn snapshot(&self) -> Option<&FileSnapshot> {
        self.snapshot.as_ref()
    }

    /// Compare `current` against the baseline and record it if it differs.
    ///
    /// Returns the kind of change, or `None` when nothing changed. The
    /// baseline is updated before returning, so the same state is never
    /// reported twice.
    pub fn observe(&mut self, current: FileSnapshot) -> Option<ChangeKind> {
        let kind = match &self.snapshot {
            None => ChangeKind::Appeared,
            Some(previous) if current.differs_from(previous) => ChangeKind::Modified,
            Some(_) => return None,
        };
        self.snapshot = Some(current);
        Some(kind)
    }
}
