// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{PollwatchError, Result};
use crate::watch::snapshot::FileSnapshot;

pub mod mock;

/// Abstract filesystem interface.
///
/// Pollers and glob expansion only ever go through this trait, so tests can
/// substitute [`mock::MockFileSystem`].
pub trait FileSystem: Send + Sync + Debug {
    /// Stat `path`, following symlinks.
    fn stat(&self, path: &Path) -> Result<FileSnapshot>;

    fn is_dir(&self, path: &Path) -> bool;

    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Absolute path with every symlink resolved.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn stat(&self, path: &Path) -> Result<FileSnapshot> {
        fs::metadata(path)
            .map(|meta| FileSnapshot::from_metadata(&meta))
            .map_err(|source| PollwatchError::Stat {
                path: path.to_path_buf(),
                source,
            })
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        Ok(fs::canonicalize(path)?)
    }
}
