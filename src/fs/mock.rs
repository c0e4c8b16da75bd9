// src/fs/mock.rs

use super::FileSystem;
use crate::errors::{PollwatchError, Result};
use crate::watch::snapshot::FileSnapshot;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(FileSnapshot),
    Dir(Vec<String>), // List of child names
}

#[derive(Debug, Default)]
struct MockState {
    entries: HashMap<PathBuf, MockEntry>,
    /// Every `stat` call, in order, with the instant it happened.
    stat_log: Vec<(PathBuf, Instant)>,
}

/// In-memory filesystem whose metadata can be changed from tests while
/// pollers are running against it.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        // Ensure root exists
        entries.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            state: Arc::new(Mutex::new(MockState {
                entries,
                stat_log: Vec::new(),
            })),
        }
    }

    /// Default snapshot for a regular file of `len` bytes.
    pub fn file_snapshot(len: u64) -> FileSnapshot {
        FileSnapshot {
            size: len,
            mode: 0o100644,
            modified: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)),
            is_dir: false,
        }
    }

    /// Add (or replace) a regular file of `len` bytes.
    pub fn add_file(&self, path: impl AsRef<Path>, len: u64) {
        self.set_file(path, Self::file_snapshot(len));
    }

    /// Add (or replace) a file with an explicit snapshot.
    pub fn set_file(&self, path: impl AsRef<Path>, snapshot: FileSnapshot) {
        let path = path.as_ref().to_path_buf();
        let mut state = self.state.lock().unwrap();
        state.entries.insert(path.clone(), MockEntry::File(snapshot));
        link_into_parent(&mut state.entries, &path);
    }

    /// Apply `f` to the snapshot of an existing file.
    pub fn update_file(&self, path: impl AsRef<Path>, f: impl FnOnce(&mut FileSnapshot)) {
        let mut state = self.state.lock().unwrap();
        if let Some(MockEntry::File(snapshot)) = state.entries.get_mut(path.as_ref()) {
            f(snapshot);
        }
    }

    /// Remove a file; subsequent stats fail with `NotFound`.
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        state.entries.remove(path);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            let parent = normalize_parent(parent);
            if let Some(MockEntry::Dir(children)) = state.entries.get_mut(parent) {
                children.retain(|c| c.as_str() != name.to_string_lossy());
            }
        }
    }

    /// Instants at which `path` was stat'ed.
    pub fn stat_times(&self, path: impl AsRef<Path>) -> Vec<Instant> {
        let state = self.state.lock().unwrap();
        state
            .stat_log
            .iter()
            .filter(|(p, _)| p.as_path() == path.as_ref())
            .map(|(_, at)| *at)
            .collect()
    }
}

fn normalize_parent(parent: &Path) -> &Path {
    if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    }
}

fn link_into_parent(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    let Some(parent) = path.parent() else {
        return;
    };
    let parent = normalize_parent(parent);
    if parent == path {
        return;
    }
    if !entries.contains_key(parent) {
        entries.insert(parent.to_path_buf(), MockEntry::Dir(Vec::new()));
        link_into_parent(entries, parent);
    }
    if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if !children.iter().any(|c| c == name) {
                children.push(name.to_string());
            }
        }
    }
}

impl FileSystem for MockFileSystem {
    fn stat(&self, path: &Path) -> Result<FileSnapshot> {
        let mut state = self.state.lock().unwrap();
        state.stat_log.push((path.to_path_buf(), Instant::now()));
        match state.entries.get(path) {
            Some(MockEntry::File(snapshot)) => Ok(*snapshot),
            Some(MockEntry::Dir(_)) => Ok(FileSnapshot {
                size: 0,
                mode: 0o040755,
                modified: None,
                is_dir: true,
            }),
            None => Err(PollwatchError::Stat {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file in mock"),
            }),
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        matches!(state.entries.get(path), Some(MockEntry::Dir(_)))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        match state.entries.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(PollwatchError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory or not found: {:?}", path),
            ))),
        }
    }

    // No links in the mock; every known path is already canonical.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let state = self.state.lock().unwrap();
        if state.entries.contains_key(path) {
            Ok(path.to_path_buf())
        } else {
            Err(PollwatchError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such path in mock: {:?}", path),
            )))
        }
    }
}
