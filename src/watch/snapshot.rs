// src/watch/snapshot.rs

//! Point-in-time capture of a file's observable metadata.

use std::fs::Metadata;
use std::time::SystemTime;

/// Size, permission bits, modification time and directory flag of one path.
///
/// Two snapshots are equal iff all four fields match. Snapshots are only
/// ever compared against earlier snapshots of the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSnapshot {
    pub size: u64,
    pub mode: u32,
    /// `None` on platforms that don't report a modification time.
    pub modified: Option<SystemTime>,
    pub is_dir: bool,
}

impl FileSnapshot {
    pub fn from_metadata(meta: &Metadata) -> Self {
        Self {
            size: meta.len(),
            mode: mode_bits(meta),
            modified: meta.modified().ok(),
            is_dir: meta.is_dir(),
        }
    }

    /// Change predicate: true if any of size, mode, mtime or the directory
    /// flag differs.
    ///
    /// A rewrite that keeps all four identical (same size, same mode, mtime
    /// quantized to the same tick) is not detected.
    pub fn differs_from(&self, other: &FileSnapshot) -> bool {
        self.size != other.size
            || self.mode != other.mode
            || self.modified != other.modified
            || self.is_dir != other.is_dir
    }
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o666 }
}
