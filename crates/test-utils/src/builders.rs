#![allow(dead_code)]

use std::time::{Duration, SystemTime};

use clap::Parser;
use pollwatch::cli::CliArgs;
use pollwatch::watch::FileSnapshot;

/// Builder for `FileSnapshot` to simplify test setup.
pub struct SnapshotBuilder {
    snapshot: FileSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: FileSnapshot {
                size: 0,
                mode: 0o100644,
                modified: Some(SystemTime::UNIX_EPOCH),
                is_dir: false,
            },
        }
    }

    pub fn size(mut self, size: u64) -> Self {
        self.snapshot.size = size;
        self
    }

    pub fn mode(mut self, mode: u32) -> Self {
        self.snapshot.mode = mode;
        self
    }

    pub fn modified_secs(mut self, secs: u64) -> Self {
        self.snapshot.modified = Some(SystemTime::UNIX_EPOCH + Duration::from_secs(secs));
        self
    }

    pub fn dir(mut self, is_dir: bool) -> Self {
        self.snapshot.is_dir = is_dir;
        self
    }

    pub fn build(self) -> FileSnapshot {
        self.snapshot
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a command line (without the program name).
pub fn cli(args: &[&str]) -> CliArgs {
    let argv = std::iter::once("pollwatch").chain(args.iter().copied());
    CliArgs::try_parse_from(argv).expect("test command line should parse")
}
