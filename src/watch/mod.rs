// src/watch/mod.rs

//! Poll-based change detection.
//!
//! This module is responsible for:
//! - Resolving the initial watch set (glob pattern or stdin list).
//! - Capturing [`FileSnapshot`]s and deciding whether a path changed.
//! - Running one [`Poller`] task per path that feeds the engine channel.
//!
//! It does **not** know about commands; it only turns metadata changes
//! into path events.

pub mod baseline;
pub mod patterns;
pub mod poller;
pub mod snapshot;
pub mod stdin;

pub use baseline::{Baseline, ChangeKind};
pub use patterns::{compile_pattern, expand_pattern};
pub use poller::{initial_entries, spawn_pollers, Poller, WatchedEntry};
pub use snapshot::FileSnapshot;
pub use stdin::read_path_list;
