// src/engine/mod.rs

//! Change dispatch engine.
//!
//! Every poller pushes [`RuntimeEvent::FileChanged`] into one bounded
//! channel; the [`runtime::Runtime`] is its single consumer. Because the
//! runtime awaits each command before receiving the next event, triggered
//! commands never overlap, and a poller that finds the channel full simply
//! waits.

use std::path::PathBuf;

use crate::watch::ChangeKind;

/// Capacity of the change channel. tokio has no rendezvous channel, so one
/// slot is the closest equivalent: at most one event waits while a command
/// runs, every further sender suspends.
pub const CHANGE_CHANNEL_CAPACITY: usize = 1;

/// One detected change of one watched path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

/// Events flowing into the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A poller observed a change.
    FileChanged(ChangeEvent),
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod runtime;

pub use runtime::{RunSummary, Runtime};
