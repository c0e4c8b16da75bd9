// src/watch/poller.rs

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use crate::engine::{ChangeEvent, RuntimeEvent};
use crate::fs::FileSystem;
use crate::watch::baseline::Baseline;
use crate::watch::snapshot::FileSnapshot;

/// A watched path paired with its last-known snapshot.
#[derive(Debug, Clone)]
pub struct WatchedEntry {
    pub path: PathBuf,
    pub baseline: Baseline,
}

/// Stat every path once to seed its baseline.
///
/// A path whose stat fails is reported and still registered, with an empty
/// baseline; its first successful poll is reported as `Appeared`.
pub fn initial_entries(fs: &dyn FileSystem, paths: Vec<PathBuf>) -> Vec<WatchedEntry> {
    paths
        .into_iter()
        .map(|path| {
            let snapshot = match fs.stat(&path) {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "initial stat failed; watching anyway");
                    None
                }
            };
            WatchedEntry {
                path,
                baseline: Baseline::new(snapshot),
            }
        })
        .collect()
}

/// Polling task for a single path.
///
/// Sleeps for `interval`, stats the path, and pushes one
/// [`RuntimeEvent::FileChanged`] per observed transition. Stat failures are
/// retried silently on the next tick. The loop ends when the shutdown
/// signal fires or the runtime has gone away.
#[derive(Debug)]
pub struct Poller {
    entry: WatchedEntry,
    interval: Duration,
    fs: Arc<dyn FileSystem>,
    event_tx: mpsc::Sender<RuntimeEvent>,
    shutdown: watch::Receiver<bool>,
}

impl Poller {
    pub fn new(
        entry: WatchedEntry,
        interval: Duration,
        fs: Arc<dyn FileSystem>,
        event_tx: mpsc::Sender<RuntimeEvent>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            entry,
            interval,
            fs,
            event_tx,
            shutdown,
        }
    }

    pub async fn run(mut self) {
        debug!(path = %self.entry.path.display(), interval = ?self.interval, "poller started");

        loop {
            if *self.shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.shutdown.changed() => break,
            }

            let Some(current) = self.poll_once().await else {
                continue;
            };

            let Some(kind) = self.entry.baseline.observe(current) else {
                continue;
            };

            info!(path = %self.entry.path.display(), %kind, "change detected");

            let event = RuntimeEvent::FileChanged(ChangeEvent {
                path: self.entry.path.clone(),
                kind,
            });

            // Blocks while the runtime is busy running a command.
            tokio::select! {
                sent = self.event_tx.send(event) => {
                    if sent.is_err() {
                        debug!(path = %self.entry.path.display(), "runtime channel closed; poller exiting");
                        break;
                    }
                }
                _ = self.shutdown.changed() => break,
            }
        }

        debug!(path = %self.entry.path.display(), "poller stopped");
    }

    /// Stat the path off the async scheduler. `None` on any failure.
    async fn poll_once(&self) -> Option<FileSnapshot> {
        let fs = Arc::clone(&self.fs);
        let path = self.entry.path.clone();

        match tokio::task::spawn_blocking(move || fs.stat(&path)).await {
            Ok(Ok(snapshot)) => Some(snapshot),
            Ok(Err(err)) => {
                trace!(path = %self.entry.path.display(), error = %err, "stat failed; retrying next tick");
                None
            }
            Err(err) => {
                warn!(path = %self.entry.path.display(), error = %err, "stat task panicked");
                None
            }
        }
    }
}

/// Spawn one [`Poller`] per entry.
pub fn spawn_pollers(
    entries: Vec<WatchedEntry>,
    interval: Duration,
    fs: Arc<dyn FileSystem>,
    event_tx: mpsc::Sender<RuntimeEvent>,
    shutdown: watch::Receiver<bool>,
) -> Vec<JoinHandle<()>> {
    entries
        .into_iter()
        .map(|entry| {
            let poller = Poller::new(
                entry,
                interval,
                Arc::clone(&fs),
                event_tx.clone(),
                shutdown.clone(),
            );
            tokio::spawn(poller.run())
        })
        .collect()
}
