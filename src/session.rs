// src/session.rs

//! A running watch: pollers plus the runtime that consumes their events.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::engine::{RunSummary, Runtime, RuntimeEvent, CHANGE_CHANNEL_CAPACITY};
use crate::errors::Result;
use crate::exec::{CommandTemplate, ExecutorBackend};
use crate::fs::FileSystem;
use crate::watch::{initial_entries, spawn_pollers};

/// Pollers already spawned, runtime not yet driven.
///
/// Must be created from within a Tokio runtime.
pub struct WatchSession<E: ExecutorBackend> {
    runtime: Runtime<E>,
    pollers: Vec<JoinHandle<()>>,
    control_tx: mpsc::Sender<RuntimeEvent>,
}

impl<E: ExecutorBackend> std::fmt::Debug for WatchSession<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSession")
            .field("runtime", &self.runtime)
            .field("pollers", &self.pollers.len())
            .finish()
    }
}

impl<E: ExecutorBackend> WatchSession<E> {
    /// Seed baselines for `paths` and spawn one poller per path.
    pub fn start(
        paths: Vec<PathBuf>,
        template: CommandTemplate,
        interval: Duration,
        fs: Arc<dyn FileSystem>,
        executor: E,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel::<RuntimeEvent>(CHANGE_CHANNEL_CAPACITY);
        let runtime = Runtime::new(template, event_rx, executor);

        let entries = initial_entries(fs.as_ref(), paths);
        let pollers = spawn_pollers(
            entries,
            interval,
            fs,
            event_tx.clone(),
            runtime.shutdown_signal(),
        );
        debug!(pollers = pollers.len(), "pollers spawned");

        Self {
            runtime,
            pollers,
            control_tx: event_tx,
        }
    }

    /// Sender for injecting control events such as
    /// [`RuntimeEvent::ShutdownRequested`].
    pub fn control(&self) -> mpsc::Sender<RuntimeEvent> {
        self.control_tx.clone()
    }

    /// Drive the runtime until shutdown, then wait for the pollers to stop.
    pub async fn run(self) -> Result<RunSummary> {
        let Self {
            runtime,
            pollers,
            control_tx,
        } = self;
        drop(control_tx);

        let summary = runtime.run().await?;

        for poller in pollers {
            if let Err(err) = poller.await {
                debug!(error = %err, "poller task ended abnormally");
            }
        }

        Ok(summary)
    }
}
