// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod session;
pub mod types;
pub mod watch;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::engine::{RunSummary, RuntimeEvent};
use crate::errors::Result;
use crate::exec::ProcessExecutor;
use crate::fs::{FileSystem, RealFileSystem};
use crate::session::WatchSession;
use crate::types::WatchSource;
use crate::watch::{expand_pattern, read_path_list};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - watch set resolution (glob or stdin)
/// - one poller per path
/// - the single-consumer runtime and the process executor
/// - Ctrl-C handling
pub async fn run(settings: Settings) -> Result<RunSummary> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    let paths = resolve_watch_paths(fs.as_ref(), &settings.source)?;
    info!(source = %settings.source, count = paths.len(), "watch set resolved");
    for path in &paths {
        info!(path = %path.display(), "watching");
    }
    if !settings.template.references_path() {
        debug!(command = %settings.template, "command does not reference the changed path");
    }

    let session = WatchSession::start(
        paths,
        settings.template.clone(),
        settings.interval,
        fs,
        ProcessExecutor::new(),
    );

    // Ctrl-C → graceful shutdown.
    {
        let tx = session.control();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for Ctrl+C");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    session.run().await
}

/// Build the initial list of paths to watch.
pub fn resolve_watch_paths(fs: &dyn FileSystem, source: &WatchSource) -> Result<Vec<PathBuf>> {
    match source {
        WatchSource::Pattern(pattern) => expand_pattern(fs, pattern),
        WatchSource::Stdin => read_path_list(io::stdin().lock()),
    }
}
