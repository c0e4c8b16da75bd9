use std::collections::VecDeque;
use std::ffi::OsString;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pollwatch::errors::Result;
use pollwatch::exec::{CommandOutcome, ExecutorBackend};
use tokio::sync::mpsc;

/// A fake executor that:
/// - reports every argument vector it "ran" on a channel
/// - returns scripted outcomes (then `Success`)
/// - optionally takes some time per command
/// - tracks the highest number of overlapping executions it ever saw.
pub struct FakeExecutor {
    executed_tx: mpsc::UnboundedSender<Vec<OsString>>,
    outcomes: VecDeque<CommandOutcome>,
    run_time: Duration,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl FakeExecutor {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Vec<OsString>>) {
        let (executed_tx, executed_rx) = mpsc::unbounded_channel();
        let executor = Self {
            executed_tx,
            outcomes: VecDeque::new(),
            run_time: Duration::ZERO,
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        };
        (executor, executed_rx)
    }

    pub fn with_outcomes(mut self, outcomes: impl IntoIterator<Item = CommandOutcome>) -> Self {
        self.outcomes.extend(outcomes);
        self
    }

    pub fn with_run_time(mut self, run_time: Duration) -> Self {
        self.run_time = run_time;
        self
    }

    /// Shared counter holding the maximum observed concurrency.
    pub fn max_in_flight(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.max_in_flight)
    }
}

impl ExecutorBackend for FakeExecutor {
    fn execute(
        &mut self,
        argv: Vec<OsString>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>> {
        let outcome = self.outcomes.pop_front().unwrap_or(CommandOutcome::Success);
        let tx = self.executed_tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let max_in_flight = Arc::clone(&self.max_in_flight);
        let run_time = self.run_time;

        Box::pin(async move {
            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_flight.fetch_max(now, Ordering::SeqCst);

            if !run_time.is_zero() {
                tokio::time::sleep(run_time).await;
            }

            let _ = tx.send(argv);
            in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(outcome)
        })
    }
}
