#![allow(dead_code)]

use std::time::Duration;

use tokio::sync::mpsc;

pub use pollwatch_test_utils::builders;
pub use pollwatch_test_utils::init_tracing;

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}

/// Collect everything that arrives on `rx` within `window`.
pub async fn drain_for<T>(rx: &mut mpsc::UnboundedReceiver<T>, window: Duration) -> Vec<T> {
    let mut items = Vec::new();
    let deadline = tokio::time::Instant::now() + window;
    while let Ok(Some(item)) = tokio::time::timeout_at(deadline, rx.recv()).await {
        items.push(item);
    }
    items
}

/// Same as [`drain_for`] for a bounded receiver.
pub async fn drain_bounded<T>(rx: &mut mpsc::Receiver<T>, window: Duration) -> Vec<T> {
    let mut items = Vec::new();
    let deadline = tokio::time::Instant::now() + window;
    while let Ok(Some(item)) = tokio::time::timeout_at(deadline, rx.recv()).await {
        items.push(item);
    }
    items
}
