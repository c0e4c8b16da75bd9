// tests/poller_mock_fs.rs

mod common;
use crate::common::{drain_bounded, init_tracing, with_timeout};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use pollwatch::engine::{ChangeEvent, RuntimeEvent};
use pollwatch::fs::mock::MockFileSystem;
use pollwatch::fs::FileSystem;
use pollwatch::watch::{initial_entries, ChangeKind, Poller, WatchedEntry};

const TICK: Duration = Duration::from_millis(20);

struct Harness {
    fs: MockFileSystem,
    rx: mpsc::Receiver<RuntimeEvent>,
    shutdown_tx: watch::Sender<bool>,
    handle: tokio::task::JoinHandle<()>,
}

/// Spawn a single poller on `path`, seeding its baseline from the mock.
fn spawn_one(fs: MockFileSystem, path: &str, interval: Duration) -> Harness {
    let (tx, rx) = mpsc::channel(16);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let entry = initial_entries(&fs, vec![PathBuf::from(path)])
        .pop()
        .expect("one entry");
    let dyn_fs: Arc<dyn FileSystem> = Arc::new(fs.clone());
    let poller = Poller::new(entry, interval, dyn_fs, tx, shutdown_rx);
    let handle = tokio::spawn(poller.run());

    Harness {
        fs,
        rx,
        shutdown_tx,
        handle,
    }
}

fn changed(path: &str, kind: ChangeKind) -> RuntimeEvent {
    RuntimeEvent::FileChanged(ChangeEvent {
        path: PathBuf::from(path),
        kind,
    })
}

#[tokio::test]
async fn unchanged_file_emits_nothing() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 3);

    let mut h = spawn_one(fs, "a.txt", TICK);
    let events = drain_bounded(&mut h.rx, TICK * 10).await;
    assert!(events.is_empty(), "unexpected events: {:?}", events);

    let _ = h.shutdown_tx.send(true);
}

#[tokio::test]
async fn single_change_emits_exactly_one_event() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 3);

    let mut h = spawn_one(fs, "a.txt", TICK);
    tokio::time::sleep(TICK * 2).await;

    h.fs.update_file("a.txt", |s| s.size = 4);
    let events = drain_bounded(&mut h.rx, TICK * 10).await;
    assert_eq!(events, vec![changed("a.txt", ChangeKind::Modified)]);

    let _ = h.shutdown_tx.send(true);
}

#[tokio::test]
async fn mode_mtime_and_dir_flag_changes_are_detected() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 3);

    let mut h = spawn_one(fs, "a.txt", TICK);

    h.fs.update_file("a.txt", |s| s.mode = 0o100755);
    assert_eq!(
        with_timeout(h.rx.recv()).await,
        Some(changed("a.txt", ChangeKind::Modified))
    );

    h.fs.update_file("a.txt", |s| {
        s.modified = s.modified.map(|t| t + Duration::from_secs(1))
    });
    assert_eq!(
        with_timeout(h.rx.recv()).await,
        Some(changed("a.txt", ChangeKind::Modified))
    );

    h.fs.update_file("a.txt", |s| s.is_dir = true);
    assert_eq!(
        with_timeout(h.rx.recv()).await,
        Some(changed("a.txt", ChangeKind::Modified))
    );

    let _ = h.shutdown_tx.send(true);
}

#[tokio::test]
async fn transient_stat_failure_is_silent() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 3);

    let mut h = spawn_one(fs, "a.txt", TICK);

    h.fs.remove("a.txt");
    let events = drain_bounded(&mut h.rx, TICK * 6).await;
    assert!(events.is_empty(), "missing file must not be a change: {:?}", events);

    // Back with identical metadata: still nothing to report.
    h.fs.add_file("a.txt", 3);
    let events = drain_bounded(&mut h.rx, TICK * 6).await;
    assert!(events.is_empty(), "restored file must not be a change: {:?}", events);

    h.fs.add_file("a.txt", 9);
    assert_eq!(
        with_timeout(h.rx.recv()).await,
        Some(changed("a.txt", ChangeKind::Modified))
    );

    let _ = h.shutdown_tx.send(true);
}

#[tokio::test]
async fn path_missing_at_startup_is_reported_when_it_appears() {
    init_tracing();
    let fs = MockFileSystem::new();

    let mut h = spawn_one(fs, "later.txt", TICK);
    let events = drain_bounded(&mut h.rx, TICK * 5).await;
    assert!(events.is_empty());

    h.fs.add_file("later.txt", 1);
    assert_eq!(
        with_timeout(h.rx.recv()).await,
        Some(changed("later.txt", ChangeKind::Appeared))
    );
    let events = drain_bounded(&mut h.rx, TICK * 5).await;
    assert!(events.is_empty(), "appearance must be reported once: {:?}", events);

    let _ = h.shutdown_tx.send(true);
}

#[tokio::test]
async fn polls_are_spaced_by_at_least_the_interval() {
    init_tracing();
    let interval = Duration::from_millis(100);
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 3);

    let h = spawn_one(fs, "a.txt", interval);
    tokio::time::sleep(Duration::from_millis(650)).await;
    let _ = h.shutdown_tx.send(true);
    with_timeout(h.handle).await.unwrap();

    // First entry is the start-up stat from `initial_entries`.
    let times = h.fs.stat_times("a.txt");
    assert!(times.len() >= 4, "expected several polls, got {}", times.len());
    for pair in times.windows(2) {
        let gap = pair[1].duration_since(pair[0]);
        assert!(gap >= interval, "polls only {:?} apart", gap);
    }
}

#[tokio::test]
async fn shutdown_signal_stops_the_poller() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 3);

    let h = spawn_one(fs, "a.txt", Duration::from_secs(3600));
    let _ = h.shutdown_tx.send(true);
    with_timeout(h.handle).await.unwrap();
}

#[tokio::test]
async fn poller_exits_when_runtime_channel_is_closed() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 3);

    let Harness {
        fs,
        rx,
        shutdown_tx,
        handle,
    } = spawn_one(fs, "a.txt", TICK);
    drop(rx);

    fs.update_file("a.txt", |s| s.size = 10);
    with_timeout(handle).await.unwrap();
    drop(shutdown_tx);
}

#[tokio::test]
async fn each_path_keeps_its_own_baseline() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 1);
    fs.add_file("b.txt", 1);

    let (tx, mut rx) = mpsc::channel(16);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let dyn_fs: Arc<dyn FileSystem> = Arc::new(fs.clone());

    let entries = vec![
        WatchedEntry {
            path: PathBuf::from("a.txt"),
            baseline: pollwatch::watch::Baseline::new(Some(fs.stat("a.txt".as_ref()).unwrap())),
        },
        WatchedEntry {
            path: PathBuf::from("b.txt"),
            baseline: pollwatch::watch::Baseline::new(Some(fs.stat("b.txt".as_ref()).unwrap())),
        },
    ];
    let handles = pollwatch::watch::spawn_pollers(entries, TICK, dyn_fs, tx, shutdown_rx);

    fs.update_file("b.txt", |s| s.size = 2);
    let events = drain_bounded(&mut rx, TICK * 10).await;
    assert_eq!(events, vec![changed("b.txt", ChangeKind::Modified)]);

    let _ = shutdown_tx.send(true);
    for handle in handles {
        with_timeout(handle).await.unwrap();
    }
}
