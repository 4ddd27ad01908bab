//! Stress tests for Strata.
//!
//! These harnesses drive a chunk list from several producer threads while
//! reader threads take snapshots, and check every snapshot they see.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use strata_core::{ChunkList, Record, Snapshot, TokenKind, TokenMode};

use crate::fixtures::chunks_are_packed;

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }

    /// Returns true if no operation failed.
    pub fn is_clean(&self) -> bool {
        self.failed_ops == 0
    }

    /// Prints a one-line summary, visible with `cargo test -- --nocapture`.
    pub fn print_summary(&self, name: &str) {
        println!("{name}: {self}");
    }
}

impl fmt::Display for StressTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ok in {:.1?} ({:.0} ops/s)",
            self.successful_ops, self.total_ops, self.duration, self.ops_per_second
        )
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Pushes per producer thread.
    pub operations: usize,
    /// Number of producer threads.
    pub producers: usize,
    /// Number of snapshot reader threads.
    pub readers: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 10_000,
            producers: 4,
            readers: 2,
        }
    }
}

/// The line producer `producer` pushes as its `i`th record.
///
/// Every line carries an IP, a path and a number so that any token kind
/// finds something.
pub fn stress_line(producer: usize, i: usize) -> String {
    format!(
        "worker{producer} request {i} from 10.{producer}.{}.{} for /srv/data/{}",
        i / 256 % 256,
        i % 256,
        i % 17
    )
}

/// Checks a snapshot's shape: packed chunks and a count that matches them.
pub fn snapshot_is_consistent<T>(snapshot: &Snapshot<T>) -> bool {
    let counted: usize = snapshot.chunks().iter().map(|chunk| chunk.len()).sum();
    chunks_are_packed(snapshot) && counted == snapshot.count()
}

/// Run a sequential push stress test.
pub fn stress_sequential_pushes<T>(list: &ChunkList<T>, config: &StressConfig) -> StressTestResult
where
    T: Record + 'static,
{
    let start = Instant::now();
    let mut successful = 0usize;
    let mut failed = 0usize;

    for i in 0..config.operations {
        if list.push(stress_line(0, i).as_bytes()) {
            successful += 1;
        } else {
            failed += 1;
        }
    }

    StressTestResult::new(successful, failed, start.elapsed())
}

/// Run a concurrent push stress test with no readers.
pub fn stress_concurrent_pushes<T>(list: Arc<ChunkList<T>>, config: &StressConfig) -> StressTestResult
where
    T: Record + 'static,
{
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let operations = config.operations;

    let start = Instant::now();

    let handles: Vec<_> = (0..config.producers)
        .map(|p| {
            let list = Arc::clone(&list);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);

            thread::spawn(move || {
                for i in 0..operations {
                    if list.push(stress_line(p, i).as_bytes()) {
                        successful.fetch_add(1, Ordering::Relaxed);
                    } else {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

/// Run producers and snapshot readers against one list.
///
/// Each snapshot a reader takes counts as one operation. It fails if its
/// chunks are not packed, or if its count is lower than the reader's
/// previous snapshot.
pub fn stress_push_and_snapshot<T>(list: Arc<ChunkList<T>>, config: &StressConfig) -> StressTestResult
where
    T: Record + 'static,
{
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let running = Arc::new(AtomicUsize::new(config.producers));
    let operations = config.operations;

    let start = Instant::now();

    let producers: Vec<_> = (0..config.producers)
        .map(|p| {
            let list = Arc::clone(&list);
            let running = Arc::clone(&running);
            thread::spawn(move || {
                for i in 0..operations {
                    list.push(stress_line(p, i).as_bytes());
                }
                running.fetch_sub(1, Ordering::SeqCst);
            })
        })
        .collect();

    let readers: Vec<_> = (0..config.readers)
        .map(|_| {
            let list = Arc::clone(&list);
            let running = Arc::clone(&running);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);
            thread::spawn(move || {
                let mut last_count = 0;
                loop {
                    let finished = running.load(Ordering::SeqCst) == 0;
                    let snapshot = list.plain_snapshot();
                    if snapshot_is_consistent(&snapshot) && snapshot.count() >= last_count {
                        successful.fetch_add(1, Ordering::Relaxed);
                    } else {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                    last_count = snapshot.count();
                    if finished {
                        break;
                    }
                }
            })
        })
        .collect();

    for handle in producers.into_iter().chain(readers) {
        handle.join().expect("Thread panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

/// Run producers while one reader takes tokenized snapshots.
///
/// A tokenized snapshot fails if its chunks are not packed or if it holds a
/// duplicate token. The list is left in token mode for `kind`.
pub fn stress_tokenized_snapshots<T>(
    list: Arc<ChunkList<T>>,
    kind: TokenKind,
    config: &StressConfig,
) -> StressTestResult
where
    T: Record + 'static,
{
    if list.token_mode() != TokenMode::On(kind) {
        list.toggle_tokenize(kind);
    }

    let done = Arc::new(AtomicBool::new(false));
    let operations = config.operations;

    let start = Instant::now();

    let producers: Vec<_> = (0..config.producers)
        .map(|p| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..operations {
                    list.push(stress_line(p, i).as_bytes());
                }
            })
        })
        .collect();

    let reader = {
        let list = Arc::clone(&list);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut successful = 0usize;
            let mut failed = 0usize;
            loop {
                let finished = done.load(Ordering::SeqCst);
                let snapshot = list.snapshot();
                let unique: HashSet<_> = snapshot.iter().map(|item| item.text()).collect();
                if snapshot_is_consistent(&snapshot) && unique.len() == snapshot.count() {
                    successful += 1;
                } else {
                    failed += 1;
                }
                if finished {
                    break;
                }
            }
            (successful, failed)
        })
    };

    for handle in producers {
        handle.join().expect("Thread panicked");
    }
    done.store(true, Ordering::SeqCst);
    let (successful, failed) = reader.join().expect("Thread panicked");

    StressTestResult::new(successful, failed, start.elapsed())
}
