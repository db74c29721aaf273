// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 0.3.1
//
// This file implements the benchmark execution engine of hashmark. It
// drives the single-threaded phase on the calling thread and coordinates
// the multi-threaded phase: one worker per requested thread, per-worker
// count slots, a condition-variable completion barrier, and aggregation of
// all slots into one throughput figure.
//
// Tree Location:
// - src/benchmark/runner.rs (benchmark execution engine)
// - Depends on: benchmark/workload, core/types, utils/format

use crate::benchmark::workload::{run_workload, DEFAULT_WORKLOAD_SECS};
use crate::core::types::{AggregateResult, BenchmarkResult, HashmarkError};
use crate::utils::format::FormatUtils;
use crate::Result;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Condvar, Mutex,
};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

const LOG_TARGET: &str = "hashmark::runner";

/// A unit of timed work: (thread_id, duration) -> completed hash count.
///
/// Production phases use [`run_workload`]; tests inject deterministic stubs
/// to verify aggregation without real timed hashing.
pub type Workload = Arc<dyn Fn(usize, Duration) -> u64 + Send + Sync>;

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub duration: Duration,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(DEFAULT_WORKLOAD_SECS),
        }
    }
}

/// Main benchmark runner
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

/// Signals worker completion on drop.
///
/// Each worker holds one of these for the lifetime of its workload, so the
/// completed counter is incremented and the coordinator woken even when the
/// workload panics and the thread unwinds. Without this the coordinator
/// would wait on the condvar forever and the panic could never surface at
/// join.
struct CompletionGuard {
    completion: Arc<(Mutex<usize>, Condvar)>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let (completed, cvar) = &*self.completion;
        // This drop can run during unwind; a second panic here would abort
        // the process, so recover the guard from a poisoned mutex instead
        // of unwrapping.
        let mut completed = completed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *completed += 1;
        cvar.notify_one();
    }
}

impl BenchmarkRunner {
    pub fn new(duration_secs: u64) -> Self {
        Self {
            config: BenchmarkConfig {
                duration: Duration::from_secs(duration_secs),
            },
        }
    }

    /// Runner with an arbitrary (possibly sub-second) phase duration.
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            config: BenchmarkConfig { duration },
        }
    }

    /// Run the workload once on the calling thread and report the rate.
    ///
    /// This phase has no error path: the digest primitive is infallible and
    /// no threads are spawned.
    pub fn run_single_threaded(&self) -> AggregateResult {
        self.run_single_threaded_with(Arc::new(run_workload))
    }

    pub fn run_single_threaded_with(&self, workload: Workload) -> AggregateResult {
        info!(target: LOG_TARGET,
            "🧵 [single-threaded] Starting {}s run...",
            self.config.duration.as_secs_f64()
        );

        let hash_count = workload(0, self.config.duration);
        let aggregate = self.aggregate(vec![BenchmarkResult {
            thread_id: 0,
            hash_count,
        }]);

        info!(target: LOG_TARGET,
            "✅ [single-threaded] Completed. Hashes: {}, Hash rate: {}",
            FormatUtils::format_count(aggregate.total_hash_count),
            FormatUtils::format_hashrate(aggregate.hashrate)
        );
        aggregate
    }

    /// Run `n_threads` workers concurrently and report the combined rate.
    ///
    /// Each worker owns one count slot; completion is signalled through a
    /// mutex-guarded counter and condition variable, and every worker is
    /// joined before this function returns. A spawn failure or worker panic
    /// is fatal for the run: finishing with fewer workers than requested
    /// would silently change what the benchmark measures.
    pub fn run_multi_threaded(&self, n_threads: usize) -> Result<AggregateResult> {
        self.run_multi_threaded_with(n_threads, Arc::new(run_workload))
    }

    pub fn run_multi_threaded_with(
        &self,
        n_threads: usize,
        workload: Workload,
    ) -> Result<AggregateResult> {
        if n_threads == 0 {
            return Err(HashmarkError::InvalidThreadCount);
        }

        info!(target: LOG_TARGET,
            "🧵 [multi-threaded] Starting {}s run with {} threads...",
            self.config.duration.as_secs_f64(),
            n_threads
        );

        // One slot per worker. Worker i stores only into slot i, so the
        // counters themselves need no locking; the coordinator reads them
        // only after the completion barrier.
        let slots: Arc<Vec<AtomicU64>> =
            Arc::new((0..n_threads).map(|_| AtomicU64::new(0)).collect());
        let completion = Arc::new((Mutex::new(0usize), Condvar::new()));
        let duration = self.config.duration;

        let mut handles = Vec::with_capacity(n_threads);
        for thread_id in 0..n_threads {
            let slots = Arc::clone(&slots);
            let completion = Arc::clone(&completion);
            let workload = Arc::clone(&workload);

            let handle = thread::Builder::new()
                .name(format!("hasher-{}", thread_id))
                .spawn(move || {
                    // Declared before the workload runs so completion is
                    // signalled on unwind as well as on normal return.
                    let _guard = CompletionGuard { completion };

                    let hash_count = workload(thread_id, duration);
                    slots[thread_id].store(hash_count, Ordering::Release);
                    debug!(target: LOG_TARGET, "Thread {}: finished with {} hashes", thread_id, hash_count);
                })
                .map_err(|source| HashmarkError::ThreadSpawn { thread_id, source })?;
            handles.push(handle);
        }

        // Block until every worker has signalled completion. The predicate
        // is re-checked on every wake, which covers spurious wakeups; the
        // mutex keeps the completed-count increment and read untorn.
        {
            let (completed, cvar) = &*completion;
            let mut completed = completed.lock().unwrap();
            while *completed < n_threads {
                completed = cvar.wait(completed).unwrap();
            }
        }
        debug!(target: LOG_TARGET, "All {} workers signalled completion", n_threads);

        // Join every handle so no worker outlives this call, then report
        // the first panicked worker. A panic is fatal for the run: its slot
        // never held a full-duration count, so partial aggregation would
        // misrepresent throughput.
        let mut panicked: Option<usize> = None;
        for (thread_id, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(thread_id);
            }
        }
        if let Some(thread_id) = panicked {
            return Err(HashmarkError::WorkerPanicked { thread_id });
        }

        let results: Vec<BenchmarkResult> = slots
            .iter()
            .enumerate()
            .map(|(thread_id, slot)| BenchmarkResult {
                thread_id,
                hash_count: slot.load(Ordering::Acquire),
            })
            .collect();
        let aggregate = self.aggregate(results);

        info!(target: LOG_TARGET,
            "✅ [multi-threaded] Completed. Total hashes: {}, Overall hash rate: {}",
            FormatUtils::format_count(aggregate.total_hash_count),
            FormatUtils::format_hashrate(aggregate.hashrate)
        );
        Ok(aggregate)
    }

    /// Sum per-thread counts into a rate over the nominal phase duration.
    ///
    /// The nominal duration is used rather than measured elapsed time: the
    /// workload loop already bounds itself on the monotonic clock, and a
    /// fixed denominator keeps runs comparable across thread counts.
    fn aggregate(&self, results: Vec<BenchmarkResult>) -> AggregateResult {
        let total_hash_count: u64 = results.iter().map(|r| r.hash_count).sum();
        let hashrate = total_hash_count as f64 / self.config.duration.as_secs_f64();
        AggregateResult {
            total_hash_count,
            duration: self.config.duration,
            hashrate,
            results,
        }
    }
}

// Changelog:
// - v0.3.1 (2025-08-25): Panic-safe completion barrier.
//   - Workers signal the completed counter from a drop guard, so a
//     panicking workload still wakes the coordinator and the panic is
//     reported as WorkerPanicked after all handles are joined.
// - v0.3.0 (2025-08-25): Injectable Workload for deterministic testing.
//   - run_single_threaded_with / run_multi_threaded_with take the workload
//     as a parameter; production entry points pass run_workload.
//   - Thread spawn uses thread::Builder and surfaces failures as
//     HashmarkError::ThreadSpawn instead of panicking.
// - v0.2.0: Replaced shared atomic total with per-worker slots summed after
//   the completion barrier.
// - v0.1.0: Initial condvar-based completion barrier and join loop.
