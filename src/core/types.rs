// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 0.3.0
//
// This file defines core data structures for hashmark, located in the core
// subdirectory. It includes the command-line arguments, the per-thread and
// aggregate benchmark results, and the crate error type.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, thiserror

use clap::Parser;
use std::time::Duration;
use thiserror::Error;

/// Command-line arguments for the hashmark benchmark
#[derive(Parser, Debug)]
#[command(
    name = "hashmark",
    version,
    about = "CPU hash throughput benchmark (single- and multi-threaded)",
    long_about = "hashmark measures sustained SHA-256 throughput of the local machine.\n\
                  It runs two phases: a single-threaded run on the calling thread, then\n\
                  a multi-threaded run with one worker per physical CPU core.\n\n\
                  Examples:\n\
                    Default run:      hashmark\n\
                    Fixed threads:    hashmark --threads 8\n\
                    Longer sampling:  hashmark --duration 30"
)]
pub struct Args {
    /// Number of worker threads for the multi-threaded phase
    /// 0 = auto-detect (one worker per physical core)
    #[arg(
        short,
        long,
        default_value = "0",
        value_name = "COUNT",
        help = "Number of worker threads (0 = one per physical core)"
    )]
    pub threads: usize,

    /// Wall-clock duration of each benchmark phase, in seconds
    #[arg(
        short,
        long,
        default_value = "5",
        value_name = "SECONDS",
        help = "Duration of each benchmark phase in seconds"
    )]
    pub duration: u64,
}

impl Args {
    /// Validate argument combinations before running.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.duration == 0 {
            return Err("benchmark duration must be greater than zero seconds".to_string());
        }
        Ok(())
    }
}

/// Hash count recorded by a single worker thread. Created once the worker's
/// slot is finalized; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub thread_id: usize,
    pub hash_count: u64,
}

/// Outcome of a completed benchmark phase.
///
/// `total_hash_count` is always the exact sum of the per-thread counts in
/// `results`, and `hashrate` is that total divided by the nominal phase
/// duration in seconds.
#[derive(Debug, Clone)]
pub struct AggregateResult {
    pub total_hash_count: u64,
    pub duration: Duration,
    pub hashrate: f64,
    pub results: Vec<BenchmarkResult>,
}

/// Errors surfaced by the benchmark harness.
///
/// Core-count detection failures never reach this type: the detector
/// recovers locally by falling back to logical concurrency. The conditions
/// below are fatal for the whole run, since completing with fewer workers
/// than requested would silently change what the benchmark measures.
#[derive(Debug, Error)]
pub enum HashmarkError {
    #[error("multi-threaded run requires at least one worker thread")]
    InvalidThreadCount,

    #[error("failed to spawn worker thread {thread_id}: {source}")]
    ThreadSpawn {
        thread_id: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("worker thread {thread_id} panicked before finishing its workload")]
    WorkerPanicked { thread_id: usize },
}


// Changelog:
// - v0.3.0 (2025-08-25): Added HashmarkError with thiserror.
//   - Thread spawn failures now carry the originating io::Error.
// - v0.2.0: Added clap Args with threads/duration flags and validation.
// - v0.1.0: Initial BenchmarkResult and AggregateResult types.
