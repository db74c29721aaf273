// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/workload.rs
// Version: 0.2.0
//
// This file implements the timed hashing workload for hashmark, located in
// the benchmark subdirectory. Each worker runs this loop independently; it
// touches no shared state, which is what makes multi-thread scaling
// race-free without per-iteration locking.
//
// Tree Location:
// - src/benchmark/workload.rs (timed hashing loop)
// - Depends on: core/sha256

use crate::core::sha256::sha256_digest;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Default wall-clock duration of a benchmark phase, in seconds.
pub const DEFAULT_WORKLOAD_SECS: u64 = 5;

/// Input bytes hashed by worker `thread_id`.
///
/// Each worker hashes a distinct byte sequence so no cross-thread caching
/// effect can inflate the measured rate.
pub fn workload_input(thread_id: usize) -> String {
    format!("hashmark-worker-{}", thread_id)
}

/// Hash the worker's input in a tight loop until `duration` has elapsed on
/// the monotonic clock, returning the number of completed digests.
///
/// The count reflects whatever finished before the duration boundary was
/// observed; the check has clock-resolution granularity, which is fine for
/// a throughput measurement over seconds.
pub fn run_workload(thread_id: usize, duration: Duration) -> u64 {
    let input = workload_input(thread_id);
    let input = input.as_bytes();
    let start = Instant::now();
    let mut hash_count = 0u64;

    while start.elapsed() < duration {
        black_box(sha256_digest(input));
        hash_count += 1;
    }

    hash_count
}


// Changelog:
// - v0.2.0 (2025-08-25): Routed the digest through std::hint::black_box so
//   release builds cannot elide the hashing loop.
// - v0.1.0: Initial timed SHA-256 loop with per-thread input strings.
