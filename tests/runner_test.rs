// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/runner_test.rs
// Version: 0.3.0
//
// This file tests the benchmark execution engine: aggregation invariants
// with deterministic stub workloads, per-thread slot attribution, argument
// validation, and short real runs of both phases.
//
// Tree Location:
// - tests/runner_test.rs (runner aggregation tests)
// - Depends on: benchmark/runner, core/types

use hashmark::{BenchmarkRunner, HashmarkError};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

#[test]
fn test_stub_workload_aggregates_exactly() {
    // 4 threads x 100 hashes over a nominal 1s window: 400 H/s exactly
    let runner = BenchmarkRunner::new(1);
    let aggregate = runner
        .run_multi_threaded_with(4, Arc::new(|_, _| 100))
        .unwrap();

    assert_eq!(aggregate.total_hash_count, 400);
    assert_eq!(aggregate.hashrate, 400.0);
    assert_eq!(aggregate.results.len(), 4);
}

#[test]
fn test_total_is_exact_sum_of_per_thread_counts() {
    let runner = BenchmarkRunner::new(1);
    let aggregate = runner
        .run_multi_threaded_with(8, Arc::new(|thread_id, _| (thread_id as u64 + 1) * 10))
        .unwrap();

    let sum: u64 = aggregate.results.iter().map(|r| r.hash_count).sum();
    assert_eq!(aggregate.total_hash_count, sum);
    // 10 + 20 + ... + 80
    assert_eq!(aggregate.total_hash_count, 360);
}

#[test]
fn test_each_worker_writes_its_own_slot() {
    // A workload whose result encodes the thread id proves counts are
    // neither lost, duplicated, nor attributed to the wrong slot
    let runner = BenchmarkRunner::new(1);
    let aggregate = runner
        .run_multi_threaded_with(6, Arc::new(|thread_id, _| 1000 + thread_id as u64))
        .unwrap();

    for (expected_id, result) in aggregate.results.iter().enumerate() {
        assert_eq!(result.thread_id, expected_id);
        assert_eq!(result.hash_count, 1000 + expected_id as u64);
    }
}

#[test]
fn test_single_threaded_stub_rate() {
    let runner = BenchmarkRunner::new(2);
    let aggregate = runner.run_single_threaded_with(Arc::new(|_, _| 500));

    assert_eq!(aggregate.total_hash_count, 500);
    assert_eq!(aggregate.hashrate, 250.0);
    assert_eq!(aggregate.results.len(), 1);
}

#[test]
fn test_stub_rate_respects_nominal_duration() {
    // Rate divides by the requested duration, not measured elapsed time,
    // so a stub that returns instantly still yields an exact figure
    let runner = BenchmarkRunner::new(5);
    let aggregate = runner
        .run_multi_threaded_with(2, Arc::new(|_, _| 50))
        .unwrap();

    assert_eq!(aggregate.total_hash_count, 100);
    assert_eq!(aggregate.hashrate, 20.0);
    assert_eq!(aggregate.duration, Duration::from_secs(5));
}

#[test]
fn test_panicking_worker_is_fatal_not_a_hang() {
    // A dying worker must abort the run with WorkerPanicked; the
    // coordinator may not wait forever on a completion signal that the
    // unwound thread would otherwise never send. Run on a helper thread
    // with a timeout so a regression fails fast instead of hanging the
    // suite.
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let runner = BenchmarkRunner::new(1);
        let result = runner.run_multi_threaded_with(
            2,
            Arc::new(|thread_id, _| {
                if thread_id == 1 {
                    panic!("injected worker failure");
                }
                100
            }),
        );
        let _ = tx.send(result);
    });

    let result = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("coordinator must return when a worker panics");
    let err = result.unwrap_err();
    assert!(matches!(err, HashmarkError::WorkerPanicked { thread_id: 1 }));
}

#[test]
fn test_zero_threads_rejected() {
    let runner = BenchmarkRunner::new(1);
    let err = runner.run_multi_threaded(0).unwrap_err();
    assert!(matches!(err, HashmarkError::InvalidThreadCount));
}

#[test]
fn test_short_real_run_single_threaded() {
    let runner = BenchmarkRunner::with_duration(Duration::from_millis(200));
    let aggregate = runner.run_single_threaded();

    assert!(aggregate.total_hash_count > 0);
    assert!(aggregate.hashrate > 0.0);
}

#[test]
fn test_short_real_run_multi_threaded() {
    let runner = BenchmarkRunner::with_duration(Duration::from_millis(200));
    let aggregate = runner.run_multi_threaded(2).unwrap();

    assert_eq!(aggregate.results.len(), 2);
    assert!(aggregate.total_hash_count > 0);
    // Every worker ran for the full window; none should report zero
    for result in &aggregate.results {
        assert!(result.hash_count > 0, "thread {} recorded no hashes", result.thread_id);
    }
}

#[test]
fn test_stub_workload_sees_configured_duration() {
    // Workers receive the nominal duration, not some derived slice of it
    let runner = BenchmarkRunner::with_duration(Duration::from_millis(750));
    let aggregate = runner
        .run_multi_threaded_with(3, Arc::new(|_, duration| duration.as_millis() as u64))
        .unwrap();

    assert_eq!(aggregate.total_hash_count, 3 * 750);
}

// Changelog:
// - v0.3.0 (2025-08-25): Added panicking-worker fatal-path test.
// - v0.2.0 (2025-08-25): Added slot attribution and nominal-duration tests.
// - v0.1.0: Initial stub aggregation and validation tests.
