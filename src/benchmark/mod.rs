// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 0.1.0
//
// This file declares the benchmark module of hashmark. It provides the
// timed hashing workload and the single/multi-threaded execution engine
// that drives it and aggregates per-thread results.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: runner, workload

pub mod runner;
pub mod workload;

// Re-export key benchmark types and functions
pub use runner::{BenchmarkConfig, BenchmarkRunner, Workload};
pub use workload::{run_workload, DEFAULT_WORKLOAD_SECS};
