// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 0.3.0
//
// This file is the module declaration for core functionality of hashmark,
// located in the core subdirectory. It declares the data types and the
// hashing primitive used by the benchmark phases.
//
// Tree Location:
// - src/core/mod.rs (core module entry point)
// - Submodules: sha256, types

pub mod sha256;
pub mod types;

pub use sha256::sha256_digest;
pub use types::{AggregateResult, Args, BenchmarkResult, HashmarkError};
