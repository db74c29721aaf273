// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 0.3.0
//
// This file serves as the main library entry point for hashmark, located at
// the root of the source tree. It exports all public modules and types that
// the benchmark binary and integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: benchmark, core, hardware, utils

pub mod benchmark;
pub mod core;
pub mod hardware;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::runner::{BenchmarkConfig, BenchmarkRunner};
pub use crate::core::types::{AggregateResult, BenchmarkResult, HashmarkError};
pub use crate::hardware::physical_core_count;
pub use crate::utils::format::FormatUtils;

pub type Result<T> = std::result::Result<T, HashmarkError>;

// Changelog:
// - v0.3.0 (2025-08-25): Switched crate Result alias to HashmarkError.
//   - Thread spawn and worker join failures now carry structured context
//     instead of a boxed trait object.
// - v0.1.0: Initial modular layout: benchmark, core, hardware, utils.
