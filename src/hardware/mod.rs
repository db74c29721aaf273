// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/hardware/mod.rs
// Version: 0.1.0
//
// This file is the module declaration for platform resource discovery in
// hashmark, located in the hardware subdirectory. It declares the core
// detection submodule used to size the multi-threaded benchmark phase.
//
// Tree Location:
// - src/hardware/mod.rs (hardware module entry point)
// - Submodules: cores

pub mod cores;

pub use cores::{physical_core_count, CoreCounter};
