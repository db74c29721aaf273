// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/hardware/cores.rs
// Version: 0.3.0
//
// This file implements physical CPU core detection for hashmark, located in
// the hardware subdirectory. The multi-threaded benchmark phase spawns one
// worker per physical core; hyperthread siblings share execution units and
// would not add real hashing throughput.
//
// Tree Location:
// - src/hardware/cores.rs (physical core detection)
// - Depends on: num_cpus

#[cfg(target_os = "linux")]
use std::collections::HashSet;
use tracing::debug;

const LOG_TARGET: &str = "hashmark::hardware";

/// A source of physical core counts.
///
/// Implementations return `None` when their query is unavailable or yields
/// nothing usable; callers fall back to the next detector in the chain. The
/// public entry point [`physical_core_count`] guarantees the final answer is
/// never zero.
pub trait CoreCounter {
    fn physical_cores(&self) -> Option<usize>;
}

/// Linux topology detector: enumerates distinct (physical id, core id)
/// pairs from /proc/cpuinfo, so hyperthread siblings collapse into one core
/// and multi-socket systems are counted across all packages.
#[cfg(target_os = "linux")]
struct CpuinfoTopology;

#[cfg(target_os = "linux")]
impl CoreCounter for CpuinfoTopology {
    fn physical_cores(&self) -> Option<usize> {
        let cpuinfo = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        parse_cpuinfo_cores(&cpuinfo)
    }
}

/// Portable detector backed by the num_cpus topology query.
struct PlatformQuery;

impl CoreCounter for PlatformQuery {
    fn physical_cores(&self) -> Option<usize> {
        match num_cpus::get_physical() {
            0 => None,
            n => Some(n),
        }
    }
}

/// Count distinct physical cores in /proc/cpuinfo text.
///
/// Returns `None` when the text carries no `core id` records (some ARM and
/// container environments), signalling the caller to fall back.
#[cfg(target_os = "linux")]
fn parse_cpuinfo_cores(cpuinfo: &str) -> Option<usize> {
    let mut cores: HashSet<(u32, u32)> = HashSet::new();
    let mut physical_id = 0u32;

    for line in cpuinfo.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            // A "processor" record starts a new logical CPU block; "physical
            // id" (the socket) precedes "core id" within a block.
            "processor" => physical_id = 0,
            "physical id" => physical_id = value.parse().ok()?,
            "core id" => {
                let core_id: u32 = value.parse().ok()?;
                cores.insert((physical_id, core_id));
            }
            _ => {}
        }
    }

    if cores.is_empty() { None } else { Some(cores.len()) }
}

/// Detector chain in preference order, built once per query. Only the
/// Linux chain carries the cpuinfo detector; every platform ends with the
/// portable query.
fn detector_chain() -> Vec<Box<dyn CoreCounter>> {
    let mut chain: Vec<Box<dyn CoreCounter>> = Vec::new();
    #[cfg(target_os = "linux")]
    chain.push(Box::new(CpuinfoTopology));
    chain.push(Box::new(PlatformQuery));
    chain
}

/// Number of physical CPU cores, never zero.
///
/// Walks the detector chain, taking the first answer, then falls back to
/// logical concurrency. Detection failure is recovered here and never
/// surfaced to callers.
pub fn physical_core_count() -> usize {
    let count = detector_chain()
        .iter()
        .find_map(|detector| detector.physical_cores())
        .unwrap_or_else(num_cpus::get)
        .max(1);
    debug!(target: LOG_TARGET, "Detected {} physical cores", count);
    count
}



// Changelog:
// - v0.3.0 (2025-08-25): Gated the cpuinfo parser to Linux builds and made
//   the detector chain try each branch exactly once.
// - v0.2.0 (2025-08-25): Count (physical id, core id) pairs instead of bare
//   core ids, fixing undercounting on multi-socket machines.
// - v0.1.0: Initial /proc/cpuinfo detector with num_cpus fallback chain.
