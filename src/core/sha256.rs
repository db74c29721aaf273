// hashmark - Free and Open Source Software Statement
//
// This project, hashmark, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/sha256.rs
// Version: 0.1.0
//
// This file wraps the SHA-256 digest primitive used as the CPU-bound
// workload for the benchmark, located in the core subdirectory. The digest
// is a black box to the rest of the crate: input bytes in, 32 bytes out.
//
// Tree Location:
// - src/core/sha256.rs (hashing primitive)
// - Depends on: sha2 crate

use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Compute the SHA-256 digest of `input`.
pub fn sha256_digest(input: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}
