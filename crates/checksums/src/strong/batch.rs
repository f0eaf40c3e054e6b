//! Batch digest helpers for hashing many independent inputs.
//!
//! Upstream rsync's file-list pass hashes many small buffers (e.g. one per
//! candidate file) back to back; these helpers give callers a single entry
//! point for that pattern instead of hand-rolling the loop, while remaining
//! exactly equivalent to calling the per-input digest function in sequence.

use super::{Md4, Md5};

/// Computes the MD4 digest of each input in `inputs`, in order.
///
/// Equivalent to `inputs.iter().map(|d| Md4::digest(d)).collect()`.
#[must_use]
pub fn md4_digest_batch<T: AsRef<[u8]>>(inputs: &[T]) -> Vec<[u8; 16]> {
    inputs.iter().map(|data| Md4::digest(data.as_ref())).collect()
}

/// Computes the MD5 digest of each input in `inputs`, in order.
///
/// Equivalent to `inputs.iter().map(|d| Md5::digest(d)).collect()`.
#[must_use]
pub fn md5_digest_batch<T: AsRef<[u8]>>(inputs: &[T]) -> Vec<[u8; 16]> {
    inputs.iter().map(|data| Md5::digest(data.as_ref())).collect()
}
