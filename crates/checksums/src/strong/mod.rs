//! Strong checksum implementations backed by well-known hash algorithms.
//!
//! Upstream rsync negotiates the strong checksum algorithm based on the protocol
//! version and compile-time feature set. This module exposes streaming wrappers
//! for MD4, MD5, XXH64, XXH3/64, and XXH3/128 so higher layers can compose the
//! desired strategy without reimplementing the hashing primitives.

mod batch;
mod md4;
mod md5;
#[cfg(feature = "openssl")]
mod openssl_support;
mod sha1;
mod sha256;
mod sha512;
pub mod strategy;
mod xxhash;

pub use batch::{md4_digest_batch, md5_digest_batch};
pub use md4::Md4;
pub use md5::{Md5, Md5Seed};
#[cfg(feature = "openssl")]
pub use openssl_support::openssl_acceleration_available;
#[cfg(not(feature = "openssl"))]
#[inline]
pub const fn openssl_acceleration_available() -> bool {
    false
}
pub use sha1::Sha1;
pub use sha256::Sha256;
pub use sha512::Sha512;
pub use strategy::{
    ChecksumAlgorithmKind, ChecksumDigest, ChecksumStrategy, ChecksumStrategySelector, Md4Strategy,
    Md5SeedConfig, Md5Strategy, Sha1Strategy, Sha256Strategy, Sha512Strategy, SeedConfig,
    Xxh3Strategy, Xxh3_128Strategy, Xxh64Strategy,
};
pub use xxhash::{Xxh3, Xxh3_128, Xxh64, xxh3_simd_available};

/// Trait implemented by strong checksum algorithms used by rsync.
///
/// Implementors provide a streaming interface that mirrors upstream rsync's
/// usage: callers feed data incrementally via [`Self::update`] and then obtain
/// the final digest through [`Self::finalize`]. The associated
/// [`DIGEST_LEN`](Self::DIGEST_LEN) constant exposes the byte width of the
/// resulting hash so higher layers can size buffers without hard-coding
/// algorithm-specific knowledge.
///
/// # Examples
///
/// Compute an MD5 digest through the trait without depending on the concrete
/// hasher type.
///
/// ```
/// use checksums::strong::{Md5, StrongDigest};
///
/// let mut hasher = Md5::new();
/// hasher.update(b"example");
/// let digest = hasher.finalize();
/// assert_eq!(digest.as_ref().len(), Md5::DIGEST_LEN);
/// ```
pub trait StrongDigest: Sized {
    /// Type used to parameterise a new digest instance.
    type Seed: Default;

    /// Type returned when finalising the digest.
    type Digest: AsRef<[u8]> + Copy;

    /// Length of the final digest in bytes.
    const DIGEST_LEN: usize;

    /// Creates a new hasher with an empty state.
    fn new() -> Self {
        Self::with_seed(Default::default())
    }

    /// Creates a new hasher using the provided seed value.
    fn with_seed(seed: Self::Seed) -> Self;

    /// Feeds additional bytes into the digest state.
    fn update(&mut self, data: &[u8]);

    /// Finalises the digest and returns the resulting hash.
    fn finalize(self) -> Self::Digest;

    /// Convenience helper that hashes `data` in a single call.
    fn digest(data: &[u8]) -> Self::Digest {
        Self::digest_with_seed(Default::default(), data)
    }

    /// Convenience helper that hashes `data` using an explicit seed value.
    fn digest_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Digest {
        let mut hasher = Self::with_seed(seed);
        hasher.update(data);
        hasher.finalize()
    }
}
