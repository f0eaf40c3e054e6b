//! Strong checksum algorithm selection (component C1 consumer).
//!
//! Each variant maps directly onto a primitive exposed by
//! [`checksums::strong`]; this crate adds no seeding behavior beyond what
//! those primitives already provide.

use checksums::strong::{Md4, Md5, Md5Seed, Sha1, Sha256, Sha512, StrongDigest, Xxh3, Xxh3_128, Xxh64};

use crate::error::SignatureError;

/// A strong-checksum algorithm a signature (or delta matcher) can use for
/// its per-block digests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SignatureAlgorithm {
    /// MD4, upstream's default for protocols older than 30.
    Md4,
    /// MD5, upstream's default for protocols 30 and 31.
    Md5 {
        /// Whether the checksum seed is mixed into each block's digest.
        seed_config: Md5Seed,
    },
    /// SHA-1.
    Sha1,
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
    /// 64-bit xxHash.
    Xxh64 {
        /// Session checksum seed.
        seed: u64,
    },
    /// 64-bit xxHash3.
    Xxh3 {
        /// Session checksum seed.
        seed: u64,
    },
    /// 128-bit xxHash3.
    Xxh3_128 {
        /// Session checksum seed.
        seed: u64,
    },
}

impl SignatureAlgorithm {
    /// Number of bytes this algorithm's native digest produces, before any
    /// truncation to a layout's strong-checksum length.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Md4 => 16,
            Self::Md5 { .. } => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
            Self::Xxh64 { .. } | Self::Xxh3 { .. } => 8,
            Self::Xxh3_128 { .. } => 16,
        }
    }

    /// Computes the full-width native digest of `data`.
    fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md4 => <Md4 as StrongDigest>::digest(data).to_vec(),
            Self::Md5 { seed_config } => {
                <Md5 as StrongDigest>::digest_with_seed(seed_config, data).to_vec()
            }
            Self::Sha1 => <Sha1 as StrongDigest>::digest(data).to_vec(),
            Self::Sha256 => <Sha256 as StrongDigest>::digest(data).to_vec(),
            Self::Sha512 => <Sha512 as StrongDigest>::digest(data).to_vec(),
            Self::Xxh64 { seed } => <Xxh64 as StrongDigest>::digest_with_seed(seed, data).to_vec(),
            Self::Xxh3 { seed } => <Xxh3 as StrongDigest>::digest_with_seed(seed, data).to_vec(),
            Self::Xxh3_128 { seed } => {
                <Xxh3_128 as StrongDigest>::digest_with_seed(seed, data).to_vec()
            }
        }
    }

    /// Computes `data`'s strong digest truncated to `strong_sum_length`
    /// bytes, as stored in a [`crate::SignatureBlock`].
    ///
    /// Exposed beyond this crate so callers verifying a weak-checksum hit
    /// against a signature (the delta matcher) can recompute the same
    /// truncated digest without duplicating the algorithm dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::DigestLengthMismatch`] if the algorithm's
    /// native digest is narrower than `strong_sum_length`.
    pub fn truncated_digest(
        self,
        data: &[u8],
        strong_sum_length: usize,
    ) -> Result<Vec<u8>, SignatureError> {
        let mut digest = self.digest(data);
        let native_len = digest.len();
        if native_len < strong_sum_length {
            return Err(SignatureError::DigestLengthMismatch {
                requested: strong_sum_length,
                actual: native_len,
            });
        }
        digest.truncate(strong_sum_length);
        Ok(digest)
    }
}
