use digest::Digest;

use super::StrongDigest;

/// The checksum-seed treatment applied to an [`Md5`] digest.
///
/// rsync mixes its per-session checksum seed into per-block strong digests by
/// appending it, as four little-endian bytes, after the block data and before
/// finalizing the hash. [`Md5Seed::none`] reproduces the unseeded whole-file
/// digest rsync computes for protocols older than 30; [`Md5Seed::proper`]
/// reproduces the per-block seeding used from protocol 30 onward.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Md5Seed {
    /// No seed bytes are appended; the digest is a plain MD5 of the fed data.
    #[default]
    None,
    /// The seed's four little-endian bytes are appended before finalizing.
    Proper(u32),
}

impl Md5Seed {
    /// No checksum seed is mixed into the digest.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// The checksum seed is mixed in after the fed data, rsync-style.
    #[must_use]
    pub const fn proper(seed: u32) -> Self {
        Self::Proper(seed)
    }
}

/// Streaming MD5 hasher used by rsync when backward compatibility demands it.
#[derive(Clone, Debug)]
pub struct Md5 {
    inner: md5::Md5,
    seed: Md5Seed,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Creates an unseeded hasher with an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: md5::Md5::new(),
            seed: Md5Seed::None,
        }
    }

    /// Creates a hasher that mixes `seed` in before finalizing, rsync-style.
    #[must_use]
    pub fn with_checksum_seed(seed: Md5Seed) -> Self {
        Self {
            inner: md5::Md5::new(),
            seed,
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalises the digest and returns the 128-bit MD5 output.
    #[must_use]
    pub fn finalize(mut self) -> [u8; 16] {
        if let Md5Seed::Proper(seed) = self.seed {
            self.inner.update(seed.to_le_bytes());
        }
        self.inner.finalize().into()
    }

    /// Convenience helper that computes the unseeded MD5 digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> [u8; 16] {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl StrongDigest for Md5 {
    type Seed = Md5Seed;
    type Digest = [u8; 16];
    const DIGEST_LEN: usize = 16;

    fn with_seed(seed: Self::Seed) -> Self {
        Md5::with_checksum_seed(seed)
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> Self::Digest {
        Md5::finalize(self)
    }
}
