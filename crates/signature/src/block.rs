//! A single block entry within a [`crate::FileSignature`].

use checksums::RollingDigest;

/// One block's rolling and (possibly truncated) strong checksum.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignatureBlock {
    index: u64,
    rolling: RollingDigest,
    strong: Vec<u8>,
}

impl SignatureBlock {
    /// Reconstructs a block from its components, e.g. after decoding a
    /// sum-head entry off the wire.
    #[must_use]
    pub fn from_raw_parts(index: u64, rolling: RollingDigest, strong: Vec<u8>) -> Self {
        Self {
            index,
            rolling,
            strong,
        }
    }

    /// This block's position within the file, starting at zero.
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// The weak rolling checksum of the block's source bytes.
    #[must_use]
    pub const fn rolling(&self) -> RollingDigest {
        self.rolling
    }

    /// The (possibly truncated) strong digest bytes.
    #[must_use]
    pub fn strong(&self) -> &[u8] {
        &self.strong
    }

    /// Number of source bytes that contributed to this block.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rolling.len()
    }

    /// Whether this block covers zero source bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rolling.is_empty()
    }
}
