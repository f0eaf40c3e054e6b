//! The delta instruction stream (the in-memory half of component C9).
//!
//! `DeltaToken`/`DeltaScript` are the value types the matcher produces and
//! the patcher consumes; the wire-level run-length fusion the protocol
//! crate's token codec performs when serialising a run of consecutive
//! [`DeltaToken::Copy`] entries happens one layer up from here, so every
//! matched block appears here as its own token.

/// One instruction in a delta script: either literal bytes the sender must
/// transmit, or a reference to a block already present in the basis file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeltaToken {
    /// Bytes with no match in the basis signature; transmitted verbatim.
    Literal(Vec<u8>),
    /// A reference to block `index` of the basis file, `len` bytes long.
    Copy {
        /// Index of the matched block in the basis signature.
        index: u64,
        /// Number of bytes the matched block covers.
        len: usize,
    },
}

impl DeltaToken {
    /// Number of output bytes this token contributes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Literal(bytes) => bytes.len(),
            Self::Copy { len, .. } => *len,
        }
    }

    /// Whether this token carries literal bytes rather than a block copy.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// A complete delta: the ordered tokens needed to reconstruct a target from
/// a basis file, plus precomputed byte accounting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeltaScript {
    tokens: Vec<DeltaToken>,
    total_bytes: u64,
    literal_bytes: u64,
}

impl DeltaScript {
    /// Builds a script from its tokens and precomputed byte counts.
    #[must_use]
    pub fn new(tokens: Vec<DeltaToken>, total_bytes: u64, literal_bytes: u64) -> Self {
        Self {
            tokens,
            total_bytes,
            literal_bytes,
        }
    }

    /// The ordered instruction list.
    #[must_use]
    pub fn tokens(&self) -> &[DeltaToken] {
        &self.tokens
    }

    /// Consumes the script, returning its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<DeltaToken> {
        self.tokens
    }

    /// Total reconstructed output length in bytes.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Bytes carried as literal data rather than copied from the basis.
    #[must_use]
    pub const fn literal_bytes(&self) -> u64 {
        self.literal_bytes
    }

    /// Bytes reconstructed by copying from the basis file.
    #[must_use]
    pub const fn copy_bytes(&self) -> u64 {
        self.total_bytes - self.literal_bytes
    }

    /// Whether the script carries no instructions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
