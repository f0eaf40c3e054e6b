//! Tunables for delta generation that spec.md's data model leaves implicit.
use std::num::NonZeroUsize;

/// Chunk length upstream rsync calls `CHUNK_SIZE`: the longest run of
/// unmatched bytes flushed as a single [`crate::DeltaToken::Literal`] before a
/// fresh token is started.
const DEFAULT_LITERAL_CHUNK_SIZE: usize = 32 * 1024;

/// Knobs for [`crate::DeltaGenerator`] beyond the read buffer length.
///
/// The core takes no ambient configuration; every tunable here is an
/// explicit, immutable-after-construction field passed into the generator
/// that needs it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatcherConfig {
    literal_chunk_size: NonZeroUsize,
    max_literal_bytes: Option<u64>,
}

impl MatcherConfig {
    /// Builds a config with an explicit literal-flush chunk size and an
    /// optional cap on the total literal bytes a single delta may contain.
    #[must_use]
    pub const fn new(literal_chunk_size: NonZeroUsize, max_literal_bytes: Option<u64>) -> Self {
        Self {
            literal_chunk_size,
            max_literal_bytes,
        }
    }

    /// Longest run of unmatched bytes packed into one literal token.
    #[must_use]
    pub const fn literal_chunk_size(&self) -> NonZeroUsize {
        self.literal_chunk_size
    }

    /// Upper bound on total literal bytes a delta may contain, if any.
    ///
    /// Exceeding this surfaces as [`crate::MatchError::ResourceLimit`]
    /// instead of silently allocating an unbounded literal run, per spec
    /// §7's resource-limit guard.
    #[must_use]
    pub const fn max_literal_bytes(&self) -> Option<u64> {
        self.max_literal_bytes
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            literal_chunk_size: NonZeroUsize::new(DEFAULT_LITERAL_CHUNK_SIZE)
                .expect("default literal chunk size is non-zero"),
            max_literal_bytes: None,
        }
    }
}
