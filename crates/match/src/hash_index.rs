//! In-memory hash index over a basis file's signature blocks (component C4).
//!
//! Mirrors upstream rsync's `build_hash_table()`/`hash_search()` shape: blocks
//! are bucketed by their weak checksum so a scanning window can find
//! candidates in roughly constant time, with the strong checksum used to
//! reject false positives. Buckets keep entries in signature order so
//! within a bucket the lowest-index block is tried first unless the
//! caller's `want_i` hint asks for a specific one, matching the adjacent-
//! block preference `generate_delta` uses to keep contiguous basis regions
//! contiguous in the resulting script.

use rustc_hash::FxHashMap;
use signature::{FileSignature, SignatureAlgorithm};

use crate::error::MatchError;

#[derive(Clone, Debug)]
struct BlockEntry {
    strong: Vec<u8>,
    index: u64,
    len: usize,
}

/// A queryable index over a basis file's signature blocks.
///
/// Every block is indexed, including a final short (partial) block: spec
/// step 5 requires re-probing the tail of the input against the basis's
/// last block at its own shorter length `R`, so excluding it would make
/// that last block permanently unmatchable and force a trailing literal
/// even on an identical basis/input pair.
#[derive(Clone, Debug)]
pub struct DeltaSignatureIndex {
    algorithm: SignatureAlgorithm,
    block_length: usize,
    strong_length: usize,
    block_count: u64,
    buckets: FxHashMap<u32, Vec<BlockEntry>>,
}

impl DeltaSignatureIndex {
    /// Builds an index from every block `signature` describes.
    ///
    /// Returns `None` if the signature has no blocks at all (an empty
    /// basis file), since there is then nothing a scanning window could
    /// ever match.
    #[must_use]
    pub fn from_signature(signature: &FileSignature, algorithm: SignatureAlgorithm) -> Option<Self> {
        let layout = signature.layout();
        let block_length = layout.block_length().get() as usize;
        let strong_length = layout.strong_sum_length().get() as usize;

        let mut buckets: FxHashMap<u32, Vec<BlockEntry>> = FxHashMap::default();
        let mut block_count = 0u64;

        for block in signature.blocks() {
            buckets.entry(block.rolling().value()).or_default().push(BlockEntry {
                strong: block.strong().to_vec(),
                index: block.index(),
                len: block.len(),
            });
            block_count += 1;
        }

        if block_count == 0 {
            return None;
        }

        Some(Self {
            algorithm,
            block_length,
            strong_length,
            block_count,
            buckets,
        })
    }

    /// Nominal length of a full block; the final block may be shorter.
    #[must_use]
    pub const fn block_length(&self) -> usize {
        self.block_length
    }

    /// Number of strong-digest bytes stored per block.
    #[must_use]
    pub const fn strong_length(&self) -> usize {
        self.strong_length
    }

    /// Number of blocks this index covers, including a final short block.
    #[must_use]
    pub const fn block_count(&self) -> u64 {
        self.block_count
    }

    /// Looks up `window` (whose weak checksum is `weak`) against the index.
    ///
    /// Among candidates confirmed by the strong checksum, prefers the one
    /// at `want_i` (the block immediately following the previous match) if
    /// present, falling back to the first confirmed candidate in bucket
    /// (insertion) order. Candidates whose indexed length differs from
    /// `window`'s length are skipped: a match is only valid at the length
    /// it was indexed with (relevant for the final short block, whose
    /// length `R` differs from every other block's `block_length`).
    ///
    /// # Errors
    ///
    /// Propagates [`signature::SignatureError`] if recomputing `window`'s
    /// truncated strong digest fails.
    pub(crate) fn match_window(
        &self,
        weak: u32,
        window: &[u8],
        want_i: Option<u64>,
    ) -> Result<Option<(u64, usize)>, MatchError> {
        let Some(candidates) = self.buckets.get(&weak) else {
            return Ok(None);
        };

        let mut strong_cache: Option<Vec<u8>> = None;
        let mut first_match: Option<(u64, usize)> = None;

        for entry in candidates {
            if entry.len != window.len() {
                continue;
            }

            let strong = match &strong_cache {
                Some(strong) => strong,
                None => {
                    strong_cache = Some(self.algorithm.truncated_digest(window, self.strong_length)?);
                    strong_cache.as_ref().expect("just inserted")
                }
            };

            if strong.as_slice() == entry.strong.as_slice() {
                if want_i == Some(entry.index) {
                    return Ok(Some((entry.index, entry.len)));
                }
                if first_match.is_none() {
                    first_match = Some((entry.index, entry.len));
                }
            }
        }

        Ok(first_match)
    }
}
