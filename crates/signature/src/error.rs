//! Error types surfaced by signature layout and generation.

use thiserror::Error;

/// Failure modes for block-size/layout planning (component C2).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SignatureLayoutError {
    /// The file length exceeds `i64::MAX`, the hard limit rsync imposes on
    /// transferable file sizes.
    #[error("file length {length} exceeds the maximum supported size of i64::MAX bytes")]
    FileTooLarge {
        /// The offending file length.
        length: u64,
    },

    /// The chosen block length would require more blocks than fit in a
    /// 32-bit signed count.
    #[error(
        "file requires {blocks} blocks at block length {block_length}, \
         which exceeds the maximum block count of i32::MAX"
    )]
    BlockCountOverflow {
        /// The block length that produced the overflow.
        block_length: u32,
        /// The number of blocks that would have been required.
        blocks: u64,
    },
}

/// Failure modes for streaming signature generation (component C3).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SignatureError {
    /// An I/O error occurred while reading the input stream.
    #[error("failed to read input while generating signature: {0}")]
    Io(#[from] std::io::Error),

    /// The selected algorithm's native digest is narrower than the strong
    /// checksum length requested by the layout.
    #[error(
        "algorithm produces a {actual}-byte digest, but the layout requires \
         a {requested}-byte strong digest"
    )]
    DigestLengthMismatch {
        /// Digest width requested by the layout.
        requested: usize,
        /// Digest width the algorithm actually produces.
        actual: usize,
    },

    /// The input stream contained more bytes than the layout's recorded
    /// file length accounts for.
    #[error(
        "input contained trailing data beyond the {expected}-byte length \
         recorded in the layout"
    )]
    TrailingData {
        /// The file length the layout was computed from.
        expected: u64,
    },
}
