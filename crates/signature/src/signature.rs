//! Streaming file signature generation (component C3).

use std::io::Read;

use checksums::RollingDigest;

use crate::algorithm::SignatureAlgorithm;
use crate::block::SignatureBlock;
use crate::error::SignatureError;
use crate::layout::SignatureLayout;

/// A complete file signature: the layout it was planned with, plus one
/// [`SignatureBlock`] per block of the source file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSignature {
    layout: SignatureLayout,
    blocks: Vec<SignatureBlock>,
    total_bytes: u64,
}

impl FileSignature {
    /// Reconstructs a signature from its components, e.g. after decoding a
    /// sum-head and its entries off the wire.
    #[must_use]
    pub const fn from_raw_parts(
        layout: SignatureLayout,
        blocks: Vec<SignatureBlock>,
        total_bytes: u64,
    ) -> Self {
        Self {
            layout,
            blocks,
            total_bytes,
        }
    }

    /// The layout this signature was generated against.
    #[must_use]
    pub const fn layout(&self) -> SignatureLayout {
        self.layout
    }

    /// The per-block entries, in file order.
    #[must_use]
    pub fn blocks(&self) -> &[SignatureBlock] {
        &self.blocks
    }

    /// Total number of source bytes covered by this signature.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// Generates a file signature by reading `input` one block at a time.
///
/// `layout` must have been computed for the exact length of `input`; a
/// shorter input surfaces as an I/O error, a longer one as
/// [`SignatureError::TrailingData`].
///
/// # Errors
///
/// Propagates I/O errors from `input`, reports a truncated stream as an
/// [`SignatureError::Io`], reports extra bytes beyond the planned length as
/// [`SignatureError::TrailingData`], and reports an algorithm whose native
/// digest is narrower than the layout's strong-checksum length as
/// [`SignatureError::DigestLengthMismatch`].
pub fn generate_file_signature(
    mut input: impl Read,
    layout: SignatureLayout,
    algorithm: SignatureAlgorithm,
) -> Result<FileSignature, SignatureError> {
    let block_length = layout.block_length().get() as usize;
    let strong_sum_length = layout.strong_sum_length().get() as usize;
    let block_count = layout.block_count();

    let mut blocks = Vec::with_capacity(block_count as usize);
    let mut buffer = vec![0u8; block_length];
    let mut total_bytes = 0u64;

    for index in 0..block_count {
        let this_block_len = if index + 1 == block_count && layout.remainder() != 0 {
            layout.remainder() as usize
        } else {
            block_length
        };

        let slot = &mut buffer[..this_block_len];
        input.read_exact(slot)?;

        let rolling = RollingDigest::from_bytes(slot);
        let strong = algorithm.truncated_digest(slot, strong_sum_length)?;

        blocks.push(SignatureBlock::from_raw_parts(index, rolling, strong));
        total_bytes += this_block_len as u64;
    }

    reject_trailing_data(&mut input, layout.file_size())?;

    Ok(FileSignature::from_raw_parts(layout, blocks, total_bytes))
}

/// Probes for at least one more byte on `input`, failing with
/// [`SignatureError::TrailingData`] if the stream is not actually exhausted.
pub(crate) fn reject_trailing_data(
    input: &mut impl Read,
    expected: u64,
) -> Result<(), SignatureError> {
    let mut probe = [0u8; 1];
    match input.read(&mut probe) {
        Ok(0) => Ok(()),
        Ok(_) => Err(SignatureError::TrailingData { expected }),
        Err(err) => Err(err.into()),
    }
}
