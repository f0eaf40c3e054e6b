//! Block-size and strong-checksum-length planning (component C2).
//!
//! Mirrors upstream rsync's `generator.c:sum_sizes_sqroot()`: small files get
//! a fixed block length, while larger files scale the block length with the
//! square root of the file length so that the number of blocks (and thus the
//! signature size) grows sub-linearly.

use std::num::{NonZeroU32, NonZeroU8};

use protocol::ProtocolVersion;

use crate::error::SignatureLayoutError;

/// Block length used for files at or below `BLOCK_SIZE * BLOCK_SIZE` bytes.
const BLOCK_SIZE: u32 = 700;

/// Strong-checksum length below which the per-file bias heuristic is
/// bypassed entirely; this is upstream's historical MD4/MD5 digest width.
const SUM_LENGTH: u8 = 16;

/// Inputs to [`calculate_signature_layout`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignatureLayoutParams {
    file_length: u64,
    forced_block_length: Option<NonZeroU32>,
    protocol: ProtocolVersion,
    checksum_length: NonZeroU8,
}

impl SignatureLayoutParams {
    /// Builds planner inputs from an already-known file length, an optional
    /// forced block length (`--block-size`), the negotiated protocol
    /// version, and the strong checksum length the caller's algorithm
    /// supports.
    #[must_use]
    pub const fn new(
        file_length: u64,
        forced_block_length: Option<NonZeroU32>,
        protocol: ProtocolVersion,
        checksum_length: NonZeroU8,
    ) -> Self {
        Self {
            file_length,
            forced_block_length,
            protocol,
            checksum_length,
        }
    }

    /// Length of the file the signature is being planned for.
    #[must_use]
    pub const fn file_length(&self) -> u64 {
        self.file_length
    }

    /// Forced block length, if the caller overrode the heuristic.
    #[must_use]
    pub const fn forced_block_length(&self) -> Option<NonZeroU32> {
        self.forced_block_length
    }

    /// Negotiated protocol version.
    #[must_use]
    pub const fn protocol(&self) -> ProtocolVersion {
        self.protocol
    }

    /// Maximum strong-checksum length the caller's algorithm can produce.
    #[must_use]
    pub const fn checksum_length(&self) -> NonZeroU8 {
        self.checksum_length
    }
}

/// The planned block geometry and strong-checksum width for a file
/// signature.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignatureLayout {
    block_length: NonZeroU32,
    remainder: u32,
    block_count: u64,
    strong_sum_length: NonZeroU8,
}

impl SignatureLayout {
    /// Reconstructs a layout from its components, e.g. after decoding a
    /// sum-head off the wire.
    #[must_use]
    pub const fn from_raw_parts(
        block_length: NonZeroU32,
        remainder: u32,
        block_count: u64,
        strong_sum_length: NonZeroU8,
    ) -> Self {
        Self {
            block_length,
            remainder,
            block_count,
            strong_sum_length,
        }
    }

    /// Nominal length of every block except possibly the last.
    #[must_use]
    pub const fn block_length(&self) -> NonZeroU32 {
        self.block_length
    }

    /// Length of the final, possibly-short block; `0` if the file length is
    /// an exact multiple of `block_length`.
    #[must_use]
    pub const fn remainder(&self) -> u32 {
        self.remainder
    }

    /// Total number of blocks, including the short final block if any.
    #[must_use]
    pub const fn block_count(&self) -> u64 {
        self.block_count
    }

    /// Number of strong-digest bytes retained per block.
    #[must_use]
    pub const fn strong_sum_length(&self) -> NonZeroU8 {
        self.strong_sum_length
    }

    /// Reconstructs the file length this layout was planned for.
    #[must_use]
    pub fn file_size(&self) -> u64 {
        if self.block_count == 0 {
            0
        } else if self.remainder == 0 {
            self.block_count * u64::from(self.block_length.get())
        } else {
            (self.block_count - 1) * u64::from(self.block_length.get()) + u64::from(self.remainder)
        }
    }
}

/// Plans the block geometry and strong-checksum width for a file signature.
///
/// # Errors
///
/// Returns [`SignatureLayoutError::FileTooLarge`] if `params.file_length()`
/// exceeds `i64::MAX`, and [`SignatureLayoutError::BlockCountOverflow`] if
/// the resulting block count would not fit in a 32-bit signed integer.
pub fn calculate_signature_layout(
    params: SignatureLayoutParams,
) -> Result<SignatureLayout, SignatureLayoutError> {
    let file_length = params.file_length;
    if file_length > i64::MAX as u64 {
        return Err(SignatureLayoutError::FileTooLarge { length: file_length });
    }

    let block_length = match params.forced_block_length {
        Some(forced) => forced.get(),
        None => sum_sizes_sqroot(file_length, params.protocol),
    };
    let block_length_nz =
        NonZeroU32::new(block_length).expect("block length heuristic never yields zero");

    let (block_count, remainder) = if file_length == 0 {
        (0u64, 0u32)
    } else {
        let block_length_u64 = u64::from(block_length);
        let remainder = (file_length % block_length_u64) as u32;
        let whole_blocks = file_length / block_length_u64;
        (whole_blocks + u64::from(remainder != 0), remainder)
    };

    if block_count > i32::MAX as u64 {
        return Err(SignatureLayoutError::BlockCountOverflow {
            block_length,
            blocks: block_count,
        });
    }

    let strong_sum_length =
        strong_sum_length_bias(block_length, file_length, params.protocol, params.checksum_length);

    Ok(SignatureLayout {
        block_length: block_length_nz,
        remainder,
        block_count,
        strong_sum_length,
    })
}

/// Reimplements upstream's `sum_sizes_sqroot()` block-length heuristic.
fn sum_sizes_sqroot(file_length: u64, protocol: ProtocolVersion) -> u32 {
    let threshold = u64::from(BLOCK_SIZE) * u64::from(BLOCK_SIZE);
    if file_length <= threshold {
        return BLOCK_SIZE;
    }

    let max_block_length = u64::from(protocol.max_block_size());

    // Find the largest power of two `c` such that `file_length >> 2` has not
    // yet been reduced to zero after repeated halving by four.
    let mut c: u64 = 1;
    let mut l = file_length;
    loop {
        l >>= 2;
        if l == 0 {
            break;
        }
        c <<= 1;
    }

    // Greedily set bits of `blength` from `c` downward, keeping a bit only
    // if `blength * blength` would still not exceed the file length.
    let mut blength: u64 = 0;
    loop {
        blength |= c;
        if file_length < blength * blength {
            blength &= !c;
        }
        c >>= 1;
        if c < 8 {
            break;
        }
    }

    blength.clamp(u64::from(BLOCK_SIZE), max_block_length) as u32
}

/// Approximates upstream's `BLOCKSUM_BIAS` strong-checksum-length heuristic.
///
/// The exact bit-for-bit upstream formula is not reproduced here; this
/// grows the checksum length with file size and shrinks it with block
/// length in the same monotonic shape, bounded below by the algorithm's
/// requested length and above by [`SUM_LENGTH`].
fn strong_sum_length_bias(
    block_length: u32,
    file_length: u64,
    protocol: ProtocolVersion,
    requested: NonZeroU8,
) -> NonZeroU8 {
    if !protocol.uses_varint() || requested.get() >= SUM_LENGTH {
        return requested;
    }

    let file_bits = 64 - file_length.leading_zeros();
    let mut bias: u32 = 10 + 2 * file_bits;

    let mut block_bits = 32 - block_length.leading_zeros();
    while block_bits > 0 && bias > 0 {
        block_bits -= 1;
        bias -= 1;
    }

    let bytes = (bias / 8).clamp(u32::from(requested.get()), u32::from(SUM_LENGTH));
    NonZeroU8::new(bytes as u8).unwrap_or(requested)
}
