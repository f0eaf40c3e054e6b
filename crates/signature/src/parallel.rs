//! Parallel file signature generation, built atop the sequential block
//! digest logic in [`crate::signature`].
//!
//! Unlike the streaming sequential path, these entry points buffer the
//! entire input before computing block digests concurrently with
//! [`rayon`]. They exist for large files where per-block digesting, not
//! I/O, dominates wall-clock time.

use std::io::Read;

use checksums::RollingDigest;
use rayon::prelude::*;

use crate::algorithm::SignatureAlgorithm;
use crate::block::SignatureBlock;
use crate::error::SignatureError;
use crate::layout::SignatureLayout;
use crate::signature::{generate_file_signature, FileSignature};

/// File sizes at or above this threshold prefer
/// [`generate_file_signature_parallel`] when dispatched through
/// [`generate_file_signature_auto`].
pub const PARALLEL_THRESHOLD_BYTES: u64 = 256 * 1024;

/// Generates a file signature by buffering `input` in full and computing
/// block digests concurrently across available CPU cores.
///
/// Produces byte-identical output to [`crate::generate_file_signature`] for
/// the same layout and algorithm, including matching error behavior for
/// truncated or trailing input.
///
/// # Errors
///
/// See [`crate::generate_file_signature`].
pub fn generate_file_signature_parallel(
    mut input: impl Read,
    layout: SignatureLayout,
    algorithm: SignatureAlgorithm,
) -> Result<FileSignature, SignatureError> {
    let block_length = layout.block_length().get() as usize;
    let strong_sum_length = layout.strong_sum_length().get() as usize;
    let block_count = layout.block_count() as usize;
    let expected_total = layout.file_size();

    let mut data = Vec::with_capacity(expected_total.min(1 << 30) as usize);
    input.read_to_end(&mut data)?;

    let actual_total = data.len() as u64;
    if actual_total < expected_total {
        return Err(SignatureError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input ended before the planned file length was reached",
        )));
    }
    if actual_total > expected_total {
        return Err(SignatureError::TrailingData {
            expected: expected_total,
        });
    }

    let boundaries: Vec<(usize, usize)> = (0..block_count)
        .map(|index| {
            let start = index * block_length;
            let len = if index + 1 == block_count && layout.remainder() != 0 {
                layout.remainder() as usize
            } else {
                block_length
            };
            (start, len)
        })
        .collect();

    let blocks = boundaries
        .into_par_iter()
        .enumerate()
        .map(|(index, (start, len))| {
            let slice = &data[start..start + len];
            let rolling = RollingDigest::from_bytes(slice);
            let strong = algorithm.truncated_digest(slice, strong_sum_length)?;
            Ok(SignatureBlock::from_raw_parts(index as u64, rolling, strong))
        })
        .collect::<Result<Vec<_>, SignatureError>>()?;

    Ok(FileSignature::from_raw_parts(layout, blocks, actual_total))
}

/// Dispatches to [`generate_file_signature_parallel`] for inputs at or
/// above [`PARALLEL_THRESHOLD_BYTES`] (per the layout's planned file size),
/// and to [`crate::generate_file_signature`] otherwise.
///
/// # Errors
///
/// See [`crate::generate_file_signature`].
pub fn generate_file_signature_auto(
    input: impl Read,
    layout: SignatureLayout,
    algorithm: SignatureAlgorithm,
) -> Result<FileSignature, SignatureError> {
    if layout.file_size() >= PARALLEL_THRESHOLD_BYTES {
        generate_file_signature_parallel(input, layout, algorithm)
    } else {
        generate_file_signature(input, layout, algorithm)
    }
}
