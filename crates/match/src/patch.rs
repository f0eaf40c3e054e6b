//! Delta application (component C6): replays a [`DeltaScript`] against a
//! basis reader to reconstruct the target file.

use std::io::{Read, Seek, SeekFrom, Write};

use logging::debug_log;

use crate::error::PatchError;
use crate::hash_index::DeltaSignatureIndex;
use crate::token::{DeltaScript, DeltaToken};

/// Applies `script` against `basis`, writing the reconstructed bytes to
/// `output`.
///
/// `basis` only needs to support non-sequential access: copy tokens may
/// reference blocks in any order, including backward seeks relative to the
/// previous token, so this seeks to each block's offset rather than
/// assuming a forward-only read.
///
/// # Errors
///
/// Returns [`PatchError::DeltaInvalid`] if a copy token references a block
/// index past the end of `index`'s basis, or if the total bytes written
/// disagree with the script's own declared [`DeltaScript::total_bytes`].
/// Returns [`PatchError::Io`] if reading or writing fails.
/// [`PatchError::IntegrityFailure`] is reserved for a whole-file digest
/// mismatch; this implementation's [`DeltaScript`] carries no such digest,
/// so this function never constructs it.
pub fn apply_delta<R: Read + Seek, W: Write>(
    basis: &mut R,
    output: &mut W,
    index: &DeltaSignatureIndex,
    script: &DeltaScript,
) -> Result<(), PatchError> {
    let block_length = index.block_length() as u64;
    let block_count = index.block_count();
    let mut written = 0u64;
    let mut buf = Vec::new();

    for token in script.tokens() {
        match token {
            DeltaToken::Literal(bytes) => {
                output.write_all(bytes)?;
                written += bytes.len() as u64;
            }
            DeltaToken::Copy { index: block_index, len } => {
                if *block_index >= block_count {
                    return Err(PatchError::DeltaInvalid(format!(
                        "copy token references block index {block_index}, but basis has only {block_count} blocks"
                    )));
                }

                debug_log!(Deltasum, 2, "copying block {block_index} ({len} bytes)");

                let offset = block_index * block_length;
                basis.seek(SeekFrom::Start(offset))?;
                buf.resize(*len, 0);
                basis.read_exact(&mut buf)?;
                output.write_all(&buf)?;
                written += *len as u64;
            }
        }
    }

    if written != script.total_bytes() {
        return Err(PatchError::DeltaInvalid(format!(
            "delta script declared {} total bytes but {written} were written",
            script.total_bytes()
        )));
    }

    Ok(())
}
