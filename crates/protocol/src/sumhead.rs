//! Signature (sum-head) wire codec (component C8).
//!
//! Wire layout, in order: block count *N*, nominal block length *B*, strong
//! checksum length *S*, and (for protocol 27+) remainder length *R* — each
//! encoded per [`crate::varint`] — followed by *N* per-block entries of a
//! little-endian `u32` weak checksum and *S* raw strong-digest bytes. For
//! protocols older than 27 the remainder is not transmitted; it is inferred
//! by the caller from the basis length instead.

use std::io::{Read, Write};

use crate::error::ProtocolError;
use crate::varint::{read_int32, write_int32};
use crate::version::ProtocolVersion;

/// The header fields of a signature, independent of the per-block entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SumHead {
    /// Number of blocks, *N*.
    pub count: u32,
    /// Nominal block length, *B*.
    pub block_len: u32,
    /// Strong-digest truncation length, *S*, in bytes.
    pub strong_len: u32,
    /// Remainder length, *R* (0 if the basis length is a multiple of *B*).
    pub remainder: u32,
}

/// Writes the sum-head fields only; callers write the per-block entries
/// separately via [`write_sum_entry`].
pub fn write_sum_head(
    w: &mut impl Write,
    version: ProtocolVersion,
    head: &SumHead,
) -> Result<(), ProtocolError> {
    write_int32(w, version, i32_from_u32(head.count)?)?;
    write_int32(w, version, i32_from_u32(head.block_len)?)?;
    write_int32(w, version, i32_from_u32(head.strong_len)?)?;
    if version.uses_varint() {
        write_int32(w, version, i32_from_u32(head.remainder)?)?;
    }
    Ok(())
}

/// Reads the sum-head fields. For protocols older than 27, `remainder` is
/// always reported as `0`; callers must derive the true remainder from the
/// basis length themselves.
pub fn read_sum_head(r: &mut impl Read, version: ProtocolVersion) -> Result<SumHead, ProtocolError> {
    let count = u32_from_i32(read_int32(r, version)?, "count")?;
    let block_len = u32_from_i32(read_int32(r, version)?, "block_len")?;
    let strong_len = u32_from_i32(read_int32(r, version)?, "strong_len")?;
    let remainder = if version.uses_varint() {
        u32_from_i32(read_int32(r, version)?, "remainder")?
    } else {
        0
    };
    Ok(SumHead {
        count,
        block_len,
        strong_len,
        remainder,
    })
}

/// Writes one block entry: a little-endian `u32` weak checksum followed by
/// `strong` verbatim.
pub fn write_sum_entry(w: &mut impl Write, weak: u32, strong: &[u8]) -> Result<(), ProtocolError> {
    w.write_all(&weak.to_le_bytes())?;
    w.write_all(strong)?;
    Ok(())
}

/// Reads one block entry with a strong-digest length of `strong_len` bytes.
pub fn read_sum_entry(r: &mut impl Read, strong_len: usize) -> Result<(u32, Vec<u8>), ProtocolError> {
    let mut weak_buf = [0u8; 4];
    r.read_exact(&mut weak_buf)?;
    let weak = u32::from_le_bytes(weak_buf);
    let mut strong = vec![0u8; strong_len];
    r.read_exact(&mut strong)?;
    Ok((weak, strong))
}

fn i32_from_u32(value: u32) -> Result<i32, ProtocolError> {
    i32::try_from(value).map_err(|_| ProtocolError::malformed("sum-head field exceeds i32 range"))
}

fn u32_from_i32(value: i32, field: &str) -> Result<u32, ProtocolError> {
    u32::try_from(value).map_err(|_| ProtocolError::malformed(format!("sum-head field {field} is negative")))
}
