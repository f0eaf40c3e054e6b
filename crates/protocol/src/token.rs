//! Copy/literal token stream codec (component C9).
//!
//! A non-negative value announces a literal run of that many bytes (with a
//! value of zero marking end-of-stream); a negative value `-(j + 1)`
//! announces a copy of block `j`. Literal bytes themselves are not part of
//! this module's concern — callers write/read them immediately after the
//! header using their own buffer of choice. Runs of adjacent copy tokens
//! are not fused at this layer; the matcher is expected to emit them
//! contiguously so a peer's run-length accounting still benefits.

use std::io::{Read, Write};

use crate::error::ProtocolError;
use crate::varint::{read_int32, write_int32};
use crate::version::ProtocolVersion;

/// One decoded token header (the literal byte count, a block copy index, or
/// the end-of-stream marker).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenHeader {
    /// `len` literal bytes follow verbatim.
    Literal(u32),
    /// A copy of basis block `index`.
    Copy(u32),
    /// End of the token stream.
    Eof,
}

/// Writes a literal-run header for `len` bytes. `len == 0` writes the
/// end-of-stream marker; callers should not also call [`write_eof`] after
/// writing a zero-length literal header.
pub fn write_literal_len(w: &mut impl Write, version: ProtocolVersion, len: u32) -> Result<(), ProtocolError> {
    let value = i32::try_from(len).map_err(|_| ProtocolError::malformed("literal run too long to encode"))?;
    write_int32(w, version, value)
}

/// Writes a copy-of-block-`index` header.
pub fn write_copy_index(w: &mut impl Write, version: ProtocolVersion, index: u32) -> Result<(), ProtocolError> {
    let encoded = i64::from(index)
        .checked_add(1)
        .and_then(|v| i32::try_from(-v).ok())
        .ok_or_else(|| ProtocolError::malformed("block index too large to encode"))?;
    write_int32(w, version, encoded)
}

/// Writes the end-of-stream marker (a zero-length literal header).
pub fn write_eof(w: &mut impl Write, version: ProtocolVersion) -> Result<(), ProtocolError> {
    write_int32(w, version, 0)
}

/// Reads and classifies the next token header.
pub fn read_token_header(r: &mut impl Read, version: ProtocolVersion) -> Result<TokenHeader, ProtocolError> {
    let value = read_int32(r, version)?;
    if value > 0 {
        Ok(TokenHeader::Literal(value as u32))
    } else if value == 0 {
        Ok(TokenHeader::Eof)
    } else {
        let index = (-i64::from(value) - 1) as u32;
        Ok(TokenHeader::Copy(index))
    }
}
