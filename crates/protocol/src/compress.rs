//! Compression adapter for the token stream (component C11).
//!
//! A transparent codec wrapped around the byte stream C9 produces. Frame
//! boundaries are left to the session layer (this core only needs to be
//! able to emit or consume an uncompressed token stream and, optionally,
//! wrap it); the [`CompressionKind`](crate::CompressionKind) carried by a
//! [`NegotiatedSession`](crate::NegotiatedSession) selects which framing, if
//! any, applies.

use std::io::{self, Read, Write};

use compress::zlib::{self, CompressionLevel};

use crate::version::CompressionKind;

/// Compresses `input` per `kind`, returning the bytes unchanged when `kind`
/// is [`CompressionKind::None`].
pub fn compress(kind: CompressionKind, input: &[u8]) -> io::Result<Vec<u8>> {
    match kind {
        CompressionKind::None => Ok(input.to_vec()),
        CompressionKind::Zlib => zlib::compress_to_vec(input, CompressionLevel::Default),
        #[cfg(feature = "zstd")]
        CompressionKind::Zstd => compress::zstd::compress_to_vec(input, CompressionLevel::Default),
        #[cfg(not(feature = "zstd"))]
        CompressionKind::Zstd => Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "zstd support was not compiled in",
        )),
    }
}

/// Decompresses `input` per `kind`, returning the bytes unchanged when
/// `kind` is [`CompressionKind::None`].
pub fn decompress(kind: CompressionKind, input: &[u8]) -> io::Result<Vec<u8>> {
    match kind {
        CompressionKind::None => Ok(input.to_vec()),
        CompressionKind::Zlib => zlib::decompress_to_vec(input),
        #[cfg(feature = "zstd")]
        CompressionKind::Zstd => compress::zstd::decompress_to_vec(input),
        #[cfg(not(feature = "zstd"))]
        CompressionKind::Zstd => Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "zstd support was not compiled in",
        )),
    }
}

/// Wraps `writer` so that bytes written through the result are framed per
/// `kind` before reaching `writer`. `None` returns `writer` untouched via
/// the `Plain` variant.
pub enum CompressingWriter<W: Write> {
    /// No compression; writes pass through unchanged.
    Plain(W),
    /// Raw-deflate framing.
    Zlib(zlib::CountingZlibEncoder<W>),
}

impl<W: Write> CompressingWriter<W> {
    /// Builds a writer that frames output per `kind`. Only `None` and
    /// `Zlib` are supported as streaming writers; `Zstd` uses the one-shot
    /// [`compress`] helper since the underlying encoder's finish-into-inner
    /// contract differs slightly from zlib's.
    pub fn new(kind: CompressionKind, writer: W) -> io::Result<Self> {
        match kind {
            CompressionKind::None => Ok(CompressingWriter::Plain(writer)),
            CompressionKind::Zlib => Ok(CompressingWriter::Zlib(
                zlib::CountingZlibEncoder::with_sink(writer, CompressionLevel::Default),
            )),
            CompressionKind::Zstd => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "zstd streaming writer is unavailable; use the one-shot compress() helper",
            )),
        }
    }

    /// Finalises the stream, returning the inner writer and the number of
    /// compressed bytes written.
    pub fn finish(self) -> io::Result<(W, u64)> {
        match self {
            CompressingWriter::Plain(w) => Ok((w, 0)),
            CompressingWriter::Zlib(enc) => enc.finish_into_inner(),
        }
    }
}

impl<W: Write> Write for CompressingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            CompressingWriter::Plain(w) => w.write(buf),
            // `CountingZlibEncoder` also has an inherent `write` returning
            // `io::Result<()>`; go through the trait explicitly.
            CompressingWriter::Zlib(enc) => Write::write(enc, buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            CompressingWriter::Plain(w) => w.flush(),
            CompressingWriter::Zlib(enc) => enc.flush(),
        }
    }
}

/// A reader that decompresses bytes from an inner reader per `kind`.
pub enum DecompressingReader<R: Read> {
    /// No compression; reads pass through unchanged.
    Plain(R),
    /// Raw-deflate framing.
    Zlib(zlib::CountingZlibDecoder<R>),
}

impl<R: Read> DecompressingReader<R> {
    /// Builds a reader that unframes input per `kind`.
    pub fn new(kind: CompressionKind, reader: R) -> io::Result<Self> {
        match kind {
            CompressionKind::None => Ok(DecompressingReader::Plain(reader)),
            CompressionKind::Zlib => Ok(DecompressingReader::Zlib(zlib::CountingZlibDecoder::new(reader))),
            CompressionKind::Zstd => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "zstd streaming reader is unavailable; use the one-shot decompress() helper",
            )),
        }
    }
}

impl<R: Read> Read for DecompressingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            DecompressingReader::Plain(r) => r.read(buf),
            DecompressingReader::Zlib(dec) => dec.read(buf),
        }
    }
}
