//! Protocol version handling and the negotiated session context.

use crate::error::ProtocolError;

/// Lowest protocol version the core negotiates.
pub const OLDEST_SUPPORTED: u8 = 20;
/// Highest protocol version the core negotiates.
pub const NEWEST_SUPPORTED: u8 = 32;

/// First protocol version using length-prefixed varints for integers.
const FIRST_VARINT_PROTOCOL: u8 = 27;
/// First protocol version that caps block size at 128 KiB instead of 8 KiB.
const FIRST_WIDE_BLOCK_PROTOCOL: u8 = 30;
/// First protocol version with MD5 as the default strong digest.
const FIRST_MD5_PROTOCOL: u8 = 30;
/// First protocol version that negotiates the strong digest per session.
const FIRST_PER_SESSION_DIGEST_PROTOCOL: u8 = 32;
/// First protocol version able to carry a compressed token stream.
const FIRST_COMPRESSION_PROTOCOL: u8 = 30;
/// First protocol version able to offer zstd as an alternative to zlib.
const FIRST_ZSTD_PROTOCOL: u8 = 31;

/// An rsync wire protocol version in the supported `20..=32` range.
///
/// Values outside this range cannot be constructed; use [`TryFrom<u8>`] to
/// validate an externally supplied version number.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion(u8);

impl ProtocolVersion {
    /// The newest protocol version this core understands.
    pub const NEWEST: ProtocolVersion = ProtocolVersion(NEWEST_SUPPORTED);
    /// The oldest protocol version this core understands.
    pub const OLDEST: ProtocolVersion = ProtocolVersion(OLDEST_SUPPORTED);

    /// Returns the raw version number.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns `true` once the given protocol version encodes integers
    /// with the length-prefixed varint scheme instead of fixed-width ints.
    #[must_use]
    pub const fn uses_varint(self) -> bool {
        self.0 >= FIRST_VARINT_PROTOCOL
    }

    /// Maximum block length this version's peers will accept.
    #[must_use]
    pub const fn max_block_size(self) -> u32 {
        if self.0 < FIRST_WIDE_BLOCK_PROTOCOL {
            // OLD_MAX_BLOCK_SIZE: 2^29
            1 << 29
        } else {
            // MAX_BLOCK_SIZE: 2^17 = 131072
            1 << 17
        }
    }

    /// Default strong-digest kind for this version, absent any per-session
    /// negotiation. Protocol 32 negotiates the digest explicitly; this
    /// returns the fallback a caller should offer when no more specific
    /// agreement has been reached yet.
    #[must_use]
    pub const fn default_digest(self) -> DigestKind {
        if self.0 < FIRST_MD5_PROTOCOL {
            DigestKind::Md4
        } else {
            DigestKind::Md5
        }
    }

    /// Whether this version negotiates its strong digest per session
    /// rather than using a version-implied default.
    #[must_use]
    pub const fn negotiates_digest_per_session(self) -> bool {
        self.0 >= FIRST_PER_SESSION_DIGEST_PROTOCOL
    }

    /// Whether this version can carry a compressed token stream at all.
    #[must_use]
    pub const fn supports_compression(self) -> bool {
        self.0 >= FIRST_COMPRESSION_PROTOCOL
    }

    /// Whether this version can offer zstd in addition to zlib.
    #[must_use]
    pub const fn supports_zstd(self) -> bool {
        self.0 >= FIRST_ZSTD_PROTOCOL
    }
}

impl TryFrom<u8> for ProtocolVersion {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (OLDEST_SUPPORTED..=NEWEST_SUPPORTED).contains(&value) {
            Ok(ProtocolVersion(value))
        } else {
            Err(ProtocolError::ProtocolUnsupported {
                version: u16::from(value),
            })
        }
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strong-digest algorithm tag carried by a negotiated session.
///
/// This identifies *which* algorithm the session uses; the concrete seeding
/// and streaming behavior lives in `checksums::strong`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum DigestKind {
    /// MD4, the default for protocols older than 30.
    Md4,
    /// MD5, the default for protocols 30 and 31.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-256.
    Sha256,
    /// 64-bit xxHash.
    Xxh64,
    /// 64-bit xxHash3.
    Xxh3,
    /// 128-bit xxHash3.
    Xxh3_128,
}

/// Compression applied to a token stream under protocol 30+.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum CompressionKind {
    /// No compression; tokens are written verbatim.
    #[default]
    None,
    /// Raw-deflate (zlib) framing, available from protocol 30.
    Zlib,
    /// Zstandard framing, opt-in from protocol 31.
    Zstd,
}

/// Immutable, negotiated session context shared read-only for the lifetime
/// of a connection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NegotiatedSession {
    version: ProtocolVersion,
    digest: DigestKind,
    seed: u32,
    max_block_size: u32,
    compression: CompressionKind,
}

impl NegotiatedSession {
    /// Builds a session context directly from already-agreed values.
    ///
    /// Most callers should go through [`crate::negotiate::negotiate`]
    /// instead; this constructor exists for tests and for callers that
    /// have already performed negotiation through an external channel.
    #[must_use]
    pub fn new(
        version: ProtocolVersion,
        digest: DigestKind,
        seed: u32,
        compression: CompressionKind,
    ) -> Self {
        NegotiatedSession {
            version,
            digest,
            seed,
            max_block_size: version.max_block_size(),
            compression,
        }
    }

    /// The agreed protocol version.
    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// The negotiated strong-digest kind.
    #[must_use]
    pub const fn digest(&self) -> DigestKind {
        self.digest
    }

    /// The checksum seed mixed into per-block strong digests.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// The maximum block size this session's peers will accept.
    #[must_use]
    pub const fn max_block_size(&self) -> u32 {
        self.max_block_size
    }

    /// The compression kind applied to the token stream, if any.
    #[must_use]
    pub const fn compression(&self) -> CompressionKind {
        self.compression
    }
}
