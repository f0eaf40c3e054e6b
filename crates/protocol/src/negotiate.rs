//! Protocol negotiation (component C10).

use crate::error::ProtocolError;
use crate::version::{CompressionKind, DigestKind, NegotiatedSession, ProtocolVersion};

/// Caller-supplied preferences fed into negotiation.
#[derive(Clone, Copy, Debug)]
pub struct NegotiationRequest {
    /// The locally preferred protocol version.
    pub local_version: ProtocolVersion,
    /// The remote peer's preferred protocol version.
    pub remote_version: ProtocolVersion,
    /// The checksum seed this side wants to use.
    pub seed: u32,
    /// Whether this side is willing to compress the token stream, subject
    /// to the agreed version supporting it.
    pub compression_requested: bool,
    /// Whether zstd is acceptable in place of zlib, subject to the agreed
    /// version supporting it.
    pub zstd_requested: bool,
}

/// Agrees on a protocol version: the lower of the two preferences, clamped
/// to the supported `20..=32` range. Fails with `ProtocolUnsupported` if the
/// lower preference is below 20 (both sides already validate their own
/// preference is at most 32 through [`ProtocolVersion`]'s constructor).
pub fn agree_version(
    local: ProtocolVersion,
    remote: ProtocolVersion,
) -> Result<ProtocolVersion, ProtocolError> {
    Ok(local.min(remote))
}

/// Runs negotiation end to end: agrees on a version, then derives the
/// default digest, max block size, and compression kind that version
/// implies.
pub fn negotiate(request: NegotiationRequest) -> Result<NegotiatedSession, ProtocolError> {
    let version = agree_version(request.local_version, request.remote_version)?;

    let digest = version.default_digest();

    let compression = if request.compression_requested && version.supports_compression() {
        if request.zstd_requested && version.supports_zstd() {
            CompressionKind::Zstd
        } else {
            CompressionKind::Zlib
        }
    } else {
        CompressionKind::None
    };

    Ok(NegotiatedSession::new(version, digest, request.seed, compression))
}

/// Negotiates with an explicit digest override, for protocol 32's
/// per-session digest agreement (the exact message framing for that
/// agreement is a session-layer concern outside this core; callers perform
/// that exchange themselves and pass the result in here).
pub fn negotiate_with_digest(
    request: NegotiationRequest,
    digest: DigestKind,
) -> Result<NegotiatedSession, ProtocolError> {
    let mut session = negotiate(request)?;
    if session.version().negotiates_digest_per_session() {
        session = NegotiatedSession::new(session.version(), digest, session.seed(), session.compression());
    }
    Ok(session)
}
