//! Error types surfaced by wire codec and negotiation operations.

use thiserror::Error;

/// Failure modes for protocol negotiation and wire codec operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The agreed (or requested) protocol version falls outside the
    /// supported range `20..=32`.
    #[error("protocol version {version} is unsupported (must be in 20..=32)")]
    ProtocolUnsupported {
        /// The offending version value.
        version: u16,
    },

    /// A configuration value (block size, digest selection, checksum
    /// length, ...) is invalid for the negotiated protocol.
    #[error("invalid configuration: {reason}")]
    ConfigInvalid {
        /// Human-readable description of the invalid value.
        reason: String,
    },

    /// A wire value was truncated, internally inconsistent, or otherwise
    /// could not be decoded.
    #[error("malformed wire data: {reason}")]
    WireMalformed {
        /// Human-readable description of the malformed input.
        reason: String,
    },

    /// An I/O error occurred while reading or writing wire bytes.
    #[error("wire I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ProtocolError::WireMalformed {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        ProtocolError::ConfigInvalid {
            reason: reason.into(),
        }
    }
}
