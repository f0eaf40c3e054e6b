//! Error types surfaced by delta generation and application.

use thiserror::Error;

/// Failure modes for delta generation (component C5).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// An I/O error occurred while reading the input stream.
    #[error("failed to read input while generating delta: {0}")]
    Io(#[from] std::io::Error),

    /// Recomputing a candidate block's strong digest failed, e.g. because
    /// the signature index was built with a digest narrower than the
    /// strong-checksum length it advertises.
    #[error("failed to verify candidate block against signature: {0}")]
    SignatureInvalid(#[from] signature::SignatureError),

    /// A configured resource limit (such as [`crate::MatcherConfig`]'s
    /// literal-byte cap) was exceeded.
    #[error("resource limit exceeded: {0}")]
    ResourceLimit(String),
}

/// Failure modes for delta application (component C6).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatchError {
    /// An I/O error occurred while reading the basis or writing the output.
    #[error("failed to read basis or write output while applying delta: {0}")]
    Io(#[from] std::io::Error),

    /// The delta script is structurally inconsistent with the basis it is
    /// being applied against: a copy token referenced a block index the
    /// basis signature doesn't have, or the reconstructed output length
    /// disagrees with the length the script itself declared.
    #[error("{0}")]
    DeltaInvalid(String),

    /// The reconstructed output's whole-file digest did not match the
    /// digest the delta script carried. Deltas produced by this
    /// implementation carry no trailing whole-file digest, so nothing
    /// currently constructs this variant; it is reserved for a future
    /// digest-carrying script format.
    #[error("reconstructed output does not match the delta script's whole-file digest")]
    IntegrityFailure,
}
