//! Wire protocol negotiation and codec primitives for the delta-transfer
//! engine.
//!
//! This crate owns the parts of the rsync wire protocol that sit below the
//! delta algorithm itself: agreeing a protocol version with a peer, and
//! encoding/decoding the integers, signature headers, and copy/literal
//! tokens that ride on top of that version's framing rules. It does not open
//! sockets, walk file trees, or perform authentication; those concerns live
//! above this core.
//!
//! - [`version`] - the supported `20..=32` version range and the
//!   [`NegotiatedSession`] context derived from it.
//! - [`negotiate`] - agreeing a version (and the digest/compression it
//!   implies) with a peer.
//! - [`varint`] - the length-prefixed and fixed-width integer encodings used
//!   across every other wire format in this crate.
//! - [`sumhead`] - the signature header and per-block entry codec.
//! - [`token`] - the copy/literal delta instruction stream codec.
//! - [`compress`] - the optional compression wrapper applied to a token
//!   stream.

pub mod compress;
pub mod error;
pub mod negotiate;
pub mod sumhead;
pub mod token;
pub mod varint;
pub mod version;

pub use compress::{compress as compress_bytes, decompress as decompress_bytes, CompressingWriter, DecompressingReader};
pub use error::ProtocolError;
pub use negotiate::{agree_version, negotiate, negotiate_with_digest, NegotiationRequest};
pub use sumhead::{read_sum_entry, read_sum_head, write_sum_entry, write_sum_head, SumHead};
pub use token::{read_token_header, write_copy_index, write_eof, write_literal_len, TokenHeader};
pub use varint::{read_int32, read_int64, write_int32, write_int64};
pub use version::{CompressionKind, DigestKind, NegotiatedSession, ProtocolVersion, NEWEST_SUPPORTED, OLDEST_SUPPORTED};
