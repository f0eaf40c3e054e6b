//! Block matching and delta generation (components C4-C6).
//!
//! Given a [`signature::FileSignature`] describing a basis file, this crate
//! builds an in-memory index over its blocks ([`DeltaSignatureIndex`], C4),
//! scans an incoming byte stream for blocks already present in the basis
//! ([`generate_delta`]/[`DeltaGenerator`], C5), and replays a resulting
//! [`DeltaScript`] against the basis to reconstruct the target
//! ([`apply_delta`], C6).
//!
//! None of this performs filesystem walking, network I/O, or daemon
//! authentication; callers own reading/writing file data and pass byte
//! buffers in and out.
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod config;
mod error;
mod generator;
mod hash_index;
mod patch;
mod token;

pub use config::MatcherConfig;
pub use error::{MatchError, PatchError};
pub use generator::{generate_delta, DeltaGenerator};
pub use hash_index::DeltaSignatureIndex;
pub use patch::apply_delta;
pub use token::{DeltaScript, DeltaToken};
