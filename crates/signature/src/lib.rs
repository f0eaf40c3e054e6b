#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! File signature planning and generation (components C1-C3).
//!
//! A signature is the sender-independent summary a receiver builds from its
//! basis file: a rolling (weak) checksum and a truncated strong checksum
//! per block. The sender later walks its own copy of the file against this
//! summary to find reusable blocks.
//!
//! - [`layout`] - block-size and strong-checksum-length planning, mirroring
//!   upstream rsync's `sum_sizes_sqroot()` heuristic.
//! - [`algorithm`] - the strong-checksum algorithms a signature can use.
//! - [`block`] - a single block's rolling and strong digest entry.
//! - [`signature`] - streaming generation of a complete file signature.
//! - [`parallel`] - a `rayon`-backed alternative to [`generate_file_signature`]
//!   for large inputs. `rayon` is always compiled in; the crate's `parallel`
//!   feature is a no-op kept for callers that still enable it explicitly.

mod algorithm;
mod block;
mod error;
mod layout;
pub mod parallel;
mod signature;

pub use algorithm::SignatureAlgorithm;
pub use block::SignatureBlock;
pub use error::{SignatureError, SignatureLayoutError};
pub use layout::{calculate_signature_layout, SignatureLayout, SignatureLayoutParams};
pub use signature::{generate_file_signature, FileSignature};
