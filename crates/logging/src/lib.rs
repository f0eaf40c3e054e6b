//! Verbosity flag system for `--info` / `--debug` style output control.
//!
//! The delta engine itself never formats or emits log lines — callers own
//! presentation — but the surrounding tooling (signature generation, block
//! matching, wire negotiation) threads diagnostic events through this crate
//! so that verbosity behaves identically to upstream rsync's `-v`/`--info`/
//! `--debug` flags. State is thread-local: each worker thread carries its
//! own active [`VerbosityConfig`] and event buffer, so concurrent transfers
//! never cross-contaminate each other's diagnostics.
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod config;
mod error;
mod events;
mod flags;
mod macros;

pub use config::{DebugConfig, InfoConfig, VerbosityConfig};
pub use error::FlagParseError;
pub use events::{
    current, debug_gte, drain_events, info_gte, init, record_debug, record_info, DiagnosticEvent,
};
pub use flags::{DebugFlag, InfoFlag};

/// Parses and applies a single `--info=` token to the active thread-local configuration.
pub use events::apply_info_flag;

/// Parses and applies a single `--debug=` token to the active thread-local configuration.
pub use events::apply_debug_flag;
