use std::cell::RefCell;

use crate::config::VerbosityConfig;
use crate::error::FlagParseError;
use crate::flags::{DebugFlag, InfoFlag};

/// One recorded message, captured for tests and for non-tracing consumers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DiagnosticEvent {
    /// An `--info`-namespace message.
    Info {
        /// Which info flag produced the message.
        flag: InfoFlag,
        /// The level it was emitted at.
        level: u8,
        /// The formatted message text.
        message: String,
    },
    /// A `--debug`-namespace message.
    Debug {
        /// Which debug flag produced the message.
        flag: DebugFlag,
        /// The level it was emitted at.
        level: u8,
        /// The formatted message text.
        message: String,
    },
}

thread_local! {
    static ACTIVE: RefCell<VerbosityConfig> = RefCell::new(VerbosityConfig::default());
    static EVENTS: RefCell<Vec<DiagnosticEvent>> = const { RefCell::new(Vec::new()) };
}

/// Installs `config` as the active verbosity state for the current thread.
///
/// Each thread carries its own independent state, so tests (and independent
/// transfer workers) do not interfere with one another.
pub fn init(config: VerbosityConfig) {
    ACTIVE.with(|active| *active.borrow_mut() = config);
    EVENTS.with(|events| events.borrow_mut().clear());
}

/// Returns a copy of the currently active verbosity configuration.
#[must_use]
pub fn current() -> VerbosityConfig {
    ACTIVE.with(|active| *active.borrow())
}

/// Drains and returns every event recorded since the last call to `init` or `drain_events`.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    EVENTS.with(|events| events.borrow_mut().drain(..).collect())
}

/// Reports whether `flag` is enabled at or above `level` in the active configuration.
#[must_use]
pub fn info_gte(flag: InfoFlag, level: u8) -> bool {
    ACTIVE.with(|active| active.borrow().info.get(flag) >= level)
}

/// Reports whether `flag` is enabled at or above `level` in the active configuration.
#[must_use]
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    ACTIVE.with(|active| active.borrow().debug.get(flag) >= level)
}

/// Parses and applies a single `--info=` token to the active configuration.
pub fn apply_info_flag(token: &str) -> Result<(), FlagParseError> {
    ACTIVE.with(|active| active.borrow_mut().info.apply_token(token))
}

/// Parses and applies a single `--debug=` token to the active configuration.
pub fn apply_debug_flag(token: &str) -> Result<(), FlagParseError> {
    ACTIVE.with(|active| active.borrow_mut().debug.apply_token(token))
}

/// Records one `--info` message if `flag` is enabled at `level`; called by [`crate::info_log`].
pub fn record_info(flag: InfoFlag, level: u8, message: String) {
    if !info_gte(flag, level) {
        return;
    }
    #[cfg(feature = "tracing")]
    tracing::info!(target: "rsync::info", flag = flag.name(), level, "{message}");
    EVENTS.with(|events| {
        events.borrow_mut().push(DiagnosticEvent::Info {
            flag,
            level,
            message,
        });
    });
}

/// Records one `--debug` message if `flag` is enabled at `level`; called by [`crate::debug_log`].
pub fn record_debug(flag: DebugFlag, level: u8, message: String) {
    if !debug_gte(flag, level) {
        return;
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "rsync::debug", flag = flag.name(), level, "{message}");
    EVENTS.with(|events| {
        events.borrow_mut().push(DiagnosticEvent::Debug {
            flag,
            level,
            message,
        });
    });
}
