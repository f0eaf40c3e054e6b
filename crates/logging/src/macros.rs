/// Emits an `--info`-namespace message if `$flag` is enabled at `$level` on the current thread.
///
/// ```
/// use logging::{VerbosityConfig, info_log, init};
///
/// init(VerbosityConfig::from_verbose_level(1));
/// info_log!(Name, 1, "transferring {}", "file.txt");
/// ```
#[macro_export]
macro_rules! info_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {
        $crate::record_info($crate::InfoFlag::$flag, $level, ::std::format!($($arg)+))
    };
}

/// Emits a `--debug`-namespace message if `$flag` is enabled at `$level` on the current thread.
///
/// ```
/// use logging::{VerbosityConfig, debug_log, init};
///
/// init(VerbosityConfig::from_verbose_level(2));
/// debug_log!(Deltasum, 1, "block {} weak={:#x}", 0, 0u32);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {
        $crate::record_debug($crate::DebugFlag::$flag, $level, ::std::format!($($arg)+))
    };
}
