//! Demonstrates bridging the verbosity flag system onto `tracing` subscribers.
//!
//! Run with: `cargo run -p logging --example tracing_demo --features tracing`

use logging::{VerbosityConfig, debug_log, info_log, init};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    init(VerbosityConfig::from_verbose_level(2));

    info_log!(Name, 1, "receiving file.txt");
    info_log!(Stats, 1, "transferred 128 blocks");
    debug_log!(Deltasum, 1, "block 0 weak={:#010x}", 0x1234_5678u32);
}
