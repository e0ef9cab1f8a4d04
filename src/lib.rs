//! SSH Ping
//!
//! Measures the round-trip latency of an interactive SSH session by echoing
//! a small marker through a remote `cat` and timing how long it takes to come
//! back.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod probe;
pub mod sampler;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, LatencySummary, SampleSet};
pub use output::{OutputFormatter, PlainFormatter};
pub use sampler::Sampler;
pub use session::Session;
pub use stats::LatencyStatistics;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    /// Pings issued and thrown away before sampling starts
    pub const WARMUP_PINGS: u32 = 3;
    /// Wall-clock window during which samples are collected
    pub const SAMPLING_DURATION: Duration = Duration::from_secs(5);
    /// A progress line is printed every this many samples
    pub const PROGRESS_INTERVAL: usize = 100;
    /// Bytes written to the session and expected back
    pub const PING_MARKER: &[u8; 4] = b"foo\n";
    pub const DEFAULT_SSH_PROGRAM: &str = "ssh";
    pub const REMOTE_ECHO_COMMAND: &str = "cat";
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
