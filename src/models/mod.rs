//! Data models and structures for ssh-ping

pub mod config;
pub mod metrics;

// Re-export main model types
pub use config::Config;
pub use metrics::{LatencySummary, SampleSet};
