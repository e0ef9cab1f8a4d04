//! Run configuration data model and validation

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
///
/// Built once at startup and passed by reference to the components that need
/// it. Nothing mutates it after `validate()` succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Host handed to the session program
    pub host: String,

    /// Program used to open the remote session
    #[serde(default = "default_ssh_program")]
    pub ssh_program: String,

    /// Command run on the remote side; must echo its input unchanged
    #[serde(default = "default_remote_command")]
    pub remote_command: String,

    /// Pings discarded before sampling starts
    #[serde(default = "default_warmup_pings")]
    pub warmup_pings: u32,

    /// Wall-clock window for collecting samples
    #[serde(default = "default_sampling_duration")]
    pub sampling_duration: Duration,

    /// Samples between progress lines
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::new(),
            ssh_program: default_ssh_program(),
            remote_command: default_remote_command(),
            warmup_pings: default_warmup_pings(),
            sampling_duration: default_sampling_duration(),
            progress_interval: default_progress_interval(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a configuration targeting `host` with default values
    pub fn for_host<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(AppError::config("Must set --host."));
        }

        if self.ssh_program.trim().is_empty() {
            return Err(AppError::config("Session program cannot be empty"));
        }

        if self.remote_command.trim().is_empty() {
            return Err(AppError::config("Remote command cannot be empty"));
        }

        if self.progress_interval == 0 {
            return Err(AppError::config("Progress interval must be greater than 0"));
        }

        Ok(())
    }

    /// Arguments passed to the session program: `<host> -- <command>`
    pub fn session_args(&self) -> [&str; 3] {
        [self.host.as_str(), "--", self.remote_command.as_str()]
    }
}

// Default value functions for serde
fn default_ssh_program() -> String {
    crate::defaults::DEFAULT_SSH_PROGRAM.to_string()
}

fn default_remote_command() -> String {
    crate::defaults::REMOTE_ECHO_COMMAND.to_string()
}

fn default_warmup_pings() -> u32 {
    crate::defaults::WARMUP_PINGS
}

fn default_sampling_duration() -> Duration {
    crate::defaults::SAMPLING_DURATION
}

fn default_progress_interval() -> usize {
    crate::defaults::PROGRESS_INTERVAL
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
