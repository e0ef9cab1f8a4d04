//! Command-line interface

use clap::Parser;
use std::ffi::OsString;

/// SSH Ping - measure round-trip latency of an interactive SSH session
///
/// Opens `ssh <host> -- cat`, repeatedly sends a short marker to be echoed
/// back, and prints latency statistics after five seconds of sampling.
#[derive(Parser, Debug, Clone)]
#[command(name = "ssh_ping")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host to connect to over SSH
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Program used to open the session; invoked as `<program> <host> -- cat`
    #[arg(long, value_name = "PATH", default_value = crate::defaults::DEFAULT_SSH_PROGRAM)]
    pub ssh_program: String,

    /// Force colored diagnostics
    #[arg(long)]
    pub color: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Log session and sampling progress to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Log debug details to stderr as JSON
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        match self.host.as_deref() {
            None | Some("") => Err("Must set --host.".to_string()),
            Some(_) => Ok(()),
        }
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }
}

/// Rewrite the single-dash `-host` spelling to `--host`
///
/// Both `-host foo` and `-host=foo` are accepted. Without this, clap would
/// read `-host` as a cluster of short flags starting with `-h`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-host") => OsString::from("--host"),
            Some(s) if s.starts_with("-host=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
