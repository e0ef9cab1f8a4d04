//! Build the run configuration from parsed CLI arguments

use crate::{
    cli::Cli,
    error::{AppError, Result},
    models::Config,
};

/// Configuration parser that turns CLI arguments into a validated `Config`
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        self.cli.validate().map_err(AppError::config)?;

        let mut config = Config::for_host(self.cli.host.clone().unwrap_or_default());
        self.apply_cli_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        config.ssh_program = self.cli.ssh_program.clone();
        config.enable_color = self.cli.use_colors();
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let summary = [
        format!("Host: {}", config.host),
        format!("Session command: {} {}", config.ssh_program, config.session_args().join(" ")),
        format!("Warm-up pings: {}", config.warmup_pings),
        format!("Sampling window: {:?}", config.sampling_duration),
        format!("Progress interval: {} samples", config.progress_interval),
        format!("Color Output: {}", config.enable_color),
        format!("Verbose: {}", config.verbose),
        format!("Debug: {}", config.debug),
    ];

    summary.join("\n")
}
