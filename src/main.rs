//! SSH Ping - Main CLI Application
//!
//! Measures the round-trip latency of an SSH session to `--host` and prints
//! summary statistics.

use clap::{error::ErrorKind, Parser};
use ssh_ping::{
    app::App,
    cli::{normalize_args, Cli},
    config::load_config,
    error::{ErrorReporter, Result},
    logging::Logger,
};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors share the exit status of a missing --host.
            let _ = e.print();
            process::exit(1);
        }
    };

    let reporter = ErrorReporter::new(cli.use_colors(), cli.verbose);
    if let Err(e) = run_application(cli).await {
        reporter.report_error(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    let config = load_config(cli)?;

    let logger = Logger::with_config("MAIN", &config);
    let app = App::new(config);

    match app.run().await {
        Ok(summary) => {
            logger
                .info("Run complete")
                .field("samples", summary.sample_count)
                .log();
            Ok(())
        }
        Err(e) => {
            logger.error("Run failed").error_info(&e).log();
            Err(e)
        }
    }
}
