//! Main application orchestration and execution

use crate::{
    config::display_config_summary,
    error::Result,
    logging::Logger,
    models::{Config, LatencySummary},
    output::{OutputFormatter, PlainFormatter},
    sampler::Sampler,
    session::Session,
    stats::summarize,
};
use std::io::Write;
use tokio::io::{AsyncRead, AsyncWrite};

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
    formatter: Box<dyn OutputFormatter>,
    logger: Logger,
}

impl App {
    /// Create a new application instance from a validated configuration
    pub fn new(config: Config) -> Self {
        let logger = Logger::with_config("APP", &config);
        Self {
            config,
            formatter: Box::new(PlainFormatter::new()),
            logger,
        }
    }

    /// Connect to the configured host, measure, and print the report to stdout
    pub async fn run(&self) -> Result<LatencySummary> {
        self.logger
            .debug("Configuration loaded")
            .field("summary", display_config_summary(&self.config))
            .log();

        let mut session = Session::launch(&self.config)?;
        let (stdin, stdout) = session.streams();

        let mut out = std::io::stdout();
        let summary = self.measure(stdin, stdout, &mut out).await?;
        Ok(summary)
    }

    /// Warm up, sample, and write progress lines and the report to `out`
    ///
    /// Nothing past the progress lines is written unless every ping and every
    /// statistic succeeded.
    pub async fn measure<W, R, O>(
        &self,
        outgoing: &mut W,
        incoming: &mut R,
        out: &mut O,
    ) -> Result<LatencySummary>
    where
        W: AsyncWrite + Unpin + ?Sized,
        R: AsyncRead + Unpin + ?Sized,
        O: Write + ?Sized,
    {
        let sampler = Sampler::new(&self.config);
        self.logger
            .info("Sampling")
            .field("host", &self.config.host)
            .millis("window_ms", sampler.sampling_duration())
            .log();

        let mut progress_error = None;
        let samples = sampler
            .run(outgoing, incoming, |count| {
                if progress_error.is_none() {
                    if let Err(e) = writeln!(out, "{}", self.formatter.format_progress(count)) {
                        progress_error = Some(e);
                    }
                }
            })
            .await?;
        if let Some(e) = progress_error {
            return Err(e.into());
        }

        let summary = summarize(&samples)?;
        let report = self.formatter.format_report(&summary)?;

        out.write_all(report.as_bytes())?;
        out.flush()?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{duplex, empty, sink};

    fn loopback_config(window: Duration) -> Config {
        Config {
            sampling_duration: window,
            enable_color: false,
            ..Config::for_host("loopback")
        }
    }

    #[tokio::test]
    async fn test_measure_over_loopback() {
        let app = App::new(loopback_config(Duration::from_millis(50)));
        let (mut outgoing, mut incoming) = duplex(1024);
        let mut out = Vec::new();

        let summary = app.measure(&mut outgoing, &mut incoming, &mut out).await.unwrap();

        assert!(summary.sample_count > 0);
        assert!(summary.is_ordered());
        assert!(summary.mean >= summary.min && summary.mean <= summary.max);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("Collected {} samples.", summary.sample_count)));
        assert!(text.contains("\nMin:      "));
        assert!(text.contains("\nStd. dev: "));
        assert!(text.ends_with(" ms\n"));
    }

    #[tokio::test]
    async fn test_progress_lines_precede_report() {
        let config = Config {
            progress_interval: 5,
            ..loopback_config(Duration::from_millis(50))
        };
        let app = App::new(config);
        let (mut outgoing, mut incoming) = duplex(1024);
        let mut out = Vec::new();

        let summary = app.measure(&mut outgoing, &mut incoming, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        let progress_lines = summary.sample_count / 5;
        for (i, line) in lines.iter().take(progress_lines).enumerate() {
            assert_eq!(*line, format!("{} samples so far...", (i + 1) * 5));
        }
        assert!(lines[progress_lines].starts_with("Collected "));
    }

    #[tokio::test]
    async fn test_zero_samples_is_statistics_error() {
        let app = App::new(loopback_config(Duration::ZERO));
        let (mut outgoing, mut incoming) = duplex(1024);
        let mut out = Vec::new();

        let err = app.measure(&mut outgoing, &mut incoming, &mut out).await.unwrap_err();
        assert_eq!(err.category(), "STATS");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_closed_session_prints_no_report() {
        let app = App::new(loopback_config(Duration::from_millis(50)));
        let mut outgoing = sink();
        let mut incoming = empty();
        let mut out = Vec::new();

        let err = app.measure(&mut outgoing, &mut incoming, &mut out).await.unwrap_err();
        assert_eq!(err.category(), "IO");
        assert_ne!(err.exit_code(), 0);
        assert!(out.is_empty());
    }
}
