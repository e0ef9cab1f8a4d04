//! Sampling loop: warm-up pings followed by a time-bounded run of samples

use crate::{
    error::{ErrorContext, Result},
    logging::Logger,
    log_debug,
    models::{Config, SampleSet},
    probe::ping,
};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncWrite};

/// Runs the warm-up and sampling phases against a pair of session streams
#[derive(Debug, Clone)]
pub struct Sampler {
    warmup_pings: u32,
    sampling_duration: Duration,
    progress_interval: usize,
    logger: Logger,
}

impl Sampler {
    /// Create a sampler using the measurement parameters of `config`
    pub fn new(config: &Config) -> Self {
        Self {
            warmup_pings: config.warmup_pings,
            sampling_duration: config.sampling_duration,
            progress_interval: config.progress_interval.max(1),
            logger: Logger::with_config("SAMPLER", config),
        }
    }

    pub fn sampling_duration(&self) -> Duration {
        self.sampling_duration
    }

    /// Warm up, then collect samples until the sampling window has passed
    ///
    /// `on_progress` is called with the running count every
    /// `progress_interval` samples. The first failed ping ends the run.
    pub async fn run<W, R, F>(
        &self,
        outgoing: &mut W,
        incoming: &mut R,
        mut on_progress: F,
    ) -> Result<SampleSet>
    where
        W: AsyncWrite + Unpin + ?Sized,
        R: AsyncRead + Unpin + ?Sized,
        F: FnMut(usize),
    {
        self.warm_up(outgoing, incoming).await?;

        let mut samples = SampleSet::new();
        let start = Instant::now();
        while start.elapsed() < self.sampling_duration {
            let sample = ping(outgoing, incoming)
                .await
                .with_context(|| format!("sample {}", samples.len() + 1))?;

            samples.push(sample);
            if samples.len() % self.progress_interval == 0 {
                on_progress(samples.len());
            }
        }

        self.logger
            .info("Sampling finished")
            .field("samples", samples.len())
            .millis("elapsed_ms", start.elapsed())
            .log();

        Ok(samples)
    }

    /// The first pings pay for session start-up; their timings are dropped
    async fn warm_up<W, R>(&self, outgoing: &mut W, incoming: &mut R) -> Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
        R: AsyncRead + Unpin + ?Sized,
    {
        for i in 0..self.warmup_pings {
            let discarded = ping(outgoing, incoming)
                .await
                .with_context(|| format!("warm-up ping {}", i + 1))?;
            log_debug!(self.logger, "Discarded warm-up ping {} ({:?})", i + 1, discarded);
        }
        Ok(())
    }
}
