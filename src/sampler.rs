//! The sampling loop.

use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use log::{debug, error};

use crate::{
    collection::CpuCollector, constants::DEFAULT_RATE_IN_MILLISECONDS, display,
    utils::cancellation_token::CancellationToken,
};

/// Settings for a [`Sampler`].
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// How long to wait between samples.
    pub rate: Duration,
    pub collector: CpuCollector,
    /// Stop after this many samples. `None` runs until cancelled.
    pub count: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            rate: Duration::from_millis(DEFAULT_RATE_IN_MILLISECONDS),
            collector: CpuCollector::default(),
            count: None,
        }
    }
}

/// Takes a sample immediately and then once every `rate`, until it is
/// cancelled or has taken `count` samples.
#[derive(Debug)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Runs the loop, writing every successful sample to `out`. Returns how
    /// many samples were attempted.
    ///
    /// A failed sample is logged and skipped; only failing to write to `out`
    /// stops the loop early.
    pub fn run<W: Write>(&self, out: &mut W, token: &CancellationToken) -> io::Result<u64> {
        let mut ticks = 0;

        while !token.is_cancelled() {
            let started = Instant::now();
            self.tick(out)?;
            ticks += 1;

            if self.config.count.is_some_and(|count| ticks >= count) {
                debug!("took all {ticks} samples, stopping");
                break;
            }

            let wait = time_to_next_tick(self.config.rate, started.elapsed());
            if token.sleep_with_cancellation(wait) {
                debug!("sampling cancelled after {ticks} samples");
                break;
            }
        }

        Ok(ticks)
    }

    fn tick<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.config.collector.collect() {
            Ok(snapshot) => {
                debug!(
                    "sampled {} ticks across {} cores ({} fields)",
                    snapshot.total, snapshot.cpu_count, snapshot.stat_count
                );

                display::write_snapshot(out, &snapshot)?;
                out.flush()
            }
            Err(err) => {
                error!(
                    "failed to sample {}: {err}",
                    self.config.collector.source().display()
                );
                eprintln!("failed to sample CPU stats: {err}");

                Ok(())
            }
        }
    }
}

/// How long to wait so that ticks stay `rate` apart, given how long the last
/// one took.
#[inline]
fn time_to_next_tick(rate: Duration, tick_duration: Duration) -> Duration {
    rate.saturating_sub(tick_duration)
}
