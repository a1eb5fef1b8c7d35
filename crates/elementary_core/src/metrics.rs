//! Run metrics and logging setup.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// How often a generation summary is logged at info level.
const LOG_EVERY: u64 = 1000;

/// Counters for a running simulation.
#[derive(Debug)]
pub struct Metrics {
    generations: u64,
    live_cells: usize,
    last_duration: Duration,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: 0,
            live_cells: 0,
            last_duration: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation with its duration.
    pub fn record_generation(&mut self, duration: Duration, live_cells: usize) {
        self.generations += 1;
        self.live_cells = live_cells;
        self.last_duration = duration;

        if self.generations % LOG_EVERY == 0 {
            tracing::info!(
                generations = self.generations,
                live_cells,
                duration_us = duration.as_micros() as u64,
                "Simulation progress"
            );
        }
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    #[must_use]
    pub fn live_cells(&self) -> usize {
        self.live_cells
    }

    #[must_use]
    pub fn last_duration(&self) -> Duration {
        self.last_duration
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` when the variable is unset or invalid.
pub fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
