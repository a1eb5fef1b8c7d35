use anyhow::Result;
use elementary_core::{Automaton, Metrics};
use elementary_tui::Spacetime;
use std::time::Instant;

use crate::model::config::AppConfig;

/// Status line plus the two border rows around the diagram.
const CHROME_ROWS: u16 = 3;

pub struct App {
    pub running: bool,
    pub paused: bool,
    /// Set when the diagram is full or the generation limit is reached.
    pub finished: bool,
    pub automaton: Automaton,
    pub config: AppConfig,
    pub metrics: Metrics,
    pub spacetime: Spacetime,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let mut automaton = Automaton::new(
            config.automaton.rule,
            config.automaton.size,
            config.automaton.boundary,
        )?;
        automaton.initialize(config.seed.initial, config.seed.seed);
        tracing::info!(
            rule = automaton.rule().code(),
            size = automaton.size(),
            boundary = %automaton.boundary(),
            initial = %config.seed.initial,
            live = automaton.live_count(),
            "Automaton initialized"
        );

        let spacetime = Spacetime::new(0, config.display.scroll);
        Ok(Self {
            running: true,
            paused: false,
            finished: false,
            automaton,
            config,
            metrics: Metrics::new(),
            spacetime,
        })
    }

    /// Reapplies the configured initial state and clears the diagram.
    pub fn restart(&mut self) {
        self.automaton
            .initialize(self.config.seed.initial, self.config.seed.seed);
        self.spacetime.clear();
        self.metrics.reset();
        self.finished = false;
        tracing::info!("Simulation restarted");
    }

    /// Advances one generation and records it.
    pub fn step(&mut self) {
        let start = Instant::now();
        self.automaton.advance();
        self.metrics
            .record_generation(start.elapsed(), self.automaton.live_count());
    }

    /// True once the current generation is the last one to be shown.
    pub fn is_last_generation(&self) -> bool {
        let limit = self.config.display.generations;
        limit != 0 && self.automaton.generation() + 1 >= limit
    }

    /// Visible diagram rows for a terminal of `height` lines.
    pub fn canvas_rows(height: u16) -> usize {
        height.saturating_sub(CHROME_ROWS) as usize
    }
}
