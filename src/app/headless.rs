//! Plain-text run loop: one row per generation on a writer.

use anyhow::Result;
use std::io::Write;
use std::time::Duration;

use super::shutdown::ShutdownManager;
use super::state::App;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Glyph per cell.
    #[default]
    Text,
    /// One JSON snapshot per line.
    Json,
}

impl App {
    pub fn emit_row<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => {
                let row = self.automaton.render(self.config.display.glyphs());
                writeln!(out, "{row}")?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", self.automaton.snapshot().to_json()?)?;
            }
        }
        Ok(())
    }

    /// Writes rows until the generation limit, `shutdown`, or forever when
    /// the limit is 0.
    pub async fn run_headless<W: Write>(
        &mut self,
        out: &mut W,
        format: OutputFormat,
        show_rule: bool,
        shutdown: &ShutdownManager,
    ) -> Result<()> {
        if show_rule {
            write!(out, "{}", self.automaton.rule_table())?;
        }

        let delay = Duration::from_millis(self.config.display.delay_ms);
        while self.running && !shutdown.is_shutdown_requested() {
            self.emit_row(out, format)?;
            if self.is_last_generation() {
                break;
            }
            self.step();
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }
        }
        out.flush()?;

        tracing::info!(
            generations = self.metrics.generations(),
            live_cells = self.automaton.live_count(),
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Headless run finished"
        );
        Ok(())
    }
}
