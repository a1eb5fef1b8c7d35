pub mod headless;
pub mod render;
pub mod shutdown;
pub mod state;

pub use headless::OutputFormat;
pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use elementary_tui::Tui;
use std::time::{Duration, Instant};

impl App {
    /// Terminal run loop. Draws one generation per line until the screen
    /// fills up, then waits for the user to quit or restart.
    pub async fn run(&mut self, tui: &mut Tui, shutdown: &ShutdownManager) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.display.delay_ms);
        let mut last_tick = Instant::now();

        let height = tui.terminal.size()?.height;
        self.spacetime.resize(Self::canvas_rows(height));

        while self.running && !shutdown.is_shutdown_requested() {
            tui.terminal.draw(|f| self.draw(f))?;

            let timeout = tick_rate
                .saturating_sub(last_tick.elapsed())
                .max(Duration::from_millis(1));
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Resize(_, height) => self.spacetime.resize(Self::canvas_rows(height)),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if !self.paused && !self.finished {
                    self.tick();
                }
                last_tick = Instant::now();
            }
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Draws the current row and advances, or marks the run finished.
    pub fn tick(&mut self) {
        if !self.spacetime.push(self.automaton.cells()) {
            self.finished = true;
            tracing::debug!(generation = self.automaton.generation(), "Canvas full");
            return;
        }
        if self.is_last_generation() {
            self.finished = true;
            return;
        }
        self.step();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            // Raw mode swallows SIGINT.
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }
}
