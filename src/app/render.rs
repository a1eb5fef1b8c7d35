use elementary_tui::{SpacetimeWidget, StatusWidget};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::state::App;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(f.area());

        f.render_widget(
            StatusWidget {
                rule: self.automaton.rule(),
                boundary: self.automaton.boundary(),
                generation: self.automaton.generation(),
                live_cells: self.automaton.live_count(),
                paused: self.paused,
                finished: self.finished,
            },
            layout[0],
        );
        f.render_widget(SpacetimeWidget::new(&self.spacetime), layout[1]);
    }
}
