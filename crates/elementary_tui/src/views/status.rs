use elementary_data::{BoundaryMode, RuleCode};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// One-line summary shown above the spacetime diagram.
pub struct StatusWidget {
    pub rule: RuleCode,
    pub boundary: BoundaryMode,
    pub generation: u64,
    pub live_cells: usize,
    pub paused: bool,
    pub finished: bool,
}

impl Widget for StatusWidget {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let state = if self.finished {
            Span::styled(" DONE ", Style::default().fg(Color::Black).bg(Color::Green))
        } else if self.paused {
            Span::styled(" PAUSED ", Style::default().fg(Color::Black).bg(Color::Yellow))
        } else {
            Span::styled(" RUNNING ", Style::default().fg(Color::Black).bg(Color::Cyan))
        };

        let line = Line::from(vec![
            state,
            Span::raw(format!(
                " Rule {} | {} | Gen {} | Live {} ",
                self.rule, self.boundary, self.generation, self.live_cells
            )),
            Span::styled(
                "[q] quit [space] pause [r] restart",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
