use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};
use std::collections::VecDeque;

/// Rows drawn so far, one generation per screen line.
///
/// Holds at most `capacity` rows; once full, [`Spacetime::push`] refuses new
/// rows unless scrolling is enabled, in which case the oldest row is dropped.
#[derive(Debug, Clone)]
pub struct Spacetime {
    rows: VecDeque<Vec<bool>>,
    capacity: usize,
    scroll: bool,
}

impl Spacetime {
    pub fn new(capacity: usize, scroll: bool) -> Self {
        Self {
            rows: VecDeque::with_capacity(capacity),
            capacity,
            scroll,
        }
    }

    /// Returns `false` when the canvas is full and not scrolling.
    pub fn push(&mut self, cells: &[bool]) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.rows.len() == self.capacity {
            if !self.scroll {
                return false;
            }
            self.rows.pop_front();
        }
        self.rows.push_back(cells.to_vec());
        true
    }

    pub fn rows(&self) -> &VecDeque<Vec<bool>> {
        &self.rows
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the visible height, dropping the oldest rows that no longer fit.
    pub fn resize(&mut self, capacity: usize) {
        if self.rows.len() > capacity {
            let excess = self.rows.len() - capacity;
            self.rows.drain(..excess);
        }
        self.capacity = capacity;
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

pub struct SpacetimeWidget<'a> {
    spacetime: &'a Spacetime,
    bordered: bool,
}

impl<'a> SpacetimeWidget<'a> {
    pub fn new(spacetime: &'a Spacetime) -> Self {
        Self {
            spacetime,
            bordered: true,
        }
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn get_inner_area(area: Rect, bordered: bool) -> Rect {
        if bordered {
            Block::default().borders(Borders::ALL).inner(area)
        } else {
            area
        }
    }
}

impl<'a> Widget for SpacetimeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = Self::get_inner_area(area, self.bordered);
        if self.bordered {
            Block::default()
                .borders(Borders::ALL)
                .title(" Generations ")
                .render(area, buf);
        }

        for (dy, row) in self.spacetime.rows().iter().enumerate() {
            let y = inner.y + dy as u16;
            if y >= inner.bottom() {
                break;
            }
            for (dx, &alive) in row.iter().enumerate() {
                let x = inner.x + dx as u16;
                if x >= inner.right() {
                    break;
                }
                if alive {
                    let cell = &mut buf[(x, y)];
                    cell.set_symbol("█");
                    cell.set_fg(Color::White);
                }
            }
        }
    }
}
