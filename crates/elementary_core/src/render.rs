/// Characters used to draw live and dead cells in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGlyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for RowGlyphs {
    fn default() -> Self {
        Self {
            alive: '*',
            dead: ' ',
        }
    }
}

impl RowGlyphs {
    #[must_use]
    pub const fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    /// Binary digits, as used in snapshots.
    #[must_use]
    pub const fn binary() -> Self {
        Self::new('1', '0')
    }

    #[must_use]
    pub fn glyph(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }

    #[must_use]
    pub fn render(&self, cells: &[bool]) -> String {
        cells.iter().map(|&c| self.glyph(c)).collect()
    }
}
