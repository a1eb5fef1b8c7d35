pub mod macros;

use elementary_core::Automaton;
use elementary_data::{BoundaryMode, RuleCode};

#[allow(dead_code)]
pub struct AutomatonBuilder {
    rule: u8,
    boundary: BoundaryMode,
    row: Vec<bool>,
}

#[allow(dead_code)]
impl AutomatonBuilder {
    pub fn new(rule: u8) -> Self {
        Self {
            rule,
            boundary: BoundaryMode::Cyclic,
            row: vec![false; 5],
        }
    }

    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Row from a `0`/`1` string; any other character is dead.
    pub fn with_row(mut self, bits: &str) -> Self {
        self.row = bits.chars().map(|c| c == '1').collect();
        self
    }

    pub fn with_cells(mut self, cells: &[bool]) -> Self {
        self.row = cells.to_vec();
        self
    }

    pub fn build(self) -> Automaton {
        let mut automaton = Automaton::new(RuleCode::new(self.rule), self.row.len(), self.boundary)
            .expect("builder row must have at least 3 cells");
        for (i, &value) in self.row.iter().enumerate() {
            automaton.set_cell(i, value).expect("index within row");
        }
        automaton
    }
}
