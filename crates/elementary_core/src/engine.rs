//! The automaton engine.
//!
//! An [`Automaton`] owns one row of cells and the [`RuleTable`] derived from
//! its rule code. Each call to [`Automaton::advance`] computes the whole next
//! generation from the current one into a scratch buffer and then swaps the
//! two, so readers only ever see complete generations.

use elementary_data::{BoundaryMode, InitialState, Pattern, RuleCode};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::ops::Index;

use crate::error::{EngineError, Result};
use crate::render::RowGlyphs;
use crate::rule_table::RuleTable;
use crate::snapshot::AutomatonSnapshot;

/// Smallest row that has an interior and two distinct boundary cells.
pub const MIN_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct Automaton {
    table: RuleTable,
    boundary: BoundaryMode,
    cells: Vec<bool>,
    scratch: Vec<bool>,
    generation: u64,
}

impl Automaton {
    /// Creates an all-dead row of `size` cells.
    ///
    /// # Errors
    /// [`EngineError::InvalidSize`] when `size < 3`.
    pub fn new(rule: RuleCode, size: usize, boundary: BoundaryMode) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(EngineError::InvalidSize { size });
        }
        tracing::debug!(rule = rule.code(), size, %boundary, "Automaton created");
        Ok(Self {
            table: RuleTable::new(rule),
            boundary,
            cells: vec![false; size],
            scratch: vec![false; size],
            generation: 0,
        })
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Wolfram code the rule table was built from.
    #[must_use]
    pub fn rule(&self) -> RuleCode {
        self.table.rule()
    }

    /// Edge policy used by `advance()`.
    #[must_use]
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Generations advanced since the last initialization.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation, index 0 first.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Lookup table derived at construction.
    #[must_use]
    pub fn rule_table(&self) -> &RuleTable {
        &self.table
    }

    /// `(pattern, output)` pairs for patterns 0 through 7.
    #[must_use]
    pub fn rule_table_entries(&self) -> [(Pattern, bool); Pattern::COUNT] {
        self.table.entries()
    }

    /// Number of live cells in the current row.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// # Errors
    /// [`EngineError::IndexOutOfRange`] when `index >= size()`.
    pub fn cell_at(&self, index: usize) -> Result<bool> {
        self.cells
            .get(index)
            .copied()
            .ok_or(EngineError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// # Errors
    /// [`EngineError::IndexOutOfRange`] when `index >= size()`.
    pub fn set_cell(&mut self, index: usize, value: bool) -> Result<()> {
        *self.cell_mut(index)? = value;
        Ok(())
    }

    /// Flips a single cell.
    ///
    /// # Errors
    /// [`EngineError::IndexOutOfRange`] when `index >= size()`.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let cell = self.cell_mut(index)?;
        *cell = !*cell;
        Ok(())
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut bool> {
        let size = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { index, size })
    }

    /// Fills every cell with a fair coin flip.
    ///
    /// The generator is `ChaCha8Rng::seed_from_u64(seed)` drawing one
    /// `gen_bool(0.5)` per cell from index 0 upwards, so a seed always
    /// produces the same row for a given size.
    pub fn randomize(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for cell in &mut self.cells {
            *cell = rng.gen_bool(0.5);
        }
        self.generation = 0;
        tracing::debug!(seed, live = self.live_count(), "Row randomized");
    }

    /// Sets every cell dead.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Clears the row and sets the cell at `size / 2`.
    pub fn single_seed(&mut self) {
        self.clear();
        let mid = self.size() / 2;
        self.cells[mid] = true;
    }

    /// Applies one of the initialization operations.
    pub fn initialize(&mut self, initial: InitialState, seed: u64) {
        match initial {
            InitialState::Random => self.randomize(seed),
            InitialState::Single => self.single_seed(),
            InitialState::Empty => self.clear(),
        }
    }

    /// Computes the next generation.
    pub fn advance(&mut self) {
        let old = &self.cells;
        let next = &mut self.scratch;
        let n = old.len();
        let table = &self.table;

        for (slot, w) in next[1..n - 1].iter_mut().zip(old.windows(3)) {
            *slot = table.apply(w[0], w[1], w[2]);
        }

        let (first, last) = match self.boundary {
            BoundaryMode::Cyclic => (
                table.apply(old[n - 2], old[0], old[1]),
                table.apply(old[n - 2], old[n - 1], old[0]),
            ),
            BoundaryMode::Periodic => (
                table.apply(old[n - 1], old[0], old[1]),
                table.apply(old[n - 2], old[n - 1], old[0]),
            ),
            BoundaryMode::Fixed => (old[0], old[n - 1]),
        };
        next[0] = first;
        next[n - 1] = last;

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
        tracing::trace!(generation = self.generation, "Generation advanced");
    }

    /// Advances `generations` times in a row.
    pub fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Renders the current row with the given glyphs.
    #[must_use]
    pub fn render(&self, glyphs: RowGlyphs) -> String {
        glyphs.render(&self.cells)
    }

    /// Captures rule, boundary, generation and row for serialization.
    #[must_use]
    pub fn snapshot(&self) -> AutomatonSnapshot {
        AutomatonSnapshot::capture(self)
    }
}

impl Index<usize> for Automaton {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.cells[index]
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RowGlyphs::default()))
    }
}
