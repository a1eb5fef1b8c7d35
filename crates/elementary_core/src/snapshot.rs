//! Point-in-time view of an automaton for JSON output.

use elementary_data::{BoundaryMode, RuleCode};
use serde::{Deserialize, Serialize};

use crate::engine::Automaton;
use crate::render::RowGlyphs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonSnapshot {
    pub rule: RuleCode,
    pub boundary: BoundaryMode,
    pub generation: u64,
    /// Row as a string of `0` and `1`, index 0 first.
    pub cells: String,
}

impl AutomatonSnapshot {
    #[must_use]
    pub fn capture(automaton: &Automaton) -> Self {
        Self {
            rule: automaton.rule(),
            boundary: automaton.boundary(),
            generation: automaton.generation(),
            cells: RowGlyphs::binary().render(automaton.cells()),
        }
    }

    /// Serializes to a single JSON line.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
