use elementary_data::{Pattern, RuleCode};
use std::fmt;

/// Lookup from every neighborhood pattern to the new center state.
///
/// Built once from a [`RuleCode`] and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    rule: RuleCode,
    outputs: [bool; Pattern::COUNT],
}

impl RuleTable {
    #[must_use]
    pub fn new(rule: RuleCode) -> Self {
        let outputs = std::array::from_fn(|k| rule.output(Pattern::from_bits(k as u8)));
        Self { rule, outputs }
    }

    #[must_use]
    pub fn rule(&self) -> RuleCode {
        self.rule
    }

    #[inline]
    #[must_use]
    pub fn lookup(&self, pattern: Pattern) -> bool {
        self.outputs[pattern.index()]
    }

    #[inline]
    #[must_use]
    pub fn apply(&self, left: bool, center: bool, right: bool) -> bool {
        self.lookup(Pattern::from_cells(left, center, right))
    }

    /// `(pattern, output)` pairs for patterns 0 through 7.
    #[must_use]
    pub fn entries(&self) -> [(Pattern, bool); Pattern::COUNT] {
        std::array::from_fn(|k| (Pattern::from_bits(k as u8), self.outputs[k]))
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rule {}:", self.rule)?;
        for (pattern, output) in self.entries() {
            writeln!(f, "{} -> {}", pattern, u8::from(output))?;
        }
        Ok(())
    }
}
