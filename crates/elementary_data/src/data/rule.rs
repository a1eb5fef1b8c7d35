use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Wolfram code of an elementary cellular automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCode(pub u8);

impl RuleCode {
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// New state of the center cell for `pattern`: bit `pattern` of the code.
    #[must_use]
    pub const fn output(self, pattern: Pattern) -> bool {
        (self.0 >> pattern.0) & 1 == 1
    }
}

impl From<u8> for RuleCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RuleCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map(Self)
            .map_err(|_| ParseError::RuleCode(s.to_string()))
    }
}

/// A (left, center, right) neighborhood packed into three bits.
///
/// Bit 2 holds the left cell, bit 1 the center and bit 0 the right cell, so
/// pattern `110` (left and center alive) is index 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pattern(u8);

impl Pattern {
    /// Number of distinct neighborhoods.
    pub const COUNT: usize = 8;

    #[inline]
    #[must_use]
    pub const fn from_cells(left: bool, center: bool, right: bool) -> Self {
        Self(((left as u8) << 2) | ((center as u8) << 1) | (right as u8))
    }

    /// Builds a pattern from the low three bits of `bits`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn left(self) -> bool {
        self.0 & 0b100 != 0
    }

    #[must_use]
    pub const fn center(self) -> bool {
        self.0 & 0b010 != 0
    }

    #[must_use]
    pub const fn right(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// All eight patterns in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for Pattern {
    type Error = ParseError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(ParseError::Pattern(index))
        }
    }
}

impl From<Pattern> for u8 {
    fn from(pattern: Pattern) -> Self {
        pattern.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |b: bool| if b { '1' } else { '0' };
        write!(
            f,
            "{}{}{}",
            bit(self.left()),
            bit(self.center()),
            bit(self.right())
        )
    }
}
