use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// How the two edge cells of a row are updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Wraps around, but both edge cells take `old[N-2]` as their left
    /// neighbor.
    #[default]
    Cyclic,
    /// Edge cells are never recomputed.
    Fixed,
    /// True circular adjacency: `old[N-1]` is left of cell 0 and `old[0]` is
    /// right of cell `N-1`.
    Periodic,
}

impl BoundaryMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cyclic => "cyclic",
            Self::Fixed => "fixed",
            Self::Periodic => "periodic",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cyclic" => Ok(Self::Cyclic),
            "fixed" => Ok(Self::Fixed),
            "periodic" | "wrap" => Ok(Self::Periodic),
            _ => Err(ParseError::Boundary(s.to_string())),
        }
    }
}
