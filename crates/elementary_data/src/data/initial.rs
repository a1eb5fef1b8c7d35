use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Which initialization operation seeds the first generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialState {
    /// Fair coin flip per cell from a seeded generator.
    #[default]
    Random,
    /// A single live cell in the middle of the row.
    Single,
    /// Every cell dead.
    Empty,
}

impl fmt::Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::Single => "single",
            Self::Empty => "empty",
        })
    }
}

impl FromStr for InitialState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "single" | "one" => Ok(Self::Single),
            "empty" | "clear" => Ok(Self::Empty),
            _ => Err(ParseError::InitialState(s.to_string())),
        }
    }
}
