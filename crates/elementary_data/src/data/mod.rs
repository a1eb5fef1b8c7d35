//! Core data structures for the elementary automaton.

pub mod boundary;
pub mod initial;
pub mod rule;

use thiserror::Error;

/// Error returned when a data type cannot be parsed from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid rule code '{0}': expected an integer in 0..=255")]
    RuleCode(String),

    #[error("invalid neighborhood pattern {0}: expected 0..=7")]
    Pattern(u8),

    #[error("unknown boundary mode '{0}': expected cyclic, fixed or periodic")]
    Boundary(String),

    #[error("unknown initial state '{0}': expected random, single or empty")]
    InitialState(String),
}
