//! # Elementary Core
//!
//! The automaton engine for one-dimensional, two-state, radius-one cellular
//! automata addressed by their Wolfram code.
//!
//! This crate contains:
//! - Rule table derivation from an 8-bit rule code
//! - The generation-advance algorithm with its boundary policies
//! - Deterministic seeding from a fixed pseudo-random generator
//! - Text diagnostics and serializable snapshots
//! - Structured logging setup and run metrics
//!
//! ## Example
//!
//! ```
//! use elementary_core::Automaton;
//! use elementary_data::{BoundaryMode, RuleCode};
//!
//! let mut automaton = Automaton::new(RuleCode::new(90), 5, BoundaryMode::Cyclic).unwrap();
//! automaton.single_seed();
//! automaton.advance();
//! assert_eq!(automaton.cells(), &[false, true, false, true, false]);
//! ```

/// The automaton engine: cell row, initialization and `advance()`
pub mod engine;
/// Error taxonomy for engine operations
pub mod error;
/// Run metrics and logging setup
pub mod metrics;
/// Text rendering of rows and rule tables
pub mod render;
/// Fixed eight-entry lookup table derived from a rule code
pub mod rule_table;
/// Serializable point-in-time view of an automaton
pub mod snapshot;

pub use engine::{Automaton, MIN_SIZE};
pub use error::{EngineError, Result};
pub use metrics::{init_logging, Metrics};
pub use render::RowGlyphs;
pub use rule_table::RuleTable;
pub use snapshot::AutomatonSnapshot;
