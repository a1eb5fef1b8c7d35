pub mod data;

pub use data::boundary::BoundaryMode;
pub use data::initial::InitialState;
pub use data::rule::{Pattern, RuleCode};
pub use data::ParseError;
