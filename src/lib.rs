//! # precedence
//!
//! Validates ordered sequences against pairwise precedence rules and repairs
//! the ones that violate them.
//!
//! A rule `(a, b)` means item `a` must appear before item `b` whenever both
//! occur in the same sequence. The rule universe is built once as a
//! [`RuleStore`]; each sequence then gets its own [`PrecedenceGraph`] scoped
//! to the rules relevant to its items, which validates the sequence and, on
//! failure, reconstructs a valid ordering via a restricted Kahn-style
//! successor chain.
mod error;
mod graph;
mod parse;
mod rules;
mod solve;

pub use error::{Error, Result};
pub use graph::PrecedenceGraph;
pub use parse::{parse_input, Input};
pub use rules::RuleStore;
pub use solve::{middle, solve, Disposition, Report, SequenceOutcome};
