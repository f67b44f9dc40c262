use thiserror::Error;

/// Errors surfaced by rule construction, validation and correction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rule whose endpoints are equal, or a rule line that did not parse.
    #[error("malformed rule: {0}")]
    RuleFormat(String),

    /// A sequence item with no node in the graph it is being checked against.
    #[error("item {0} is not part of this graph")]
    UnknownItem(String),

    /// Middle-element extraction over an empty sequence.
    #[error("sequence is empty")]
    InvalidSequence,

    /// The restricted topological chain could not place every item.
    /// The relevant rule subset admits no chain through all items, most
    /// often because it contains a genuine cycle.
    #[error("correction failed after placing {placed} of {total} items: {detail}")]
    CorrectionFailure {
        placed: usize,
        total: usize,
        detail: String,
    },

    /// An input line that is neither a rule nor a sequence.
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;
