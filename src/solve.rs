use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::PrecedenceGraph;
use crate::rules::RuleStore;

/// What happened to one input sequence.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Disposition {
    /// Passed validation as-is; its own middle element counts.
    AlreadyOrdered { middle: u32 },
    /// Failed validation; the corrected order's middle element counts.
    Corrected { reordered: Vec<u32>, middle: u32 },
    /// Could not be validated or corrected. Surfaced, never defaulted to
    /// the original order; the rest of the run continues.
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SequenceOutcome {
    pub sequence: Vec<u32>,
    #[serde(flatten)]
    pub disposition: Disposition,
}

/// Per-sequence outcomes plus the two independent totals.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub outcomes: Vec<SequenceOutcome>,
    /// Sum of middle elements of sequences that were already valid.
    pub already_ordered_total: u64,
    /// Sum of middle elements of corrected sequences.
    pub corrected_total: u64,
    pub failures: usize,
}

/// The element at index ⌊len/2⌋.
pub fn middle<K: Clone>(sequence: &[K]) -> Result<K> {
    sequence
        .get(sequence.len() / 2)
        .cloned()
        .ok_or(Error::InvalidSequence)
}

/// Runs every sequence against the rule universe: a fresh graph per
/// sequence over that sequence's relevant rules, validate, and correct on
/// failure. Rule construction errors abort the run; per-sequence errors are
/// recorded in that sequence's outcome and the run continues.
pub fn solve(rules: Vec<(u32, u32)>, sequences: Vec<Vec<u32>>) -> Result<Report> {
    let store = RuleStore::build(rules)?;

    let mut outcomes = Vec::with_capacity(sequences.len());
    let mut already_ordered_total = 0u64;
    let mut corrected_total = 0u64;
    let mut failures = 0usize;

    for sequence in sequences {
        let disposition = check_sequence(&store, &sequence);
        match &disposition {
            Disposition::AlreadyOrdered { middle } => {
                debug!(?sequence, middle, "already ordered");
                already_ordered_total += u64::from(*middle);
            }
            Disposition::Corrected { reordered, middle } => {
                debug!(?sequence, ?reordered, middle, "corrected");
                corrected_total += u64::from(*middle);
            }
            Disposition::Failed { error } => {
                warn!(?sequence, %error, "sequence failed");
                failures += 1;
            }
        }
        outcomes.push(SequenceOutcome {
            sequence,
            disposition,
        });
    }

    Ok(Report {
        outcomes,
        already_ordered_total,
        corrected_total,
        failures,
    })
}

fn check_sequence(store: &RuleStore<u32>, sequence: &[u32]) -> Disposition {
    match try_check(store, sequence) {
        Ok(disposition) => disposition,
        Err(err) => Disposition::Failed {
            error: err.to_string(),
        },
    }
}

fn try_check(store: &RuleStore<u32>, sequence: &[u32]) -> Result<Disposition> {
    let rules = store.relevant_rules(sequence);
    let mut graph = PrecedenceGraph::construct(sequence, &rules);
    if graph.validate(sequence)? {
        Ok(Disposition::AlreadyOrdered {
            middle: middle(sequence)?,
        })
    } else {
        let reordered = graph.correct(sequence)?;
        let middle = middle(&reordered)?;
        Ok(Disposition::Corrected { reordered, middle })
    }
}
