use std::fmt::Debug;
use std::hash::Hash;

use ordermap::OrderSet;

use crate::error::{Error, Result};

/// Immutable universe of directed precedence rules.
///
/// A rule `(a, b)` states that `a` must appear before `b` whenever both occur
/// in the same sequence. `(a, b)` and `(b, a)` are distinct facts; a store may
/// hold both, in which case any sequence containing both items is
/// contradictory and fails correction.
#[derive(Debug, Clone, Default)]
pub struct RuleStore<K> {
    /// Pairs keyed by exact orientation, in insertion order.
    pairs: OrderSet<(K, K)>,
}

impl<K: Eq + Hash + Clone + Debug> RuleStore<K> {
    /// Builds the store from raw ordered pairs. Duplicates collapse;
    /// a self-pair `(a, a)` is malformed and rejected.
    pub fn build(rules: impl IntoIterator<Item = (K, K)>) -> Result<Self> {
        let mut pairs = OrderSet::new();
        for (before, after) in rules {
            if before == after {
                return Err(Error::RuleFormat(format!(
                    "{before:?} cannot precede itself"
                )));
            }
            pairs.insert((before, after));
        }
        Ok(Self { pairs })
    }

    /// Exact-orientation membership: is there a rule `a` before `b`?
    pub fn contains(&self, a: &K, b: &K) -> bool {
        self.pairs.contains(&(a.clone(), b.clone()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The rules whose both endpoints lie in `node_set`, one entry per
    /// orientation present in the store.
    ///
    /// Tests every unordered combination of two distinct items against both
    /// orientations, so O(k²) in the node-set size. Node sets here are a
    /// sequence's items (tens at most), and pairs are only indexed by exact
    /// identity, so the quadratic scan beats maintaining per-item indexes.
    pub fn relevant_rules(&self, node_set: &[K]) -> Vec<(K, K)> {
        let mut rules = Vec::new();
        for (i, a) in node_set.iter().enumerate() {
            for b in &node_set[i + 1..] {
                if self.contains(a, b) {
                    rules.push((a.clone(), b.clone()));
                }
                if self.contains(b, a) {
                    rules.push((b.clone(), a.clone()));
                }
            }
        }
        rules
    }
}
