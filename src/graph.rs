use std::fmt::Debug;
use std::hash::Hash;

use ordermap::OrderMap;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::{Error, Result};

/// Precedence constraints scoped to one sequence's item set.
///
/// Built fresh per sequence from that sequence's relevant rules and discarded
/// afterwards. Visited state lives in this instance only; two graphs over the
/// same item identifiers share nothing.
#[derive(Debug, Clone)]
pub struct PrecedenceGraph<K> {
    /// Stable node insertion order: key -> idx. Insertion order is the
    /// node-set order and is the tie-break everywhere.
    idx: OrderMap<K, usize>,
    /// Reverse index: idx -> key
    keys: Vec<K>,
    /// preds[i]: nodes that must appear before node i
    preds: Vec<Vec<usize>>,
    /// succs[i]: nodes that must appear after node i
    succs: Vec<Vec<usize>>,
    visited: Vec<bool>,
}

impl<K: Eq + Hash + Clone + Debug> PrecedenceGraph<K> {
    /// Builds the graph for `node_set` under `rules`.
    ///
    /// Every node-set item gets a node up front, so an item with no relevant
    /// rule has empty adjacency rows rather than a missing entry. Edges are
    /// deduplicated; rule endpoints outside `node_set` gain nodes too, though
    /// `RuleStore::relevant_rules` never produces any.
    pub fn construct(node_set: &[K], rules: &[(K, K)]) -> Self {
        let mut graph = Self {
            idx: OrderMap::new(),
            keys: Vec::new(),
            preds: Vec::new(),
            succs: Vec::new(),
            visited: Vec::new(),
        };
        for item in node_set {
            graph.add_node(item.clone());
        }
        for (before, after) in rules {
            let b = graph.add_node(before.clone());
            let a = graph.add_node(after.clone());
            graph.add_edge(b, a);
        }
        graph
    }

    fn add_node(&mut self, k: K) -> usize {
        if let Some(&i) = self.idx.get(&k) {
            return i;
        }
        let i = self.keys.len();
        self.idx.insert(k.clone(), i);
        self.keys.push(k);
        self.preds.push(Vec::new());
        self.succs.push(Vec::new());
        self.visited.push(false);
        i
    }

    fn add_edge(&mut self, before: usize, after: usize) {
        if before != after && !self.succs[before].contains(&after) {
            self.succs[before].push(after);
            self.preds[after].push(before);
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn reset(&mut self) {
        self.visited.iter_mut().for_each(|v| *v = false);
    }

    fn node(&self, item: &K) -> Result<usize> {
        self.idx
            .get(item)
            .copied()
            .ok_or_else(|| Error::UnknownItem(format!("{item:?}")))
    }

    /// Walks `sequence` in order and reports whether every item's
    /// predecessors were all seen at an earlier position.
    ///
    /// "Already visited" is a prefix property, so positions are processed
    /// strictly in order and a violation does not cut the walk short. Flags
    /// are reset again before returning because `correct` reuses this
    /// instance after a failed validation.
    pub fn validate(&mut self, sequence: &[K]) -> Result<bool> {
        self.reset();
        let mut valid = true;
        for item in sequence {
            let i = self.node(item)?;
            self.visited[i] = true;
            if !self.preds[i].iter().all(|&p| self.visited[p]) {
                valid = false;
            }
        }
        self.reset();
        Ok(valid)
    }

    /// Rebuilds a valid ordering over `sequence`'s items, a restricted form
    /// of Kahn's algorithm: start from the first zero-predecessor node in
    /// insertion order, then repeatedly follow the current node's first
    /// successor (edge insertion order) that is unvisited with all
    /// predecessors visited.
    ///
    /// Intended for sequences that failed `validate`. Fails with
    /// `CorrectionFailure` when no chain places every item; it never falls
    /// back to the original order or a partial result.
    pub fn correct(&mut self, sequence: &[K]) -> Result<Vec<K>> {
        for item in sequence {
            self.node(item)?;
        }
        self.reset();
        let total = self.keys.len();
        let mut order: Vec<usize> = Vec::with_capacity(total);

        let Some(start) = (0..total).find(|&i| self.preds[i].is_empty()) else {
            return Err(self.correction_failure(0));
        };
        self.visited[start] = true;
        order.push(start);

        let mut current = start;
        while order.len() < total {
            let next = self.succs[current].iter().copied().find(|&s| {
                !self.visited[s] && self.preds[s].iter().all(|&p| self.visited[p])
            });
            match next {
                Some(s) => {
                    self.visited[s] = true;
                    order.push(s);
                    current = s;
                }
                None => {
                    let placed = order.len();
                    return Err(self.correction_failure(placed));
                }
            }
        }

        self.reset();
        Ok(order.into_iter().map(|i| self.keys[i].clone()).collect())
    }

    /// Classifies a stuck chain by toposorting the relevant edges: a genuine
    /// cycle is named, otherwise the rules are satisfiable but no single
    /// successor chain reaches every item.
    fn correction_failure(&self, placed: usize) -> Error {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let nodes: Vec<NodeIndex> =
            (0..self.keys.len()).map(|_| g.add_node(())).collect();
        for (u, vs) in self.succs.iter().enumerate() {
            for &v in vs {
                g.add_edge(nodes[u], nodes[v], ());
            }
        }
        let detail = match toposort(&g, None) {
            Err(cycle) => {
                let stuck = &self.keys[cycle.node_id().index()];
                format!("rules cycle through item {stuck:?}")
            }
            Ok(_) => "rules admit an order but no successor chain visits every item"
                .to_string(),
        };
        Error::CorrectionFailure {
            placed,
            total: self.keys.len(),
            detail,
        }
    }
}
