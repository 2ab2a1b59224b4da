//! Selection algebra - pure set transforms over node and edge IDs.
//!
//! Sets are ordered (`BTreeSet`) so iteration and serialised output are
//! deterministic.

use crate::types::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of selected IDs
pub type IdSet = BTreeSet<String>;

/// Selected nodes and selected edges, tracked independently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub nodes: IdSet,
    pub edges: IdSet,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes(self, nodes: IdSet) -> Self {
        Self { nodes, ..self }
    }

    pub fn with_edges(self, edges: IdSet) -> Self {
        Self { edges, ..self }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains(id)
    }
}

/// Click-style selection update.
///
/// Non-additive: the selection becomes `{id}`. Additive: `id` is removed if
/// present, added otherwise.
pub fn toggle_selection(set: &IdSet, id: &str, additive: bool) -> IdSet {
    if !additive {
        return IdSet::from([id.to_string()]);
    }

    let mut next = set.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Union of `set` and `ids`. Pass `[id]` for a single ID.
pub fn add_to_selection<I, S>(set: &IdSet, ids: I) -> IdSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut next = set.clone();
    next.extend(ids.into_iter().map(|id| id.as_ref().to_string()));
    next
}

/// `set` minus `ids`. Pass `[id]` for a single ID.
pub fn remove_from_selection<I, S>(set: &IdSet, ids: I) -> IdSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut next = set.clone();
    for id in ids {
        next.remove(id.as_ref());
    }
    next
}

/// Every node ID.
pub fn select_all(nodes: &[Node]) -> IdSet {
    nodes.iter().map(|n| n.id.clone()).collect()
}

pub fn clear_selection() -> IdSet {
    IdSet::new()
}
