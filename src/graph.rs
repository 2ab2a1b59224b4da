//! Graph model - immutable node/edge collections with structural validation.
//!
//! Every operation returns a new `Graph`; the receiver is never modified.
//! Node order is render order: later nodes draw on top of earlier ones.

use crate::error::{GraphError, GraphResult};
use crate::types::{Edge, Node, Viewport};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Nodes, edges and an optional saved viewport.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from parts, checking every invariant.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<Self> {
        let graph = Self {
            nodes,
            edges,
            viewport: None,
        };
        graph.validate()?;
        Ok(graph)
    }

    pub fn with_viewport(self, viewport: Viewport) -> Self {
        Self {
            viewport: Some(viewport),
            ..self
        }
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.find_node(id).is_some()
    }

    /// True if a `source -> target` edge exists (direction matters).
    pub fn edge_exists(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    /// True if an edge joins `a` and `b` in either direction.
    pub fn nodes_connected(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Edges with `node_id` as either endpoint
    pub fn edges_of<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.touches(node_id))
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check every structural invariant. Used for graphs that did not come
    /// through the CRUD operations (e.g. deserialised ones).
    pub fn validate(&self) -> GraphResult<()> {
        let mut node_ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            validate_node(node)?;
            if !node_ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        let mut edge_ids = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if edge.source == edge.target {
                return Err(GraphError::SelfLoop(edge.source.clone()));
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(GraphError::UnknownNode(endpoint.clone()));
                }
            }
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(GraphError::DuplicateEdge(edge.id.clone()));
            }
        }

        Ok(())
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Append a node (it renders on top of all existing nodes).
    pub fn add_node(&self, node: Node) -> GraphResult<Self> {
        validate_node(&node)?;
        if self.has_node(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }

        let mut nodes = self.nodes.clone();
        nodes.push(node);
        Ok(Self {
            nodes,
            ..self.clone()
        })
    }

    /// Append an edge after checking endpoints, self loops and duplicates.
    pub fn add_edge(&self, edge: Edge) -> GraphResult<Self> {
        if edge.source == edge.target {
            return Err(GraphError::SelfLoop(edge.source));
        }
        for endpoint in [&edge.source, &edge.target] {
            if !self.has_node(endpoint) {
                return Err(GraphError::UnknownNode(endpoint.clone()));
            }
        }
        if self.find_edge(&edge.id).is_some() {
            return Err(GraphError::DuplicateEdge(edge.id));
        }
        if self.edge_exists(&edge.source, &edge.target) {
            return Err(GraphError::AlreadyConnected {
                from: edge.source,
                to: edge.target,
            });
        }

        let mut edges = self.edges.clone();
        edges.push(edge);
        Ok(Self {
            edges,
            ..self.clone()
        })
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&self, id: &str) -> GraphResult<Self> {
        if !self.has_node(id) {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        Ok(self.remove_nodes([id]))
    }

    /// Remove every listed node and their edges. Unknown IDs are ignored.
    pub fn remove_nodes<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: HashSet<String> = ids.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self {
            nodes: self
                .nodes
                .iter()
                .filter(|n| !ids.contains(&n.id))
                .cloned()
                .collect(),
            edges: self
                .edges
                .iter()
                .filter(|e| !ids.contains(&e.source) && !ids.contains(&e.target))
                .cloned()
                .collect(),
            viewport: self.viewport,
        }
    }

    pub fn remove_edge(&self, id: &str) -> GraphResult<Self> {
        if self.find_edge(id).is_none() {
            return Err(GraphError::UnknownEdge(id.to_string()));
        }
        Ok(self.remove_edges([id]))
    }

    /// Remove every listed edge. Unknown IDs are ignored.
    pub fn remove_edges<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: HashSet<String> = ids.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self {
            edges: self
                .edges
                .iter()
                .filter(|e| !ids.contains(&e.id))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Place a node at an absolute canvas position.
    pub fn move_node(&self, id: &str, x: f32, y: f32) -> GraphResult<Self> {
        if !self.has_node(id) {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        Ok(Self {
            nodes: self
                .nodes
                .iter()
                .map(|n| if n.id == id { n.moved_to(x, y) } else { n.clone() })
                .collect(),
            ..self.clone()
        })
    }
}

fn validate_node(node: &Node) -> GraphResult<()> {
    if node.width <= 0.0 || node.height <= 0.0 {
        return Err(GraphError::InvalidNodeSize(node.id.clone()));
    }
    Ok(())
}
