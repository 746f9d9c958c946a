//! The compiled graph model
//!
//! An append-only, insertion-ordered set of nodes and list of edges. This is the whole contract
//! handed to a renderer: nodes carry an optional containment parent, a label, a kind and tags;
//! edges read "source addresses target".

use crate::play::error::PlayError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Scene,
    Direction,
    Character,
}

impl NodeKind {
    /// Renderer class name of the kind
    pub fn class_name(&self) -> &'static str {
        match self {
            NodeKind::Scene => "scene",
            NodeKind::Direction => "direction",
            NodeKind::Character => "character",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub label: String,
    pub kind: NodeKind,
    pub tags: Vec<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            parent: None,
            label: label.into(),
            kind,
            tags: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub label: String,
    pub tags: Vec<String>,
}

impl Edge {
    /// An unlabeled, untagged edge
    pub fn bare(source: impl Into<String>, target: impl Into<String>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            label: String::new(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayGraph {
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
}

impl PlayGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless one with the same id exists.
    ///
    /// Returns `true` when the node was created. An existing node of the same kind makes this a
    /// no-op; an existing node of another kind is an identifier collision.
    pub fn add_node(&mut self, node: Node) -> Result<bool, PlayError> {
        if let Some(existing) = self.nodes.get(&node.id) {
            if existing.kind != node.kind {
                return Err(PlayError::IdentifierCollision { id: node.id });
            }
            return Ok(false);
        }
        debug!(id = %node.id, kind = %node.kind, "node");
        self.nodes.insert(node.id.clone(), node);
        Ok(true)
    }

    /// Append an edge. Both endpoints must already be nodes of this graph.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), PlayError> {
        for endpoint in [&edge.source, &edge.target] {
            if !self.nodes.contains_key(endpoint) {
                return Err(PlayError::DanglingEdge {
                    endpoint: endpoint.clone(),
                });
            }
        }
        debug!(source = %edge.source, target = %edge.target, label = %edge.label, "edge");
        self.edges.push(edge);
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in creation order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes contained by `parent`, in creation order
    pub fn children<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes()
            .filter(move |node| node.parent.as_deref() == Some(parent))
    }

    /// Nodes without a parent, in creation order
    pub fn roots(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|node| node.parent.is_none())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
