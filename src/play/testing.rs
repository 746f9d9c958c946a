//! Fluent assertion API for compiled graphs
//!
//! ```rust,ignore
//! assert_graph(&play.graph)
//!     .node_count(4)
//!     .edge_count(1)
//!     .node("ACT 1.SCENE 1.Alice", |node| {
//!         node.kind(NodeKind::Character).parent("ACT 1.SCENE 1").tags(&["User"]);
//!     })
//!     .edge(0, |edge| {
//!         edge.source("ACT 1.SCENE 1.Alice").target("ACT 1.SCENE 1.Bob").label("Hi");
//!     });
//! ```

use crate::play::graph::{Edge, Node, NodeKind, PlayGraph};

/// Create an assertion builder for a graph
pub fn assert_graph(graph: &PlayGraph) -> GraphAssertion<'_> {
    GraphAssertion { graph }
}

fn summarize_nodes(graph: &PlayGraph) -> String {
    graph
        .nodes()
        .map(|n| format!("{}:{}", n.kind, n.id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_edges(graph: &PlayGraph) -> String {
    graph
        .edges()
        .iter()
        .map(|e| format!("{} -> {} '{}'", e.source, e.target, e.label))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct GraphAssertion<'a> {
    graph: &'a PlayGraph,
}

impl<'a> GraphAssertion<'a> {
    /// Assert the number of nodes in the graph
    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.graph.node_count();
        assert_eq!(
            actual,
            expected,
            "Expected {} nodes, found {}: [{}]",
            expected,
            actual,
            summarize_nodes(self.graph)
        );
        self
    }

    /// Assert the number of nodes of one kind
    pub fn kind_count(self, kind: NodeKind, expected: usize) -> Self {
        let actual = self.graph.nodes().filter(|n| n.kind == kind).count();
        assert_eq!(
            actual,
            expected,
            "Expected {} {} nodes, found {}: [{}]",
            expected,
            kind,
            actual,
            summarize_nodes(self.graph)
        );
        self
    }

    /// Assert the number of edges in the graph
    pub fn edge_count(self, expected: usize) -> Self {
        let actual = self.graph.edge_count();
        assert_eq!(
            actual,
            expected,
            "Expected {} edges, found {}: [{}]",
            expected,
            actual,
            summarize_edges(self.graph)
        );
        self
    }

    /// Assert the node ids, in creation order
    pub fn node_ids(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(actual, expected, "Node ids differ");
        self
    }

    /// Assert on the node with the given id
    pub fn node<F>(self, id: &str, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = self.graph.node(id).unwrap_or_else(|| {
            panic!(
                "No node '{}' (graph has: [{}])",
                id,
                summarize_nodes(self.graph)
            )
        });
        assertion(NodeAssertion { node });
        self
    }

    /// Assert there is no node with the given id
    pub fn no_node(self, id: &str) -> Self {
        assert!(!self.graph.contains(id), "Unexpected node '{}'", id);
        self
    }

    /// Assert on a specific edge by creation index
    pub fn edge<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(EdgeAssertion<'a>),
    {
        let edges = self.graph.edges();
        assert!(
            index < edges.len(),
            "Edge index {} out of bounds (graph has {} edges: [{}])",
            index,
            edges.len(),
            summarize_edges(self.graph)
        );
        assertion(EdgeAssertion {
            edge: &edges[index],
            context: format!("edges[{}]", index),
        });
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
}

impl NodeAssertion<'_> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(self.node.kind, expected, "{}: kind", self.node.id);
        self
    }

    pub fn label(self, expected: &str) -> Self {
        assert_eq!(self.node.label, expected, "{}: label", self.node.id);
        self
    }

    pub fn parent(self, expected: &str) -> Self {
        assert_eq!(
            self.node.parent.as_deref(),
            Some(expected),
            "{}: parent",
            self.node.id
        );
        self
    }

    pub fn no_parent(self) -> Self {
        assert_eq!(self.node.parent, None, "{}: parent", self.node.id);
        self
    }

    pub fn tags(self, expected: &[&str]) -> Self {
        assert_eq!(self.node.tags, expected, "{}: tags", self.node.id);
        self
    }
}

pub struct EdgeAssertion<'a> {
    edge: &'a Edge,
    context: String,
}

impl EdgeAssertion<'_> {
    pub fn source(self, expected: &str) -> Self {
        assert_eq!(self.edge.source, expected, "{}: source", self.context);
        self
    }

    pub fn target(self, expected: &str) -> Self {
        assert_eq!(self.edge.target, expected, "{}: target", self.context);
        self
    }

    pub fn label(self, expected: &str) -> Self {
        assert_eq!(self.edge.label, expected, "{}: label", self.context);
        self
    }

    pub fn tags(self, expected: &[&str]) -> Self {
        assert_eq!(self.edge.tags, expected, "{}: tags", self.context);
        self
    }

    /// Assert the edge has neither label nor tags
    pub fn bare(self) -> Self {
        assert!(
            self.edge.label.is_empty() && self.edge.tags.is_empty(),
            "{}: expected a bare edge, found label '{}' and tags {:?}",
            self.context,
            self.edge.label,
            self.edge.tags
        );
        self
    }
}
