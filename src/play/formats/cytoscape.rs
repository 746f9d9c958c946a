//! Cytoscape formatter
//!
//! Emits the element list a Cytoscape-style renderer consumes. Styling is left to the renderer;
//! this format only attaches class names: the node kind (`scene`, `direction`, `character`) and
//! one `tag-<tag>` class per tag, with the tag sanitized into a class-safe identifier.

use crate::play::formats::registry::{FormatError, Formatter};
use crate::play::graph::{Edge, Node};
use crate::play::lexical::tag_class_name;
use crate::play::performance::Play;
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "group", rename_all = "lowercase")]
enum Element<'a> {
    Nodes {
        data: NodeData<'a>,
        classes: Vec<String>,
    },
    Edges {
        data: EdgeData<'a>,
        classes: Vec<String>,
    },
}

#[derive(Serialize)]
struct NodeData<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<&'a str>,
    label: &'a str,
}

#[derive(Serialize)]
struct EdgeData<'a> {
    source: &'a str,
    target: &'a str,
    label: &'a str,
}

fn tag_classes(tags: &[String]) -> impl Iterator<Item = String> + '_ {
    tags.iter().map(|tag| tag_class_name(tag))
}

impl<'a> From<&'a Node> for Element<'a> {
    fn from(node: &'a Node) -> Self {
        let classes = std::iter::once(node.kind.class_name().to_string())
            .chain(tag_classes(&node.tags))
            .collect();
        Element::Nodes {
            data: NodeData {
                id: &node.id,
                parent: node.parent.as_deref(),
                label: &node.label,
            },
            classes,
        }
    }
}

impl<'a> From<&'a Edge> for Element<'a> {
    fn from(edge: &'a Edge) -> Self {
        Element::Edges {
            data: EdgeData {
                source: &edge.source,
                target: &edge.target,
                label: &edge.label,
            },
            classes: tag_classes(&edge.tags).collect(),
        }
    }
}

pub struct CytoscapeFormatter {
    pretty: bool,
}

impl CytoscapeFormatter {
    pub fn new(pretty: bool) -> Self {
        CytoscapeFormatter { pretty }
    }
}

impl Default for CytoscapeFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for CytoscapeFormatter {
    fn name(&self) -> &str {
        "cytoscape"
    }

    fn serialize(&self, play: &Play) -> Result<String, FormatError> {
        let elements: Vec<Element> = play
            .graph
            .nodes()
            .map(Element::from)
            .chain(play.graph.edges().iter().map(Element::from))
            .collect();

        let output = if self.pretty {
            serde_json::to_string_pretty(&elements)?
        } else {
            serde_json::to_string(&elements)?
        };
        Ok(output)
    }

    fn description(&self) -> &str {
        "Cytoscape element list with kind and tag classes"
    }
}
