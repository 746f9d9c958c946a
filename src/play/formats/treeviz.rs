//! Treeviz formatter for compiled plays
//!
//! One line per node, nesting shown with tree connectors, followed by one line per edge.
//! Labels are truncated to 30 characters.
//!
//! Example:
//!
//!     ⧉ Greeting
//!     └─ § SCENE 1
//!       ├─ ¶ Curtain rises.
//!       ├─ ☺ Alice (User)
//!       └─ ☺ Bob
//!     ↦ Alice → Bob: Hi
//!
//! Icons
//!     Play: ⧉
//!     Scene: §
//!     Direction: ¶
//!     Character: ☺
//!     Edge: ↦

use crate::play::formats::registry::{FormatError, Formatter};
use crate::play::graph::{Node, NodeKind, PlayGraph};
use crate::play::performance::Play;

const UNTITLED: &str = "Untitled";

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Scene => "§",
        NodeKind::Direction => "¶",
        NodeKind::Character => "☺",
    }
}

fn node_line(node: &Node) -> String {
    // Cast labels span several lines; only the first one is shown
    let label = node.label.lines().next().unwrap_or_default();
    let mut line = format!("{} {}", get_icon(node.kind), truncate(label, 30));
    if !node.tags.is_empty() {
        line.push_str(&format!(" ({})", node.tags.join(", ")));
    }
    line
}

fn format_node(
    graph: &PlayGraph,
    node: &Node,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    let mut output = format!("{}{} {}\n", prefix, connector, node_line(node));

    let children: Vec<&Node> = graph.children(&node.id).collect();
    if !children.is_empty() {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        for (i, child) in children.iter().enumerate() {
            output.push_str(&format_node(graph, child, &child_prefix, i, children.len()));
        }
    }

    output
}

fn endpoint_label<'a>(graph: &'a PlayGraph, id: &'a str) -> &'a str {
    graph
        .node(id)
        .and_then(|node| node.label.lines().next())
        .unwrap_or(id)
}

pub fn to_treeviz_str(play: &Play) -> String {
    let graph = &play.graph;
    let title = play.title.as_deref().unwrap_or(UNTITLED);
    let mut output = format!("⧉ {}\n", truncate(title, 30));

    let roots: Vec<&Node> = graph.roots().collect();
    for (i, root) in roots.iter().enumerate() {
        output.push_str(&format_node(graph, root, "", i, roots.len()));
    }

    for edge in graph.edges() {
        output.push_str(&format!(
            "↦ {} → {}",
            truncate(endpoint_label(graph, &edge.source), 30),
            truncate(endpoint_label(graph, &edge.target), 30)
        ));
        if !edge.label.is_empty() {
            output.push_str(&format!(": {}", truncate(&edge.label, 30)));
        }
        if !edge.tags.is_empty() {
            output.push_str(&format!(" ({})", edge.tags.join(", ")));
        }
        output.push('\n');
    }

    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, play: &Play) -> Result<String, FormatError> {
        Ok(to_treeviz_str(play))
    }

    fn description(&self) -> &str {
        "Visual tree of scenes and their nodes, followed by the edges"
    }
}
