//! JSON formatter
//!
//! The plain graph model, in creation order:
//!
//!     { "title": .., "by": .., "synopsis": ..,
//!       "nodes": [{ "id", "parent"?, "label", "kind", "tags" }],
//!       "edges": [{ "source", "target", "label", "tags" }] }

use crate::play::formats::registry::{FormatError, Formatter};
use crate::play::graph::{Edge, Node};
use crate::play::performance::Play;
use serde::Serialize;

#[derive(Serialize)]
struct PlayDocument<'a> {
    title: Option<&'a str>,
    by: Option<&'a str>,
    synopsis: Option<&'a str>,
    nodes: Vec<&'a Node>,
    edges: &'a [Edge],
}

impl<'a> From<&'a Play> for PlayDocument<'a> {
    fn from(play: &'a Play) -> Self {
        PlayDocument {
            title: play.title.as_deref(),
            by: play.by.as_deref(),
            synopsis: play.synopsis.as_deref(),
            nodes: play.graph.nodes().collect(),
            edges: play.graph.edges(),
        }
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, play: &Play) -> Result<String, FormatError> {
        let document = PlayDocument::from(play);
        let output = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(output)
    }

    fn description(&self) -> &str {
        "Node and edge lists with script metadata"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::loader::ScriptLoader;
    use serde_json::{json, Value};

    #[test]
    fn test_json_output() {
        let play = ScriptLoader::from_string(
            r#"
TITLE: Greeting
CHARACTERS:
  - Alice: "A. [User]"
  - Bob: "B."
PLOT:
  - ACT 1:
      - SCENE 1:
          - Alice:
              - "(To Bob[async])Hi."
"#,
        )
        .perform()
        .unwrap();

        let output = JsonFormatter::new(false).serialize(&play).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Greeting",
                "by": null,
                "synopsis": null,
                "nodes": [
                    {"id": "ACT 1.SCENE 1", "label": "SCENE 1", "kind": "scene", "tags": []},
                    {"id": "ACT 1.SCENE 1.Alice", "parent": "ACT 1.SCENE 1", "label": "Alice", "kind": "character", "tags": ["User"]},
                    {"id": "ACT 1.SCENE 1.Bob", "parent": "ACT 1.SCENE 1", "label": "Bob", "kind": "character", "tags": []}
                ],
                "edges": [
                    {"source": "ACT 1.SCENE 1.Alice", "target": "ACT 1.SCENE 1.Bob", "label": "Hi", "tags": ["async"]}
                ]
            })
        );
    }
}
