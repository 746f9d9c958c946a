//! Cast list
//!
//! A node-only graph introducing every character of the roster, plus a legend node for stage
//! directions. It is rendered apart from the plot graph.

use crate::play::characters::{Character, CharacterRegistry};
use crate::play::error::PlayError;
use crate::play::graph::{Node, NodeKind, PlayGraph};

const DIRECTION_LEGEND_ID: &str = "direction";
const DIRECTION_LEGEND_LABEL: &str = "Processing description, user action or other operation";

pub struct Cast;

impl Cast {
    pub fn from_registry(characters: &CharacterRegistry) -> Result<PlayGraph, PlayError> {
        let mut graph = PlayGraph::new();
        graph.add_node(Node::new(
            DIRECTION_LEGEND_ID,
            NodeKind::Direction,
            DIRECTION_LEGEND_LABEL,
        ))?;

        for character in characters.iter() {
            let node = Node::new(
                character.name.as_str(),
                NodeKind::Character,
                introduction(character),
            )
            .with_tags(character.tags.clone());
            graph.add_node(node)?;
        }
        Ok(graph)
    }
}

/// `Name\n\nDescription`, followed by `\n(tag, tag)` when the character has tags
fn introduction(character: &Character) -> String {
    let mut label = format!("{}\n\n{}", character.name, character.description);
    if !character.tags.is_empty() {
        label.push_str(&format!("\n({})", character.tags.join(", ")));
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::vocabulary::Vocabulary;

    #[test]
    fn test_cast_list() {
        let characters = CharacterRegistry::from_roster(
            [("Alice", "A detective. [Detective, User]"), ("Bob", "A voice.")],
            &Vocabulary::default(),
        )
        .unwrap();

        let cast = Cast::from_registry(&characters).unwrap();
        let ids: Vec<_> = cast.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["direction", "Alice", "Bob"]);

        let alice = cast.node("Alice").unwrap();
        assert_eq!(alice.label, "Alice\n\nA detective.\n(Detective, User)");
        assert_eq!(alice.tags, vec!["Detective", "User"]);
        assert_eq!(cast.node("Bob").unwrap().label, "Bob\n\nA voice.");
        assert_eq!(cast.edge_count(), 0);
    }

    #[test]
    fn test_character_named_like_the_legend_collides() {
        let characters =
            CharacterRegistry::from_roster([("direction", "Oops.")], &Vocabulary::default())
                .unwrap();
        assert!(matches!(
            Cast::from_registry(&characters),
            Err(PlayError::IdentifierCollision { .. })
        ));
    }
}
