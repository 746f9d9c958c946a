//! Graph builder
//!
//! The stage is a small state machine over the act/scene/direction counters. Every node it
//! creates gets an identifier composed from the counters current at that moment:
//!
//!     scene:      ACT 1.SCENE 2
//!     direction:  ACT 1.SCENE 2.3
//!     character:  ACT 1.SCENE 2.Alice
//!
//! Directions and characters are parented to the current scene, so the same character in two
//! scenes gives two distinct nodes.
//!
//! Only single-act plays are modeled: a second [`Stage::add_act`] is rejected.

use crate::play::error::PlayError;
use crate::play::graph::{Edge, Node, NodeKind, PlayGraph};
use crate::play::lexical::remove_trailing_dot;
use crate::play::vocabulary::Vocabulary;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagePosition {
    pub act: u32,
    pub scene: u32,
    pub direction: u32,
}

/// Where an edge points: a character of the current scene or one of its directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Character(&'a str),
    Direction(u32),
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Character(name) => f.write_str(name),
            Target::Direction(index) => write!(f, "{}", index),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Stage {
    vocabulary: Vocabulary,
    position: StagePosition,
    graph: PlayGraph,
}

impl Stage {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Stage {
            vocabulary,
            position: StagePosition::default(),
            graph: PlayGraph::new(),
        }
    }

    pub fn position(&self) -> StagePosition {
        self.position
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn graph(&self) -> &PlayGraph {
        &self.graph
    }

    pub fn into_graph(self) -> PlayGraph {
        self.graph
    }

    /// Label of the current act, e.g. `ACT 1`
    pub fn current_act(&self) -> String {
        self.vocabulary.act_label(self.position.act)
    }

    /// Label of the current scene, e.g. `SCENE 2`
    pub fn current_scene(&self) -> String {
        self.vocabulary.scene_label(self.position.scene)
    }

    pub fn current_direction(&self) -> u32 {
        self.position.direction
    }

    /// Identifier of the current scene node
    pub fn scene_id(&self) -> String {
        format!("{}.{}", self.current_act(), self.current_scene())
    }

    /// Identifier of a node local to the current scene
    pub fn node_id(&self, local: impl fmt::Display) -> String {
        format!("{}.{}", self.scene_id(), local)
    }

    /// Open the (only) act. Does not create a node.
    pub fn add_act(&mut self) -> Result<(), PlayError> {
        if self.position.act > 0 {
            return Err(PlayError::UnsupportedMultiAct);
        }
        self.position.act += 1;
        self.position.scene = 0;
        debug!(act = %self.current_act(), "act");
        Ok(())
    }

    /// Open the next scene and create its node.
    pub fn add_scene(&mut self) -> Result<Node, PlayError> {
        self.position.scene += 1;
        self.position.direction = 0;

        let node = Node::new(self.scene_id(), NodeKind::Scene, self.current_scene());
        self.graph.add_node(node.clone())?;
        Ok(node)
    }

    /// Add a stage direction to the current scene, returning its index within the scene.
    pub fn add_direction(&mut self, text: &str) -> Result<u32, PlayError> {
        self.position.direction += 1;

        let node = Node::new(
            self.node_id(self.position.direction),
            NodeKind::Direction,
            text,
        )
        .with_parent(self.scene_id());
        self.graph.add_node(node)?;
        Ok(self.position.direction)
    }

    /// Make sure `name` has a node in the current scene.
    ///
    /// Returns whether the node was created by this call; a character already on stage is left
    /// untouched.
    pub fn enter_character(&mut self, name: &str, tags: &[String]) -> Result<bool, PlayError> {
        let node = Node::new(self.node_id(name), NodeKind::Character, name)
            .with_parent(self.scene_id())
            .with_tags(tags.to_vec());
        self.graph.add_node(node)
    }

    /// Add an edge from character `from` to `to`, both resolved in the current scene.
    ///
    /// One trailing full stop is removed from the label.
    pub fn address<S: AsRef<str>>(
        &mut self,
        from: &str,
        to: Target<'_>,
        text: &str,
        tags: &[S],
    ) -> Result<(), PlayError> {
        let edge = Edge {
            source: self.node_id(from),
            target: self.node_id(to),
            label: remove_trailing_dot(text),
            tags: tags.iter().map(|tag| tag.as_ref().to_string()).collect(),
        };
        self.graph.add_edge(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NO_TAGS: &[&str] = &[];

    fn stage_in_scene() -> Stage {
        let mut stage = Stage::new(Vocabulary::default());
        stage.add_act().unwrap();
        stage.add_scene().unwrap();
        stage
    }

    #[test]
    fn test_identifiers() {
        let mut stage = stage_in_scene();
        assert_eq!(stage.scene_id(), "ACT 1.SCENE 1");

        let index = stage.add_direction("Lights dim.").unwrap();
        assert_eq!(index, 1);
        let direction = stage.graph().node("ACT 1.SCENE 1.1").unwrap();
        assert_eq!(direction.kind, NodeKind::Direction);
        assert_eq!(direction.parent.as_deref(), Some("ACT 1.SCENE 1"));
        assert_eq!(direction.label, "Lights dim.");
        assert!(direction.tags.is_empty());

        stage
            .enter_character("Alice", &["User".to_string()])
            .unwrap();
        let alice = stage.graph().node("ACT 1.SCENE 1.Alice").unwrap();
        assert_eq!(alice.label, "Alice");
        assert_eq!(alice.tags, vec!["User"]);
        assert_eq!(alice.parent.as_deref(), Some("ACT 1.SCENE 1"));
    }

    #[test]
    fn test_scene_node() {
        let mut stage = Stage::new(Vocabulary::default());
        stage.add_act().unwrap();
        let scene = stage.add_scene().unwrap();
        assert_eq!(scene.id, "ACT 1.SCENE 1");
        assert_eq!(scene.label, "SCENE 1");
        assert_eq!(scene.kind, NodeKind::Scene);
        assert_eq!(scene.parent, None);
    }

    #[test]
    fn test_second_act_is_rejected() {
        let mut stage = Stage::new(Vocabulary::default());
        stage.add_act().unwrap();
        assert!(matches!(stage.add_act(), Err(PlayError::UnsupportedMultiAct)));
        assert_eq!(stage.position().act, 1);
    }

    #[test]
    fn test_enter_character_is_idempotent_per_scene() {
        let mut stage = stage_in_scene();
        assert!(stage.enter_character("Alice", &[]).unwrap());
        assert!(!stage.enter_character("Alice", &[]).unwrap());
        assert_eq!(stage.graph().node_count(), 2);

        stage.add_scene().unwrap();
        assert!(stage.enter_character("Alice", &[]).unwrap());
        assert!(stage.graph().contains("ACT 1.SCENE 1.Alice"));
        assert!(stage.graph().contains("ACT 1.SCENE 2.Alice"));
    }

    #[test]
    fn test_address_strips_one_trailing_dot() {
        let mut stage = stage_in_scene();
        stage.enter_character("Alice", &[]).unwrap();
        stage.enter_character("Bob", &[]).unwrap();

        stage
            .address("Alice", Target::Character("Bob"), "Goodbye.", NO_TAGS)
            .unwrap();
        stage
            .address("Alice", Target::Character("Bob"), "Wait...", &["async"])
            .unwrap();

        let edges = stage.graph().edges();
        assert_eq!(edges[0].label, "Goodbye");
        assert_eq!(edges[0].source, "ACT 1.SCENE 1.Alice");
        assert_eq!(edges[0].target, "ACT 1.SCENE 1.Bob");
        assert_eq!(edges[1].label, "Wait..");
        assert_eq!(edges[1].tags, vec!["async"]);
    }

    #[test]
    fn test_address_direction() {
        let mut stage = stage_in_scene();
        stage.enter_character("Alice", &[]).unwrap();
        let index = stage.add_direction("Pause").unwrap();

        stage
            .address("Alice", Target::Direction(index), "", NO_TAGS)
            .unwrap();
        assert_eq!(stage.graph().edges()[0].target, "ACT 1.SCENE 1.1");
        assert_eq!(stage.graph().edges()[0].label, "");
    }

    #[test]
    fn test_address_unknown_node_is_dangling() {
        let mut stage = stage_in_scene();
        stage.enter_character("Alice", &[]).unwrap();
        let result = stage.address("Alice", Target::Direction(4), "", NO_TAGS);
        assert!(matches!(result, Err(PlayError::DanglingEdge { .. })));
    }

    proptest! {
        #[test]
        fn scene_resets_direction_counter(directions in 0usize..20, scenes in 1usize..5) {
            let mut stage = Stage::new(Vocabulary::default());
            stage.add_act().unwrap();
            for _ in 0..scenes {
                stage.add_scene().unwrap();
                for expected in 1..=directions {
                    prop_assert_eq!(stage.add_direction("x").unwrap() as usize, expected);
                }
            }
            stage.add_scene().unwrap();
            prop_assert_eq!(stage.current_direction(), 0);
            prop_assert_eq!(stage.add_direction("x").unwrap(), 1);
            prop_assert_eq!(stage.position().scene as usize, scenes + 1);
        }

        #[test]
        fn node_ids_are_unique(names in proptest::collection::vec("[A-Z][a-z]{0,6}", 1..10)) {
            let mut stage = stage_in_scene();
            for name in &names {
                stage.enter_character(name, &[]).unwrap();
            }
            let mut distinct = names.clone();
            distinct.sort();
            distinct.dedup();
            // one scene node plus one node per distinct name
            prop_assert_eq!(stage.graph().node_count(), distinct.len() + 1);
        }
    }
}
