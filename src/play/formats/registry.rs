//! Output formats by name
//!
//! The CLI picks a [`Formatter`] from a [`FormatRegistry`] using the `--format` flag or the
//! `output.format` setting. `with_defaults` / `from_config` register `json`, `cytoscape` and
//! `treeviz`.

use crate::play::config::OutputConfig;
use crate::play::performance::Play;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

/// Renders a compiled play as text.
pub trait Formatter: Send + Sync {
    /// Registry key, also the value accepted by `--format`
    fn name(&self) -> &str;

    fn serialize(&self, play: &Play) -> Result<String, FormatError>;

    /// One line shown by `--list-formats`
    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Adds `formatter`, replacing any formatter of the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, play: &Play, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(play)
    }

    /// Format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `(name, description)` pairs, sorted by name
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.formatters
            .values()
            .map(|f| (f.name(), f.description()))
            .collect()
    }

    pub fn with_defaults() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    /// The built-in formats, with `output.pretty` applied to the JSON-based ones
    pub fn from_config(output: &OutputConfig) -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter::new(output.pretty));
        registry.register(super::CytoscapeFormatter::new(output.pretty));
        registry.register(super::TreevizFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::characters::CharacterRegistry;
    use crate::play::graph::PlayGraph;

    struct CountFormatter;

    impl Formatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }

        fn serialize(&self, play: &Play) -> Result<String, FormatError> {
            Ok(format!(
                "{} nodes, {} edges",
                play.graph.node_count(),
                play.graph.edge_count()
            ))
        }

        fn description(&self) -> &str {
            "Node and edge counts"
        }
    }

    fn empty_play() -> Play {
        Play {
            title: None,
            by: None,
            synopsis: None,
            characters: CharacterRegistry::new(),
            graph: PlayGraph::new(),
        }
    }

    #[test]
    fn test_register_custom_format() {
        let mut registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());

        registry.register(CountFormatter);
        assert!(registry.has("count"));
        assert_eq!(registry.describe(), vec![("count", "Node and edge counts")]);
    }

    #[test]
    fn test_serialize_by_name() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(CountFormatter);

        let result = registry.serialize(&empty_play(), "count");
        assert_eq!(result.unwrap(), "0 nodes, 0 edges");
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.serialize(&empty_play(), "dot").unwrap_err(),
            FormatError::FormatNotFound("dot".to_string())
        );
    }

    #[test]
    fn test_builtin_formats() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["cytoscape", "json", "treeviz"]
        );
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::FormatNotFound("dot".to_string());
        assert_eq!(err.to_string(), "Format 'dot' not found");
    }
}
