//! Errors raised while loading, compiling or serializing a script
//!
//! Compilation is all-or-nothing: any of these aborts the traversal and no partial graph is
//! returned.

use crate::play::formats::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayError {
    #[error("Unknown character '{name}': not listed in CHARACTERS")]
    UnknownCharacter { name: String },

    #[error("Character '{name}' is listed more than once in CHARACTERS")]
    DuplicateCharacter { name: String },

    #[error("Only single-act plays are supported")]
    UnsupportedMultiAct,

    #[error("Plot has no section labelled '{label}'")]
    MissingSection { label: String },

    #[error("Malformed script: {message}")]
    MalformedScript { message: String },

    #[error("Edge endpoint '{endpoint}' does not exist in the graph")]
    DanglingEdge { endpoint: String },

    #[error("Node id '{id}' is already used by a different kind of node")]
    IdentifierCollision { id: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl PlayError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        PlayError::MalformedScript {
            message: message.into(),
        }
    }
}
