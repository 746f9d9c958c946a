//! Main module for playscript library functionality
//!
//! Leaves first: `vocabulary` and `lexical` hold the DSL syntax, `characters` and `remark`
//! parse the free-text fields, `stage` is the graph builder and `performance` drives it
//! over a parsed `script`.

pub mod cast;
pub mod characters;
pub mod config;
pub mod error;
pub mod formats;
pub mod graph;
pub mod lexical;
pub mod loader;
pub mod performance;
pub mod remark;
pub mod script;
pub mod stage;
pub mod testing;
pub mod transforms;
pub mod vocabulary;

pub use error::PlayError;
pub use graph::{Edge, Node, NodeKind, PlayGraph};
pub use loader::ScriptLoader;
pub use performance::Play;
