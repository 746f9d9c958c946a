//! Output formats for compiled plays
//!
//! This module contains the serializers handed to external renderers:
//! - json: the plain node/edge model with script metadata
//! - cytoscape: an element list with renderer class names
//! - treeviz: a one line per node text tree, for reading in a terminal

pub mod cytoscape;
pub mod json;
pub mod registry;
pub mod treeviz;

pub use cytoscape::CytoscapeFormatter;
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
