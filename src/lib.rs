//! # playscript
//!
//! A compiler from screenplay-like scripts to an abstract "who addresses whom" graph.
//!
//! A script is a YAML document with a cast list and a plot (acts, scenes, stage directions and
//! character dialogue). The compiler walks the plot in script order and builds a hierarchical
//! node/edge model with deterministic identifiers, which is then handed to an external renderer
//! through one of the [output formats](play::formats).
//!
//! For the whole pipeline, start at [`ScriptLoader`](play::loader::ScriptLoader).

pub mod play;
