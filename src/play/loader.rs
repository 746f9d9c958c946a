//! Script loading utilities
//!
//! `ScriptLoader` reads a script from a file or a string and runs the compilation transforms on
//! it. It is used by the CLI and by tests.
//!
//! ```rust,ignore
//! use playscript::play::loader::ScriptLoader;
//!
//! // From file
//! let play = ScriptLoader::from_path("login.yaml")?.perform()?;
//!
//! // From string, only the parsed document
//! let script = ScriptLoader::from_string(source).parse()?;
//! ```

use crate::play::cast::Cast;
use crate::play::characters::CharacterRegistry;
use crate::play::error::PlayError;
use crate::play::performance::Play;
use crate::play::script::Script;
use crate::play::transforms::{play_transform, ParseScript, Runnable};
use crate::play::vocabulary::Vocabulary;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct ScriptLoader {
    source: String,
    vocabulary: Vocabulary,
}

impl ScriptLoader {
    /// Load a script from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PlayError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading script");
        let source = fs::read_to_string(path)?;
        Ok(Self::from_string(source))
    }

    /// Load a script from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        ScriptLoader {
            source: source.into(),
            vocabulary: Vocabulary::default(),
        }
    }

    /// Use a non-default vocabulary
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the document without compiling it
    pub fn parse(&self) -> Result<Script, PlayError> {
        ParseScript.run(self.source.clone())
    }

    /// Compile the script into a play
    pub fn perform(&self) -> Result<Play, PlayError> {
        play_transform(self.vocabulary.clone()).run(self.source.clone())
    }

    /// The cast list of the script, as a play whose graph introduces every character.
    ///
    /// The plot is not performed.
    pub fn cast(&self) -> Result<Play, PlayError> {
        let script = self.parse()?;
        let characters = CharacterRegistry::from_roster(script.roster()?, &self.vocabulary)?;
        let graph = Cast::from_registry(&characters)?;

        Ok(Play {
            title: script.title,
            by: script.by,
            synopsis: script.synopsis,
            characters,
            graph,
        })
    }
}
