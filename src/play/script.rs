//! Typed view of a script document
//!
//! A script is YAML with the top-level keys `TITLE`, `BY`, `SYNOPSIS`, `CHARACTERS` and `PLOT`:
//!
//! ```yaml
//! TITLE: Login
//! CHARACTERS:
//!   - User: "Someone at a keyboard. [User]"
//!   - Server: "The backend. [3rd party]"
//! PLOT:
//!   - ACT 1:
//!       - SCENE 1:
//!           - "[The login page loads.]"
//!           - User:
//!               - "(To Server)Here are my credentials."
//!       - CURTAIN
//! ```
//!
//! Loading is left to `serde_yaml`; this module only checks the shapes the compiler relies on
//! (single-key records, the labelled act and scenes).

use crate::play::error::PlayError;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    #[serde(rename = "TITLE", default)]
    pub title: Option<String>,
    #[serde(rename = "BY", default)]
    pub by: Option<String>,
    #[serde(rename = "SYNOPSIS", default)]
    pub synopsis: Option<String>,
    #[serde(rename = "CHARACTERS", default)]
    pub characters: Vec<IndexMap<String, String>>,
    #[serde(rename = "PLOT")]
    pub plot: Vec<IndexMap<String, Vec<SceneEntry>>>,
}

/// An entry of an act: a labelled scene, or a bare marker such as `CURTAIN`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SceneEntry {
    Marker(String),
    Scene(IndexMap<String, Vec<RemarkEntry>>),
}

/// An entry of a scene: a stage direction, or a character with their lines
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RemarkEntry {
    Direction(String),
    Speech(IndexMap<String, Vec<String>>),
}

impl Script {
    pub fn from_yaml(source: &str) -> Result<Self, PlayError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Roster entries as `(name, description)` pairs, in order.
    pub fn roster(&self) -> Result<Vec<(&str, &str)>, PlayError> {
        self.characters
            .iter()
            .map(|record| single_entry(record, "CHARACTERS entry"))
            .map(|entry| entry.map(|(name, value)| (name, value.as_str())))
            .collect()
    }

    /// The scene list of the act labelled `label`.
    ///
    /// Only the first plot element is read, and only the requested act of it.
    pub fn act(&self, label: &str) -> Result<&[SceneEntry], PlayError> {
        let acts = self
            .plot
            .first()
            .ok_or_else(|| PlayError::malformed("PLOT is empty"))?;
        if self.plot.len() > 1 || acts.len() > 1 {
            warn!(act = label, "only one act is performed, ignoring the rest of PLOT");
        }
        acts.get(label)
            .map(Vec::as_slice)
            .ok_or_else(|| PlayError::MissingSection {
                label: label.to_string(),
            })
    }
}

impl SceneEntry {
    /// The remarks of this entry when it is the scene labelled `label`.
    pub fn remarks(&self, label: &str) -> Result<&[RemarkEntry], PlayError> {
        match self {
            SceneEntry::Scene(scene) => scene
                .get(label)
                .map(Vec::as_slice)
                .ok_or_else(|| PlayError::MissingSection {
                    label: label.to_string(),
                }),
            SceneEntry::Marker(marker) => Err(PlayError::malformed(format!(
                "expected '{}', found '{}'",
                label, marker
            ))),
        }
    }
}

/// The only key and value of a single-key record.
pub(crate) fn single_entry<'a, V>(
    record: &'a IndexMap<String, V>,
    what: &str,
) -> Result<(&'a str, &'a V), PlayError> {
    match record.len() {
        1 => {
            let (key, value) = record
                .first()
                .ok_or_else(|| PlayError::malformed(format!("empty {}", what)))?;
            Ok((key.as_str(), value))
        }
        n => Err(PlayError::malformed(format!(
            "{} must have exactly one key, found {}",
            what, n
        ))),
    }
}
