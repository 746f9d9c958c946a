//! Reserved language constructs of the script DSL
//!
//! All syntax markers live here so that a configuration file can retarget the language
//! (see [`config`](crate::play::config)). The defaults are:
//!
//!     tags:        Alice: "A detective. [Detective, User]"
//!     addressing:  (To Bob[urgent], Ann)Go now.
//!     direction:   [Lights dim.]
//!     sentinel:    CURTAIN

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub tags_start: String,
    pub tags_end: String,
    pub values_separator: String,
    pub accost_start: String,
    pub accost_end: String,
    pub end: String,
    pub act_prefix: String,
    pub scene_prefix: String,
}

impl Vocabulary {
    /// Label of the act with the given counter value, e.g. `ACT 1`
    pub fn act_label(&self, act: u32) -> String {
        format!("{}{}", self.act_prefix, act)
    }

    /// Label of the scene with the given counter value, e.g. `SCENE 2`
    pub fn scene_label(&self, scene: u32) -> String {
        format!("{}{}", self.scene_prefix, scene)
    }

    /// True when the entry is the end-of-act sentinel
    pub fn is_end(&self, entry: &str) -> bool {
        entry == self.end
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            tags_start: "[".to_string(),
            tags_end: "]".to_string(),
            values_separator: ",".to_string(),
            accost_start: "(To ".to_string(),
            accost_end: ")".to_string(),
            end: "CURTAIN".to_string(),
            act_prefix: "ACT ".to_string(),
            scene_prefix: "SCENE ".to_string(),
        }
    }
}
