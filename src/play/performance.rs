//! Performance traversal
//!
//! Walks the plot in script order (act, scenes, remarks) and drives the [`Stage`]. Within a
//! scene it threads the currently speaking character:
//!
//! - a plain-text remark is a stage direction; the current speaker, if any, points at it
//! - `CURTAIN` ends the scene (or, in the scene list, the act)
//! - a `Name: [lines]` remark hands the floor to `Name`; the previous speaker points at the new
//!   one when the new one first enters the scene, then every line is classified and performed;
//!   every edge of a dialogue line carries all the tags written in its addressing clause
//!
//! Any failure aborts the whole performance; there is no partial graph.

use crate::play::characters::CharacterRegistry;
use crate::play::error::PlayError;
use crate::play::graph::PlayGraph;
use crate::play::remark::{direction_text, Dialogue, Remark};
use crate::play::script::{single_entry, RemarkEntry, SceneEntry, Script};
use crate::play::stage::{Stage, Target};
use crate::play::vocabulary::Vocabulary;
use tracing::{debug, warn};

const NO_TAGS: &[&str] = &[];

/// A compiled script
#[derive(Debug, Clone)]
pub struct Play {
    pub title: Option<String>,
    pub by: Option<String>,
    pub synopsis: Option<String>,
    pub characters: CharacterRegistry,
    pub graph: PlayGraph,
}

impl Play {
    /// Compile a parsed script.
    pub fn perform(script: &Script, vocabulary: &Vocabulary) -> Result<Self, PlayError> {
        let characters = CharacterRegistry::from_roster(script.roster()?, vocabulary)?;
        let graph = Performance::new(&characters, vocabulary.clone()).perform(script)?;

        Ok(Play {
            title: script.title.clone(),
            by: script.by.clone(),
            synopsis: script.synopsis.clone(),
            characters,
            graph,
        })
    }
}

/// One traversal over one script. Owns its stage; not reusable.
pub struct Performance<'a> {
    characters: &'a CharacterRegistry,
    stage: Stage,
}

impl<'a> Performance<'a> {
    pub fn new(characters: &'a CharacterRegistry, vocabulary: Vocabulary) -> Self {
        Performance {
            characters,
            stage: Stage::new(vocabulary),
        }
    }

    pub fn perform(mut self, script: &Script) -> Result<PlayGraph, PlayError> {
        self.stage.add_act()?;
        let scenes = script.act(&self.stage.current_act())?;
        self.perform_act(scenes)?;
        Ok(self.stage.into_graph())
    }

    fn perform_act(&mut self, scenes: &[SceneEntry]) -> Result<(), PlayError> {
        for (index, entry) in scenes.iter().enumerate() {
            if let SceneEntry::Marker(marker) = entry {
                if self.stage.vocabulary().is_end(marker) {
                    let ignored = scenes.len() - index - 1;
                    if ignored > 0 {
                        warn!(ignored, "entries after the end of the act are ignored");
                    }
                    break;
                }
            }

            self.stage.add_scene()?;
            let label = self.stage.current_scene();
            debug!(scene = %label, "scene");
            self.perform_scene(entry.remarks(&label)?)?;
        }
        Ok(())
    }

    fn perform_scene(&mut self, remarks: &[RemarkEntry]) -> Result<(), PlayError> {
        let mut current_character: Option<String> = None;

        for (index, remark) in remarks.iter().enumerate() {
            match remark {
                RemarkEntry::Direction(line) if self.stage.vocabulary().is_end(line) => {
                    let ignored = remarks.len() - index - 1;
                    if ignored > 0 {
                        warn!(ignored, "remarks after the end of the scene are ignored");
                    }
                    break;
                }
                RemarkEntry::Direction(line) => {
                    let text = direction_text(line, self.stage.vocabulary()).to_string();
                    self.perform_direction(&text, current_character.as_deref())?;
                }
                RemarkEntry::Speech(speech) => {
                    let (name, lines) = single_entry(speech, "speech")?;
                    let speaker = self.perform_speech(name, lines, current_character.as_deref())?;
                    current_character = Some(speaker);
                }
            }
        }
        Ok(())
    }

    fn perform_direction(&mut self, text: &str, speaker: Option<&str>) -> Result<u32, PlayError> {
        let index = self.stage.add_direction(text)?;
        if let Some(speaker) = speaker {
            self.stage
                .address(speaker, Target::Direction(index), "", NO_TAGS)?;
        }
        Ok(index)
    }

    /// Perform one character's lines; returns the speaker's roster name.
    fn perform_speech(
        &mut self,
        name: &str,
        lines: &[String],
        previous: Option<&str>,
    ) -> Result<String, PlayError> {
        let characters = self.characters;
        let character = characters.lookup(name)?;
        let speaker = character.name.as_str();

        let entered = self.stage.enter_character(speaker, &character.tags)?;
        match previous {
            Some(previous) if entered && previous != speaker => {
                self.stage
                    .address(previous, Target::Character(speaker), "", NO_TAGS)?;
            }
            _ => {}
        }

        for line in lines {
            match Remark::classify(line, self.stage.vocabulary()) {
                Remark::Direction(text) => {
                    self.perform_direction(&text, Some(speaker))?;
                }
                Remark::Dialogue(dialogue) => self.perform_dialogue(speaker, &dialogue)?,
            }
        }

        Ok(speaker.to_string())
    }

    fn perform_dialogue(&mut self, speaker: &str, dialogue: &Dialogue) -> Result<(), PlayError> {
        let characters = self.characters;
        let tags: Vec<&str> = dialogue.tags().into_iter().flatten().collect();
        for addressee in dialogue.addressees.iter().filter(|a| !a.is_empty()) {
            let listener = characters.lookup(&addressee.name)?;
            self.stage.enter_character(&listener.name, &listener.tags)?;

            self.stage.address(
                speaker,
                Target::Character(&listener.name),
                &dialogue.text,
                &tags,
            )?;
        }
        Ok(())
    }
}
