//! Character registry
//!
//! The roster is an ordered list of one-key records, `name: "description [tag, tag]"`. Each entry
//! becomes an immutable [`Character`]; names are matched case-insensitively and must be unique
//! under that rule.

use crate::play::error::PlayError;
use crate::play::lexical::{bracketed, split_tag_list, Bracketed};
use crate::play::vocabulary::Vocabulary;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Character {
    /// Parse one roster value into a character.
    ///
    /// `"A spy. [Agent, User]"` gives description `"A spy."` and tags `["Agent", "User"]`. A tag
    /// bracket that is never closed is kept as part of the description.
    pub fn parse(name: &str, value: &str, vocabulary: &Vocabulary) -> Self {
        let value = value.trim();
        let (description, tags) = match bracketed(value, vocabulary) {
            Bracketed::Plain(text) => (text, Vec::new()),
            Bracketed::Tagged { text, inner } => (text.trim(), split_tag_list(inner, vocabulary)),
            Bracketed::Unclosed(text) => {
                warn!(character = name, "unclosed tag list, treating it as description text");
                (text, Vec::new())
            }
        };

        Character {
            name: name.to_string(),
            description: description.to_string(),
            tags,
        }
    }
}

/// All characters of a script, keyed by upper-cased name, in roster order
#[derive(Debug, Clone, Default)]
pub struct CharacterRegistry {
    characters: IndexMap<String, Character>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from `(name, value)` roster entries.
    pub fn from_roster<'a, I>(entries: I, vocabulary: &Vocabulary) -> Result<Self, PlayError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut registry = Self::new();
        for (name, value) in entries {
            registry.insert(Character::parse(name, value, vocabulary))?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, character: Character) -> Result<(), PlayError> {
        let key = character.name.to_uppercase();
        if self.characters.contains_key(&key) {
            return Err(PlayError::DuplicateCharacter {
                name: character.name,
            });
        }
        self.characters.insert(key, character);
        Ok(())
    }

    /// Find a character by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Result<&Character, PlayError> {
        self.characters
            .get(&name.to_uppercase())
            .ok_or_else(|| PlayError::UnknownCharacter {
                name: name.to_string(),
            })
    }

    /// Tags of the named character, ignoring case.
    pub fn tags(&self, name: &str) -> Result<&[String], PlayError> {
        self.lookup(name).map(|character| character.tags.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
