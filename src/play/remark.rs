//! Remark classifier
//!
//! One line of a character's speech is either a stage direction or a piece of dialogue:
//!
//!     [Lights dim.]                       -> Remark::Direction("Lights dim.")
//!     (To Bob[urgent], Ann)Go now.        -> Remark::Dialogue { Bob (urgent), Ann; "Go now." }
//!
//! Dialogue is recognized by the addressing marker at the very start of the line; anything
//! else is a direction.

use crate::play::lexical::{bracketed, strip_enclosing, Bracketed};
use crate::play::vocabulary::Vocabulary;
use tracing::warn;

/// A recipient of a dialogue line, with its optional inline tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addressee {
    pub name: String,
    pub tag: Option<String>,
}

impl Addressee {
    /// Parse one addressee token: `Bob` or `Bob [urgent]`.
    fn parse(token: &str, vocabulary: &Vocabulary) -> Self {
        match bracketed(token, vocabulary) {
            Bracketed::Tagged { text, inner } => Addressee {
                name: text.trim().to_string(),
                tag: Some(inner.trim().to_string()),
            },
            Bracketed::Plain(text) => Addressee {
                name: text.trim().to_string(),
                tag: None,
            },
            Bracketed::Unclosed(text) => {
                warn!(addressee = text, "unclosed addressee tag, treating it as part of the name");
                Addressee {
                    name: text.trim().to_string(),
                    tag: None,
                }
            }
        }
    }

    /// Empty tokens come from trailing separators and are skipped downstream.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialogue {
    /// Recipients in the order they were written, empty tokens included
    pub addressees: Vec<Addressee>,
    /// Everything after the addressing clause, untrimmed
    pub text: String,
}

impl Dialogue {
    /// Per-addressee tags, one slot per addressee.
    pub fn tags(&self) -> Vec<Option<&str>> {
        self.addressees.iter().map(|a| a.tag.as_deref()).collect()
    }

    pub fn addressee_names(&self) -> Vec<&str> {
        self.addressees.iter().map(|a| a.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remark {
    Direction(String),
    Dialogue(Dialogue),
}

impl Remark {
    pub fn classify(line: &str, vocabulary: &Vocabulary) -> Self {
        let Some(accost) = line.strip_prefix(vocabulary.accost_start.as_str()) else {
            return Remark::Direction(direction_text(line, vocabulary).to_string());
        };

        let Some(end) = accost.find(vocabulary.accost_end.as_str()) else {
            warn!(line, "addressing clause is never closed, treating the line as a direction");
            return Remark::Direction(line.to_string());
        };

        let addressees = accost[..end]
            .split(vocabulary.values_separator.as_str())
            .map(|token| Addressee::parse(token, vocabulary))
            .collect();
        let text = accost[end + vocabulary.accost_end.len()..].to_string();

        Remark::Dialogue(Dialogue { addressees, text })
    }
}

/// The text of a stage direction: the inside of its enclosing brackets, verbatim.
///
/// A direction that is not enclosed is taken as it is.
pub fn direction_text<'a>(line: &'a str, vocabulary: &Vocabulary) -> &'a str {
    match strip_enclosing(line, vocabulary) {
        Some(inner) => inner,
        None => {
            warn!(line, "stage direction is not bracketed, using it verbatim");
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(line: &str) -> Remark {
        Remark::classify(line, &Vocabulary::default())
    }

    fn dialogue(line: &str) -> Dialogue {
        match classify(line) {
            Remark::Dialogue(dialogue) => dialogue,
            other => panic!("expected dialogue, got {:?}", other),
        }
    }

    #[rstest]
    #[case("[Lights dim.]", "Lights dim.")]
    #[case("[ Lights dim. ]", " Lights dim. ")]
    #[case("[]", "")]
    #[case("Lights dim.", "Lights dim.")]
    #[case("(aside)", "(aside)")]
    #[case("[Half open.", "[Half open.")]
    #[case("(to Bob)lowercase marker", "(to Bob)lowercase marker")]
    fn test_direction(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(classify(line), Remark::Direction(expected.to_string()));
    }

    #[test]
    fn test_single_addressee() {
        let dialogue = dialogue("(To Bob)Hello there.");
        assert_eq!(dialogue.addressee_names(), vec!["Bob"]);
        assert_eq!(dialogue.tags(), vec![None::<&str>]);
        assert_eq!(dialogue.text, "Hello there.");
    }

    #[test]
    fn test_tagged_addressees() {
        let dialogue = dialogue("(To Bob[urgent], Ann)Go now.");
        assert_eq!(dialogue.addressee_names(), vec!["Bob", "Ann"]);
        assert_eq!(dialogue.tags(), vec![Some("urgent"), None]);
        assert_eq!(dialogue.text, "Go now.");
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let dialogue = dialogue("(To Bob)  spaced out. ");
        assert_eq!(dialogue.text, "  spaced out. ");
    }

    #[test]
    fn test_text_keeps_later_close_markers() {
        let dialogue = dialogue("(To Bob)Call me (later).");
        assert_eq!(dialogue.text, "Call me (later).");
    }

    #[test]
    fn test_trailing_separator_yields_empty_addressee() {
        let dialogue = dialogue("(To Bob,)Hi.");
        assert_eq!(dialogue.addressees.len(), 2);
        assert!(!dialogue.addressees[0].is_empty());
        assert!(dialogue.addressees[1].is_empty());
    }

    #[test]
    fn test_unclosed_addressee_tag_is_part_of_name() {
        let dialogue = dialogue("(To Bob [urgent)Hi.");
        assert_eq!(dialogue.addressee_names(), vec!["Bob [urgent"]);
        assert_eq!(dialogue.tags(), vec![None::<&str>]);
    }

    #[test]
    fn test_unclosed_addressing_clause_degrades_to_direction() {
        assert_eq!(
            classify("(To Bob Hi."),
            Remark::Direction("(To Bob Hi.".to_string())
        );
    }
}
