//! Lexical helpers shared by the registry, the remark classifier and the stage
//!
//! These never fail: an opened but unclosed tag bracket degrades to ordinary text, and the
//! caller decides whether that deserves a warning.

use crate::play::vocabulary::Vocabulary;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that cannot appear in a renderer class name
static CLASS_NAME_UNSAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

/// Result of looking for a tag bracket inside a free-text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracketed<'a> {
    /// No tag bracket at all
    Plain(&'a str),
    /// `text [inner]`; `text` is everything before the opening bracket
    Tagged { text: &'a str, inner: &'a str },
    /// A bracket was opened but never closed; the whole value is ordinary text
    Unclosed(&'a str),
}

/// Split `value` around its first tag bracket pair.
pub fn bracketed<'a>(value: &'a str, vocabulary: &Vocabulary) -> Bracketed<'a> {
    let Some(start) = value.find(vocabulary.tags_start.as_str()) else {
        return Bracketed::Plain(value);
    };
    let after_open = &value[start + vocabulary.tags_start.len()..];
    match after_open.find(vocabulary.tags_end.as_str()) {
        Some(end) => Bracketed::Tagged {
            text: &value[..start],
            inner: &after_open[..end],
        },
        None => Bracketed::Unclosed(value),
    }
}

/// Split a tag list body on the separator, trimming each token and skipping empty ones.
pub fn split_tag_list(inner: &str, vocabulary: &Vocabulary) -> Vec<String> {
    inner
        .split(vocabulary.values_separator.as_str())
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// The text inside an enclosing tag bracket pair, verbatim.
///
/// Returns `None` when `text` is not enclosed (both markers are required).
pub fn strip_enclosing<'a>(text: &'a str, vocabulary: &Vocabulary) -> Option<&'a str> {
    let inner = text.strip_prefix(vocabulary.tags_start.as_str())?;
    inner.strip_suffix(vocabulary.tags_end.as_str())
}

/// Trim and drop one trailing full stop (and only one).
pub fn remove_trailing_dot(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.strip_suffix('.') {
        Some(stripped) => stripped.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Renderer class name for a tag: `tag-` followed by the sanitized tag.
pub fn tag_class_name(tag: &str) -> String {
    format!("tag-{}", CLASS_NAME_UNSAFE.replace_all(tag, "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bracketed_plain() {
        let vocabulary = Vocabulary::default();
        assert_eq!(
            bracketed("Just a voice", &vocabulary),
            Bracketed::Plain("Just a voice")
        );
    }

    #[test]
    fn test_bracketed_tagged() {
        let vocabulary = Vocabulary::default();
        assert_eq!(
            bracketed("A spy. [Agent, User] trailing", &vocabulary),
            Bracketed::Tagged {
                text: "A spy. ",
                inner: "Agent, User"
            }
        );
    }

    #[test]
    fn test_bracketed_unclosed() {
        let vocabulary = Vocabulary::default();
        assert_eq!(
            bracketed("Bob [urgent", &vocabulary),
            Bracketed::Unclosed("Bob [urgent")
        );
    }

    #[test]
    fn test_split_tag_list() {
        let vocabulary = Vocabulary::default();
        assert_eq!(
            split_tag_list(" Agent ,User,, ", &vocabulary),
            vec!["Agent", "User"]
        );
        assert!(split_tag_list("", &vocabulary).is_empty());
    }

    #[test]
    fn test_strip_enclosing() {
        let vocabulary = Vocabulary::default();
        assert_eq!(strip_enclosing("[ Lights dim. ]", &vocabulary), Some(" Lights dim. "));
        assert_eq!(strip_enclosing("[]", &vocabulary), Some(""));
        assert_eq!(strip_enclosing("Lights dim.", &vocabulary), None);
        assert_eq!(strip_enclosing("[Lights dim.", &vocabulary), None);
    }

    #[test]
    fn test_remove_trailing_dot() {
        assert_eq!(remove_trailing_dot("Goodbye."), "Goodbye");
        assert_eq!(remove_trailing_dot("Wait..."), "Wait..");
        assert_eq!(remove_trailing_dot(" Hello there. "), "Hello there");
        assert_eq!(remove_trailing_dot("No dot"), "No dot");
        assert_eq!(remove_trailing_dot(""), "");
    }

    #[test]
    fn test_tag_class_name() {
        assert_eq!(tag_class_name("User"), "tag-User");
        assert_eq!(tag_class_name("3rd party"), "tag-3rd_party");
        assert_eq!(tag_class_name("Out of scope"), "tag-Out_of_scope");
        assert_eq!(tag_class_name("a.b/c"), "tag-a_b_c");
    }

    proptest! {
        #[test]
        fn remove_trailing_dot_strips_exactly_one(body in "[a-z]{1,10}", dots in 1usize..5) {
            let text = format!("{}{}", body, ".".repeat(dots));
            let expected = format!("{}{}", body, ".".repeat(dots - 1));
            prop_assert_eq!(remove_trailing_dot(&text), expected);
        }

        #[test]
        fn tag_class_name_is_always_safe(tag in ".*") {
            let class = tag_class_name(&tag);
            prop_assert!(class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
        }
    }
}
