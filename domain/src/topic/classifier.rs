//! Keyword-based topic classifier

use super::keywords::TRAVEL_KEYWORDS;
use serde::{Deserialize, Serialize};

/// Decides whether a user turn belongs to the assistant's topic.
///
/// Implementations must be pure: same input, same answer, no side effects.
pub trait TopicClassifier: Send + Sync {
    fn is_on_topic(&self, text: &str) -> bool;
}

/// How a keyword has to appear in the text to count as a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Anywhere, including inside other words ("go" hits "mango").
    #[default]
    Substring,
    /// Only when bounded by non-alphanumeric characters or the ends of the text.
    WholeWord,
}

/// Classifies by case-insensitive keyword containment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
    match_mode: MatchMode,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::travel()
    }
}

impl KeywordClassifier {
    /// Classifier over the built-in travel vocabulary.
    pub fn travel() -> Self {
        Self::new(TRAVEL_KEYWORDS.iter().copied())
    }

    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: Vec::new(),
            match_mode: MatchMode::default(),
        }
        .with_keywords(keywords)
    }

    /// Add keywords; blanks and duplicates are skipped.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !self.keywords.contains(&keyword) {
                self.keywords.push(keyword);
            }
        }
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// The first keyword found in `text`, if any.
    pub fn matched_keyword(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .find(|k| match self.match_mode {
                MatchMode::Substring => lower.contains(k.as_str()),
                MatchMode::WholeWord => contains_whole_word(&lower, k),
            })
            .map(String::as_str)
    }
}

impl TopicClassifier for KeywordClassifier {
    fn is_on_topic(&self, text: &str) -> bool {
        self.matched_keyword(text).is_some()
    }
}

/// Whether `text` mentions travel, using the built-in vocabulary and
/// substring matching.
pub fn is_on_topic(text: &str) -> bool {
    let lower = text.to_lowercase();
    TRAVEL_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
