//! Topic gating configuration from TOML (`[topic]` section)

use serde::{Deserialize, Serialize};
use wayfarer_domain::{KeywordClassifier, MatchMode};

/// Raw topic configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTopicConfig {
    /// `"substring"` (default) or `"whole_word"`
    pub match_mode: MatchMode,
    /// Keywords added to the built-in travel vocabulary
    pub extra_keywords: Vec<String>,
}

impl FileTopicConfig {
    pub fn to_classifier(&self) -> KeywordClassifier {
        KeywordClassifier::travel()
            .with_keywords(&self.extra_keywords)
            .with_match_mode(self.match_mode)
    }
}
