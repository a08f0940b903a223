//! Topic gating.
//!
//! - [`classifier::TopicClassifier`] — the seam the session controller uses
//! - [`classifier::KeywordClassifier`] — keyword containment over a vocabulary
//! - [`keywords::TRAVEL_KEYWORDS`] — the built-in travel vocabulary

pub mod classifier;
pub mod keywords;
