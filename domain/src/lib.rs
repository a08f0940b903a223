//! Domain layer for wayfarer
//!
//! This crate contains the conversation model and topic gating.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A session owns one [`Conversation`]: an append-only list of [`Turn`]s
//! seeded with the [`Persona`]'s system prompt and greeting.
//!
//! ## Topic gating
//!
//! Every user turn goes through a [`TopicClassifier`]. Only on-topic turns
//! reach the completion service; the rest get the persona's deflection.

pub mod conversation;
pub mod core;
pub mod topic;

// Re-export commonly used types
pub use conversation::{
    entities::{Conversation, Role, Turn},
    persona::Persona,
    request::{CompletionRequest, SystemPromptPolicy},
    state::SessionState,
};
pub use core::error::DomainError;
pub use topic::{
    classifier::{KeywordClassifier, MatchMode, TopicClassifier, is_on_topic},
    keywords::TRAVEL_KEYWORDS,
};
