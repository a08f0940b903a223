//! Conversation domain entities

use crate::conversation::persona::Persona;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Whether turns with this role are shown to the user
    pub fn is_visible(&self) -> bool {
        !matches!(self, Role::System)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// A single message in a conversation (Entity)
///
/// Turns are immutable once built; the fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Build a turn from an untyped role string.
    pub fn parse(role: &str, content: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::new(role.parse()?, content))
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An append-only, chronologically ordered sequence of turns (Entity)
///
/// The first turn is always the persona's `system` turn. Turns are never
/// removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Start a new session seeded with the persona turn and the greeting.
    pub fn new(persona: &Persona) -> Self {
        Self {
            turns: vec![
                Turn::system(persona.system_prompt()),
                Turn::assistant(persona.greeting()),
            ],
        }
    }

    /// Add a turn at the end of the conversation.
    pub fn append(&mut self, turn: Turn) -> &mut Self {
        self.turns.push(turn);
        self
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns shown to the user, i.e. everything except `system` turns.
    pub fn visible_turns(&self) -> Vec<&Turn> {
        self.turns.iter().filter(|t| t.role().is_visible()).collect()
    }

    /// The seeding `system` turn.
    pub fn persona_turn(&self) -> &Turn {
        &self.turns[0]
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
