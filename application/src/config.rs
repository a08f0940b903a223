//! Application-level configuration.
//!
//! Settings that control how the session controller behaves, independent of
//! where they were loaded from.

use wayfarer_domain::{Persona, SystemPromptPolicy};

/// Session behavior configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Whether the persona turn is sent to the model.
    pub system_prompt: SystemPromptPolicy,
    /// Texts for the greeting, deflection and apology.
    pub persona: Persona,
}

impl SessionConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: SystemPromptPolicy::default(),
            persona: Persona::default(),
        }
    }

    pub fn with_system_prompt_policy(mut self, policy: SystemPromptPolicy) -> Self {
        self.system_prompt = policy;
        self
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }
}
