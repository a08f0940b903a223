//! Assistant persona: the fixed texts that frame a session.

use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str = "You are a smart and friendly travel assistant. \
You help users plan trips, suggest destinations, find hotels and flights, \
recommend food, activities, local tips, and answer travel-related questions. \
Always ask for the destination, dates, budget, and preferences if not provided.";

const GREETING: &str = "Hello! I'm your travel assistant. Where are you planning to go?";

const DEFLECTION: &str = "I'm your travel assistant, designed to help with travel-related \
questions and planning. Could you please ask me something about travel, destinations, \
flights, accommodations, or activities? I'd be happy to assist you with your travel needs!";

const APOLOGY: &str = "I'm sorry, I encountered an error while processing your request.";

/// The persona a session runs under (Value Object)
///
/// - `system_prompt`: instructions sent as the first `system` turn
/// - `greeting`: the first assistant turn the user sees
/// - `deflection`: reply for off-topic input
/// - `apology`: reply when the completion service fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    system_prompt: String,
    greeting: String,
    deflection: String,
    apology: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self::travel()
    }
}

impl Persona {
    /// The travel assistant persona.
    pub fn travel() -> Self {
        Self {
            system_prompt: SYSTEM_PROMPT.to_string(),
            greeting: GREETING.to_string(),
            deflection: DEFLECTION.to_string(),
            apology: APOLOGY.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_deflection(mut self, deflection: impl Into<String>) -> Self {
        self.deflection = deflection.into();
        self
    }

    pub fn with_apology(mut self, apology: impl Into<String>) -> Self {
        self.apology = apology.into();
        self
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn deflection(&self) -> &str {
        &self.deflection
    }

    pub fn apology(&self) -> &str {
        &self.apology
    }
}
