//! Persona overrides from TOML (`[persona]` section)

use serde::{Deserialize, Serialize};
use wayfarer_domain::Persona;

/// Raw persona overrides; unset fields keep the travel persona's text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonaConfig {
    pub system_prompt: Option<String>,
    pub greeting: Option<String>,
    pub deflection: Option<String>,
    pub apology: Option<String>,
}

impl FilePersonaConfig {
    pub fn to_persona(&self) -> Persona {
        let mut persona = Persona::travel();
        if let Some(text) = &self.system_prompt {
            persona = persona.with_system_prompt(text.as_str());
        }
        if let Some(text) = &self.greeting {
            persona = persona.with_greeting(text.as_str());
        }
        if let Some(text) = &self.deflection {
            persona = persona.with_deflection(text.as_str());
        }
        if let Some(text) = &self.apology {
            persona = persona.with_apology(text.as_str());
        }
        persona
    }
}
