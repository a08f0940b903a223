//! Session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use wayfarer_domain::SystemPromptPolicy;

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Send the persona's system prompt with every completion request
    pub include_system_prompt: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            include_system_prompt: true,
        }
    }
}

impl FileSessionConfig {
    pub fn system_prompt_policy(&self) -> SystemPromptPolicy {
        SystemPromptPolicy::from_include_flag(self.include_system_prompt)
    }
}
