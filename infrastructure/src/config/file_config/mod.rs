//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod persona;
mod provider;
mod repl;
mod session;
mod topic;

pub use output::FileOutputConfig;
pub use persona::FilePersonaConfig;
pub use provider::{FileProviderConfig, ProviderSettings};
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;
pub use topic::FileTopicConfig;

use serde::{Deserialize, Serialize};
use wayfarer_application::SessionConfig;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion service settings
    pub provider: FileProviderConfig,
    /// Session behavior
    pub session: FileSessionConfig,
    /// Topic gating
    pub topic: FileTopicConfig,
    /// Persona text overrides
    pub persona: FilePersonaConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Build the session controller's configuration for `model`.
    pub fn session_config(&self, model: impl Into<String>) -> SessionConfig {
        SessionConfig::new(model)
            .with_system_prompt_policy(self.session.system_prompt_policy())
            .with_persona(self.persona.to_persona())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_domain::{MatchMode, Persona, SystemPromptPolicy};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
base_url = "https://llm.example.com/v1"
api_key_env = "OPENROUTER_API_KEY"
model = "deepseek/deepseek-chat"
timeout_seconds = 45
title = "Wayfarer"

[session]
include_system_prompt = false

[topic]
match_mode = "whole_word"
extra_keywords = ["ferry"]

[persona]
greeting = "Where to next?"

[repl]
show_progress = false
history_file = "~/.local/share/wayfarer/history.txt"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.base_url, "https://llm.example.com/v1");
        assert_eq!(config.provider.api_key_env, "OPENROUTER_API_KEY");
        assert_eq!(config.provider.model_env, "DEEPSEEK_MODEL");
        assert_eq!(config.provider.timeout_seconds, 45);
        assert_eq!(config.provider.title.as_deref(), Some("Wayfarer"));
        assert!(!config.session.include_system_prompt);
        assert_eq!(config.topic.match_mode, MatchMode::WholeWord);
        assert_eq!(config.topic.extra_keywords, vec!["ferry".to_string()]);
        assert!(!config.repl.show_progress);
        assert!(!config.output.color);

        let session = config.session_config("m");
        assert_eq!(session.system_prompt, SystemPromptPolicy::Exclude);
        assert_eq!(session.persona.greeting(), "Where to next?");
        assert_eq!(session.persona.apology(), Persona::travel().apology());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[provider]
timeout_seconds = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.timeout_seconds, 10);
        // Defaults should apply
        assert_eq!(config.provider.api_key_env, "DEEPSEEK_API_KEY");
        assert!(config.session.include_system_prompt);
        assert_eq!(config.topic.match_mode, MatchMode::Substring);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.provider.model.is_none());
        assert_eq!(config.provider.timeout_seconds, 30);
        assert!(config.topic.extra_keywords.is_empty());
        assert_eq!(config.persona.to_persona(), Persona::travel());
        assert_eq!(
            config.session_config("m").system_prompt,
            SystemPromptPolicy::Include
        );
    }
}
