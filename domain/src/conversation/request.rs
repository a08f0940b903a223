//! Completion request value object

use crate::conversation::entities::{Conversation, Role, Turn};
use serde::{Deserialize, Serialize};

/// Whether the persona `system` turn travels with a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemPromptPolicy {
    /// Send the persona turn first so the model honours it.
    #[default]
    Include,
    /// Send only user and assistant turns.
    Exclude,
}

impl SystemPromptPolicy {
    pub fn from_include_flag(include: bool) -> Self {
        if include { Self::Include } else { Self::Exclude }
    }
}

/// The ordered turns sent to the completion service, paired with a model id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Turn>,
}

impl CompletionRequest {
    /// Build a request from the conversation.
    ///
    /// User and assistant turns keep their original order. Under
    /// [`SystemPromptPolicy::Include`] the leading persona turn is kept too.
    pub fn from_conversation(
        conversation: &Conversation,
        model: impl Into<String>,
        policy: SystemPromptPolicy,
    ) -> Self {
        let messages = conversation
            .turns()
            .iter()
            .enumerate()
            .filter(|(i, t)| match t.role() {
                Role::System => policy == SystemPromptPolicy::Include && *i == 0,
                Role::User | Role::Assistant => true,
            })
            .map(|(_, t)| t.clone())
            .collect();

        Self {
            model: model.into(),
            messages,
        }
    }

    pub fn includes_system_prompt(&self) -> bool {
        self.messages
            .first()
            .is_some_and(|t| t.role() == Role::System)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::persona::Persona;

    fn conversation() -> Conversation {
        let mut conv = Conversation::new(&Persona::default());
        conv.append(Turn::user("Suggest food spots in Paris for vegetarians"))
            .append(Turn::assistant("Try Le Potager du Marais."))
            .append(Turn::system("internal note"))
            .append(Turn::user("And in Lyon?"));
        conv
    }

    #[test]
    fn test_exclude_keeps_only_dialogue() {
        let request = CompletionRequest::from_conversation(
            &conversation(),
            "deepseek/deepseek-chat",
            SystemPromptPolicy::Exclude,
        );

        assert_eq!(request.model, "deepseek/deepseek-chat");
        assert!(!request.includes_system_prompt());
        let roles: Vec<Role> = request.messages.iter().map(|t| t.role()).collect();
        assert_eq!(
            roles,
            vec![Role::Assistant, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(request.messages.last().unwrap().content(), "And in Lyon?");
    }

    #[test]
    fn test_include_prepends_persona_only() {
        let request = CompletionRequest::from_conversation(
            &conversation(),
            "m",
            SystemPromptPolicy::Include,
        );

        assert!(request.includes_system_prompt());
        assert_eq!(request.messages.len(), 5);
        assert_eq!(
            request.messages[0].content(),
            Persona::default().system_prompt()
        );
        assert!(request.messages.iter().all(|t| t.content() != "internal note"));
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(SystemPromptPolicy::from_include_flag(true), SystemPromptPolicy::Include);
        assert_eq!(SystemPromptPolicy::from_include_flag(false), SystemPromptPolicy::Exclude);
    }
}
