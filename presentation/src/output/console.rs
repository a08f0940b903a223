//! Console formatter for conversation turns

use colored::Colorize;
use wayfarer_domain::{Conversation, Role, Turn};

/// Formats turns for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one turn, tagged by role.
    pub fn format_turn(turn: &Turn) -> String {
        format!("{} {}", Self::role_label(turn.role()), turn.content())
    }

    /// Format every visible turn in order, one block per turn.
    pub fn format_transcript(conversation: &Conversation) -> String {
        conversation
            .visible_turns()
            .into_iter()
            .map(Self::format_turn)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format a reply from the assistant.
    pub fn format_reply(text: &str) -> String {
        format!("{} {}", Self::role_label(Role::Assistant), text)
    }

    fn role_label(role: Role) -> String {
        match role {
            Role::User => "You:".cyan().bold().to_string(),
            Role::Assistant => "Assistant:".green().bold().to_string(),
            Role::System => "System:".dimmed().to_string(),
        }
    }

    /// Header shown when the REPL starts
    pub fn header(model: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Wayfarer - Travel Assistant".cyan().bold()));
        output.push_str(&format!("{} {}\n", "Model:".cyan(), model));
        output.push_str(&format!(
            "{}\n",
            "Try: 'Plan a 3-day trip to Tokyo under $500' or 'Suggest food spots in Paris for vegetarians'"
                .dimmed()
        ));
        output
    }
}
