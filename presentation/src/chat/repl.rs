//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;
use wayfarer_application::{HandleUserTurnUseCase, TurnOutcome};
use wayfarer_domain::Conversation;

/// What the REPL should do after a slash command
#[derive(Debug, PartialEq, Eq)]
enum CommandAction {
    Continue,
    Exit,
}

/// Interactive chat REPL
///
/// Owns the session's [`Conversation`] for as long as the loop runs.
/// A turn is fully handled before the next line is read.
pub struct ChatRepl {
    use_case: HandleUserTurnUseCase,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: HandleUserTurnUseCase, config: ReplConfig) -> Self {
        Self { use_case, config }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let mut conversation = self.use_case.start_session();
        self.print_welcome(&conversation);

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line, &conversation) == CommandAction::Exit {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_turn(&mut conversation, line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Safe travels!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self, conversation: &Conversation) {
        println!();
        print!("{}", ConsoleFormatter::header(&self.use_case.config().model));
        println!("Commands: /help, /history, /quit");
        println!();
        println!("{}", ConsoleFormatter::format_transcript(conversation));
        println!();
    }

    /// Handle slash commands.
    fn handle_command(&self, cmd: &str, conversation: &Conversation) -> CommandAction {
        match parse_command(cmd) {
            Some(SlashCommand::Quit) => {
                println!("Safe travels!");
                CommandAction::Exit
            }
            Some(SlashCommand::Help) => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?     - Show this help");
                println!("  /history          - Show the conversation so far");
                println!("  /model            - Show the current model");
                println!("  /quit, /exit, /q  - Exit chat");
                println!();
                CommandAction::Continue
            }
            Some(SlashCommand::History) => {
                println!();
                println!("{}", ConsoleFormatter::format_transcript(conversation));
                println!();
                CommandAction::Continue
            }
            Some(SlashCommand::Model) => {
                println!("Model: {}", self.use_case.config().model);
                CommandAction::Continue
            }
            None => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandAction::Continue
            }
        }
    }

    async fn process_turn(&self, conversation: &mut Conversation, text: &str) {
        println!();

        let reply = self.use_case.execute(conversation, text).await;
        if let TurnOutcome::Failed(cause) = &reply.outcome {
            debug!("Displaying apology after failure: {}", cause);
        }

        println!("{}", ConsoleFormatter::format_reply(&reply.text));
        println!();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SlashCommand {
    Help,
    History,
    Model,
    Quit,
}

fn parse_command(cmd: &str) -> Option<SlashCommand> {
    match cmd {
        "/quit" | "/exit" | "/q" => Some(SlashCommand::Quit),
        "/help" | "/h" | "/?" => Some(SlashCommand::Help),
        "/history" => Some(SlashCommand::History),
        "/model" | "/models" => Some(SlashCommand::Model),
        _ => None,
    }
}
