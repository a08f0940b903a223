//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for wayfarer
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(author, version, about = "Travel assistant chat backed by an OpenAI-compatible model")]
#[command(long_about = r#"
Wayfarer is a travel assistant. Travel questions are sent to the configured
model together with the conversation so far; anything else gets a polite
redirect without calling the model.

The API key and model are read from the environment (a ./.env file is loaded
first):
  DEEPSEEK_API_KEY   bearer credential for the completion service
  DEEPSEEK_MODEL     model identifier, e.g. deepseek/deepseek-chat

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./wayfarer.toml     Project-level config
3. ~/.config/wayfarer/config.toml   Global config

Example:
  wayfarer
  wayfarer "Plan a 3-day trip to Tokyo under $500"
  wayfarer -m openai/gpt-4o-mini --whole-word
"#)]
pub struct Cli {
    /// Ask a single question and exit (starts interactive chat when omitted)
    pub question: Option<String>,

    /// Model identifier (overrides config and environment)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Match topic keywords as whole words only
    #[arg(long)]
    pub whole_word: bool,

    /// Do not send the persona's system prompt to the model
    #[arg(long)]
    pub exclude_system_prompt: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
