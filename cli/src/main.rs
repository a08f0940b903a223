//! CLI entrypoint for wayfarer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wayfarer_application::HandleUserTurnUseCase;
use wayfarer_domain::MatchMode;
use wayfarer_infrastructure::{ConfigLoader, ConfigurationError, OpenRouterClient};
use wayfarer_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ReplConfig, ThinkingSpinner,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    ConfigLoader::load_dotenv();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(ConfigurationError::from)?
    };

    // CLI flags win over files and environment
    if let Some(model) = &cli.model {
        config.provider.model = Some(model.clone());
    }
    if cli.whole_word {
        config.topic.match_mode = MatchMode::WholeWord;
    }
    if cli.exclude_system_prompt {
        config.session.include_system_prompt = false;
    }

    // Fail fast on missing credential/model
    let provider = config.provider.resolve_from_env()?;

    info!(
        model = %provider.model,
        base_url = %provider.base_url,
        timeout_secs = provider.timeout.as_secs(),
        "Starting wayfarer"
    );

    // === Dependency Injection ===
    let client = Arc::new(OpenRouterClient::new(&provider)?);
    let classifier = config.topic.to_classifier();
    info!(
        match_mode = ?classifier.match_mode(),
        keywords = classifier.keywords().len(),
        "Topic classifier ready"
    );
    let classifier = Arc::new(classifier);
    let mut use_case = HandleUserTurnUseCase::new(
        client,
        classifier,
        config.session_config(provider.model.as_str()),
    );

    let show_progress = config.repl.show_progress && !cli.quiet;
    if show_progress {
        use_case = use_case.with_observer(Arc::new(ThinkingSpinner::new()));
    }

    OutputConfig {
        color: config.output.color && !cli.no_color,
    }
    .apply();

    // Single question mode
    if let Some(question) = cli.question {
        let mut conversation = use_case.start_session();
        let reply = use_case.execute(&mut conversation, &question).await;
        println!("{}", ConsoleFormatter::format_reply(&reply.text));
        return Ok(());
    }

    // Chat mode
    let repl = ChatRepl::new(
        use_case,
        ReplConfig {
            show_progress,
            history_file: config.repl.history_file.clone(),
        },
    );
    repl.run().await?;

    Ok(())
}
