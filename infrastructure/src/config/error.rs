//! Configuration errors

use thiserror::Error;

/// Errors raised while assembling configuration at startup.
///
/// All of them are fatal: the assistant must not start serving.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Missing {setting}: set the {env} environment variable")]
    MissingSetting { setting: &'static str, env: String },

    #[error("Invalid {setting}: {message}")]
    Invalid {
        setting: &'static str,
        message: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}
