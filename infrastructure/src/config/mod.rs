//! Configuration loading for wayfarer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WAYFARER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./wayfarer.toml` or `./.wayfarer.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wayfarer/config.toml`
//! 5. Default values
//!
//! The API credential and model identifier are read from the environment
//! (optionally seeded from `.env`) when the provider section is resolved.

mod error;
mod file_config;
mod loader;

pub use error::ConfigurationError;
pub use file_config::{
    FileConfig, FileOutputConfig, FilePersonaConfig, FileProviderConfig, FileReplConfig,
    FileSessionConfig, FileTopicConfig, ProviderSettings,
};
pub use loader::ConfigLoader;
