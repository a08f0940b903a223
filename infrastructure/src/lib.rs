//! Infrastructure layer for wayfarer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openrouter;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigurationError, FileConfig, FileOutputConfig, FilePersonaConfig,
    FileProviderConfig, FileReplConfig, FileSessionConfig, FileTopicConfig, ProviderSettings,
};
pub use openrouter::OpenRouterClient;
