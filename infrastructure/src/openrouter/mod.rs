//! OpenRouter (OpenAI-compatible chat completions) adapter

mod client;
mod wire;

pub use client::OpenRouterClient;
