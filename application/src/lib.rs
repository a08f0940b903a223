//! Application layer for wayfarer
//!
//! This crate contains the session controller, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    completion_client::{CompletionClient, CompletionError},
    session_observer::{NoObserver, SessionObserver},
};
pub use use_cases::handle_user_turn::{HandleUserTurnUseCase, TurnOutcome, TurnReply};
