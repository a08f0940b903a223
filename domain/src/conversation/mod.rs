//! Conversation domain.
//!
//! - [`entities::Conversation`] — the append-only turn history of a session
//! - [`entities::Turn`] — a single message tagged with a [`entities::Role`]
//! - [`persona::Persona`] — the fixed texts a session runs under
//! - [`request::CompletionRequest`] — what is sent to the completion service

pub mod entities;
pub mod persona;
pub mod request;
pub mod state;
