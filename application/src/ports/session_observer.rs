//! Session observer port
//!
//! Lets the presentation layer react while a completion call is outstanding
//! (spinner, disabled input, ...).

use wayfarer_domain::SessionState;

/// Callback for session state transitions
pub trait SessionObserver: Send + Sync {
    fn on_state_change(&self, state: SessionState);
}

/// No-op observer
pub struct NoObserver;

impl SessionObserver for NoObserver {
    fn on_state_change(&self, _state: SessionState) {}
}
