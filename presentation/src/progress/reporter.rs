//! Spinner shown while a completion is outstanding

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use wayfarer_application::SessionObserver;
use wayfarer_domain::SessionState;

/// Shows "Thinking..." while the session is `AwaitingCompletion`
pub struct ThinkingSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl ThinkingSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ThinkingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ThinkingSpinner {
    fn on_state_change(&self, state: SessionState) {
        let Ok(mut bar) = self.bar.lock() else {
            return;
        };

        match state {
            SessionState::AwaitingCompletion => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message("Thinking...");
                pb.enable_steady_tick(Duration::from_millis(100));
                *bar = Some(pb);
            }
            SessionState::Idle => {
                if let Some(pb) = bar.take() {
                    pb.finish_and_clear();
                }
            }
        }
    }
}
