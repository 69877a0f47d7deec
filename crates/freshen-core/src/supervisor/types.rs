use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the supervisor is in the update lifecycle.
///
/// Moves forward only: `Idle → UpdateAvailable → Activating`. The terminal
/// step (the reload itself) belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No update known.
    Idle,
    /// The agent reported a waiting version; activation is about to be issued.
    UpdateAvailable,
    /// Activation was issued. Nothing else happens until the host reloads.
    Activating,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::UpdateAvailable => write!(f, "update_available"),
            Phase::Activating => write!(f, "activating"),
        }
    }
}

/// Transient, non-blocking status shown between detection and reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    message: String,
}

impl StatusIndicator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StatusIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
