//! Update agent error types.

use crate::errors::FreshenError;

/// Errors that can occur while talking to the update agent.
///
/// Check and activation failures are absorbed by the agent itself and never
/// surface here; from the prompt's point of view they look like "no update".
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Update agent registration failed: {message}")]
    RegistrationFailed { message: String },

    #[error("Update agents are not supported by this host")]
    Unsupported,

    #[error("Update agent closed its state subscription")]
    SubscriptionClosed,
}

impl FreshenError for AgentError {
    fn error_code(&self) -> &'static str {
        match self {
            AgentError::RegistrationFailed { .. } => "AGENT_REGISTRATION_FAILED",
            AgentError::Unsupported => "AGENT_UNSUPPORTED",
            AgentError::SubscriptionClosed => "AGENT_SUBSCRIPTION_CLOSED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_failed_error_display() {
        let error = AgentError::RegistrationFailed {
            message: "script 404".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Update agent registration failed: script 404"
        );
        assert_eq!(error.error_code(), "AGENT_REGISTRATION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_unsupported_error_code() {
        assert_eq!(AgentError::Unsupported.error_code(), "AGENT_UNSUPPORTED");
        assert_eq!(
            AgentError::SubscriptionClosed.error_code(),
            "AGENT_SUBSCRIPTION_CLOSED"
        );
    }
}
