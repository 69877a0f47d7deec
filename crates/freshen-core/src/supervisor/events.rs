use serde::{Deserialize, Serialize};

/// Everything that happened to an update prompt during one mount.
///
/// Each variant describes an edge, never a repeated render: an update that
/// stays pending across many renders produces one `UpdateDetected` and one
/// `ActivationIssued`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The host has no update agent; the prompt stays inert.
    CapabilityAbsent,
    /// Registration succeeded and the state subscription is live.
    AgentRegistered,
    /// Registration failed. Logged only; the prompt renders nothing.
    RegistrationFailed { message: String },
    /// The current version is cached for offline use.
    OfflineReady,
    /// The agent reported a newer version waiting.
    UpdateDetected,
    /// Activation was requested from the agent.
    ActivationIssued { force_replace_all: bool },
    /// The poll timer was started.
    PollStarted { interval_ms: u64 },
    /// The poll timer was cancelled.
    PollStopped,
    /// The agent dropped the state subscription.
    SubscriptionClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::ActivationIssued {
            force_replace_all: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"ActivationIssued":{"force_replace_all":true}}"#);
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_unit_variant_serializes_as_string() {
        let json = serde_json::to_string(&Event::UpdateDetected).unwrap();
        assert_eq!(json, r#""UpdateDetected""#);
    }
}
