//! Update agent trait definition.

use std::future::Future;

use tokio::sync::watch;

use super::errors::AgentError;
use super::types::AgentState;

/// Trait defining the interface of the host's update agent.
///
/// The registration is a process-wide singleton owned by the host. The prompt
/// holds it behind an `Arc` so a test double can stand in for it.
pub trait UpdateAgent: Send + Sync + 'static {
    /// Register (or attach to) the agent and subscribe to its state.
    ///
    /// The returned receiver starts at the agent's current state and yields
    /// every later change.
    fn register(&self) -> Result<watch::Receiver<AgentState>, AgentError>;

    /// Swap in the waiting version and reload the running application.
    ///
    /// With `force_replace_all` every cached asset is discarded. Irreversible
    /// and returns nothing; the host tears the prompt down as part of the reload.
    fn activate(&self, force_replace_all: bool);

    /// Resolves once the agent is installed and able to serve checks.
    fn ready(&self) -> impl Future<Output = ()> + Send;

    /// Ask the agent to look for a newer deployment. Fire-and-forget: any
    /// result arrives through the state subscription.
    fn request_check(&self);

    /// Whether the host currently has network connectivity.
    fn is_online(&self) -> bool {
        true
    }
}
